use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Console + file logging. RUST_LOG overrides the default filter; SQL noise
/// from the driver layers is kept at warn.
pub fn init() -> anyhow::Result<()> {
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn,sea_orm=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

/// Per-request log line: method, path, status, duration, response size.
/// Buffers the response body to measure the real size.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(_) => {
            tracing::warn!(
                "{} {} -> {} in {}ms (unreadable body)",
                method,
                path,
                parts.status.as_u16(),
                start.elapsed().as_millis()
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    tracing::info!(
        "{} {} -> {} in {}ms, {} bytes",
        method,
        path,
        parts.status.as_u16(),
        start.elapsed().as_millis(),
        bytes.len()
    );

    Response::from_parts(parts, Body::from(bytes))
}
