use std::net::SocketAddr;
use tokio::net::TcpListener;

use backend::{routes, shared, system};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::init()?;

    let config = shared::config::load_config()?;
    let port = config.server.port;
    let db_path = shared::config::get_database_path(&config)?;
    shared::config::init(config)?;

    shared::data::db::initialize_database(Some(&db_path.to_string_lossy()))
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    system::initialization::seed_initial_data().await?;
    shared::categories::reload().await?;

    let app = routes::build_router();

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
