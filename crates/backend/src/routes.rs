use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::system::auth::middleware::{require_admin, require_auth};
use crate::system::tracing::request_logger;

/// Inline base64 images ride inside product JSON bodies, so the global limit
/// is wider than the 5 MB per-file cap the upload handler enforces.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Router::new()
        // ========================================
        // PUBLIC ROUTES
        // ========================================
        .route("/api/health", get(handlers::health::health))
        .route("/api/test", get(handlers::health::db_test))
        .route("/api/products", get(handlers::products::list_public))
        .route("/api/categories", get(handlers::categories::list_public))
        .route("/api/users/register", post(handlers::users::register))
        .route("/api/users/login", post(handlers::users::login))
        .route("/api/admin/login", post(handlers::users::admin_login))
        .route("/api/orders/whatsapp", post(handlers::orders::create_whatsapp))
        .route("/api/upload", post(handlers::upload::upload_image))
        // ========================================
        // CART ROUTES (authenticated user)
        // ========================================
        .route(
            "/api/users/:user_id/cart",
            get(handlers::carts::get_cart).layer(middleware::from_fn(require_auth)),
        )
        .route(
            "/api/users/cart",
            post(handlers::carts::save_cart).layer(middleware::from_fn(require_auth)),
        )
        // ========================================
        // ADMIN ROUTES (admin token required)
        // ========================================
        .route(
            "/api/admin/stats",
            get(handlers::stats::dashboard).layer(middleware::from_fn(require_admin)),
        )
        .route(
            "/api/admin/orders",
            get(handlers::orders::list_admin).layer(middleware::from_fn(require_admin)),
        )
        .route(
            "/api/admin/orders/:id",
            get(handlers::orders::get_detail).layer(middleware::from_fn(require_admin)),
        )
        .route(
            "/api/admin/orders/:id/status",
            put(handlers::orders::update_status).layer(middleware::from_fn(require_admin)),
        )
        .route(
            "/api/admin/products",
            get(handlers::products::list_admin)
                .post(handlers::products::create)
                .layer(middleware::from_fn(require_admin)),
        )
        .route(
            "/api/admin/products/:id",
            put(handlers::products::update)
                .delete(handlers::products::delete)
                .layer(middleware::from_fn(require_admin)),
        )
        .route(
            "/api/admin/categories",
            get(handlers::categories::list_admin)
                .post(handlers::categories::create)
                .layer(middleware::from_fn(require_admin)),
        )
        .route(
            "/api/admin/categories/:id",
            put(handlers::categories::update)
                .delete(handlers::categories::delete)
                .layer(middleware::from_fn(require_admin)),
        )
        // Uploaded product images and the built frontend
        .nest_service("/images", ServeDir::new("public/images"))
        .fallback_service(ServeDir::new("dist"))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
