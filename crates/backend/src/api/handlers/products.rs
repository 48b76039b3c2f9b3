use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::catalog::{AdminProduct, ProductDto, StorefrontProduct};

use crate::domain::products;
use crate::errors::ApiError;

/// GET /api/products
pub async fn list_public() -> Result<Json<Vec<StorefrontProduct>>, ApiError> {
    Ok(Json(products::service::list_public().await?))
}

/// GET /api/admin/products
pub async fn list_admin() -> Result<Json<Vec<AdminProduct>>, ApiError> {
    Ok(Json(products::service::list_admin().await?))
}

/// POST /api/admin/products
pub async fn create(
    Json(dto): Json<ProductDto>,
) -> Result<(StatusCode, Json<AdminProduct>), ApiError> {
    let created = products::service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/admin/products/:id
pub async fn update(
    Path(id): Path<i32>,
    Json(dto): Json<ProductDto>,
) -> Result<Json<AdminProduct>, ApiError> {
    Ok(Json(products::service::update(id, dto).await?))
}

/// DELETE /api/admin/products/:id — marks the product inactive.
pub async fn delete(Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    products::service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
