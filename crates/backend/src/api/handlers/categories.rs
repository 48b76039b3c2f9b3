use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::catalog::{Category, CategoryDto};

use crate::domain::categories;
use crate::errors::ApiError;

/// GET /api/categories
pub async fn list_public() -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(categories::service::list_public().await?))
}

/// GET /api/admin/categories
pub async fn list_admin() -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(categories::service::list_admin().await?))
}

/// POST /api/admin/categories
pub async fn create(
    Json(dto): Json<CategoryDto>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let created = categories::service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/admin/categories/:id
pub async fn update(
    Path(id): Path<i32>,
    Json(dto): Json<CategoryDto>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(categories::service::update(id, dto).await?))
}

/// DELETE /api/admin/categories/:id — marks the category inactive.
pub async fn delete(Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    categories::service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
