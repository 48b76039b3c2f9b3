use contracts::catalog::{Category, CategoryDto};

use crate::errors::ApiError;
use crate::shared::categories as category_names;

use super::repository;

/// Active categories for the storefront.
pub async fn list_public() -> Result<Vec<Category>, ApiError> {
    Ok(repository::list_active().await?)
}

/// All categories for the admin panel.
pub async fn list_admin() -> Result<Vec<Category>, ApiError> {
    Ok(repository::list_all().await?)
}

pub async fn create(dto: CategoryDto) -> Result<Category, ApiError> {
    validate(&dto)?;
    let id = repository::insert(&dto).await?;
    category_names::reload().await?;
    repository::get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)
}

pub async fn update(id: i32, dto: CategoryDto) -> Result<Category, ApiError> {
    validate(&dto)?;
    if !repository::update(id, &dto).await? {
        return Err(ApiError::NotFound);
    }
    category_names::reload().await?;
    repository::get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)
}

pub async fn delete(id: i32) -> Result<(), ApiError> {
    if !repository::soft_delete(id).await? {
        return Err(ApiError::NotFound);
    }
    category_names::reload().await?;
    Ok(())
}

fn validate(dto: &CategoryDto) -> Result<(), ApiError> {
    if dto.name.trim().is_empty() {
        return Err(ApiError::Validation("Nome é obrigatório".to_string()));
    }
    Ok(())
}
