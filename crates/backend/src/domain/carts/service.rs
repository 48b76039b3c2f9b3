use contracts::cart::{CartItem, CartLine};

use crate::errors::ApiError;

use super::repository;

/// Full cart replacement for the authenticated user.
pub async fn save_cart(user_id: i32, items: &[CartItem]) -> Result<(), ApiError> {
    if items.iter().any(|i| i.quantity <= 0) {
        return Err(ApiError::Validation(
            "Quantidade deve ser maior que zero".to_string(),
        ));
    }
    repository::replace(user_id, items).await?;
    Ok(())
}

pub async fn get_cart(user_id: i32) -> Result<Vec<CartLine>, ApiError> {
    Ok(repository::get(user_id).await?)
}
