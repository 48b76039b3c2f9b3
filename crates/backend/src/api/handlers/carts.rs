use axum::extract::Path;
use axum::Json;
use contracts::cart::{CartResponse, SaveCartRequest};
use serde_json::{json, Value};

use crate::domain::carts;
use crate::errors::ApiError;
use crate::system::auth::extractor::CurrentUser;

fn claims_user_id(sub: &str) -> Result<i32, ApiError> {
    sub.parse().map_err(|_| ApiError::Forbidden)
}

/// GET /api/users/:user_id/cart — a user can only read their own cart.
pub async fn get_cart(
    CurrentUser(claims): CurrentUser,
    Path(user_id): Path<i32>,
) -> Result<Json<CartResponse>, ApiError> {
    if claims_user_id(&claims.sub)? != user_id {
        return Err(ApiError::Forbidden);
    }
    let items = carts::service::get_cart(user_id).await?;
    Ok(Json(CartResponse { items }))
}

/// POST /api/users/cart — replaces the authenticated user's cart.
pub async fn save_cart(
    CurrentUser(claims): CurrentUser,
    Json(req): Json<SaveCartRequest>,
) -> Result<Json<Value>, ApiError> {
    let user_id = claims_user_id(&claims.sub)?;
    carts::service::save_cart(user_id, &req.items).await?;
    Ok(Json(json!({ "success": true })))
}
