use axum::http::StatusCode;
use axum::Json;
use contracts::auth::{
    AdminAuthResponse, AdminLoginRequest, AuthResponse, RegisterRequest, UserLoginRequest,
};

use crate::domain::users;
use crate::errors::ApiError;
use crate::system::admins;

/// POST /api/users/register
pub async fn register(
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let response = users::service::register(req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/users/login
pub async fn login(Json(req): Json<UserLoginRequest>) -> Result<Json<AuthResponse>, ApiError> {
    Ok(Json(users::service::login(req).await?))
}

/// POST /api/admin/login
pub async fn admin_login(
    Json(req): Json<AdminLoginRequest>,
) -> Result<Json<AdminAuthResponse>, ApiError> {
    Ok(Json(admins::service::login(req).await?))
}
