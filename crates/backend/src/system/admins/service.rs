use contracts::auth::{AdminAuthResponse, AdminInfo, AdminLoginRequest};

use crate::errors::ApiError;
use crate::system::auth::{jwt, password};

use super::repository;

/// Admin login. Unknown username and wrong password answer identically.
pub async fn login(req: AdminLoginRequest) -> Result<AdminAuthResponse, ApiError> {
    let record = repository::get_by_username(req.username.trim())
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !password::verify_password(&req.password, &record.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    let token = jwt::generate_admin_token(record.id, &record.username, jwt::get_jwt_secret())?;

    Ok(AdminAuthResponse {
        token,
        user: record.into(),
    })
}

pub async fn get_by_id(id: i32) -> Result<Option<AdminInfo>, ApiError> {
    Ok(repository::get_by_id(id).await?)
}
