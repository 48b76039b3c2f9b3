use contracts::auth::{AuthResponse, RegisterRequest, UserInfo, UserLoginRequest};

use crate::errors::ApiError;
use crate::system::auth::{jwt, password};

use super::repository;

/// Create a consumer account and log it in. Duplicate e-mails answer with
/// the message existing clients match on.
pub async fn register(req: RegisterRequest) -> Result<AuthResponse, ApiError> {
    let name = req.name.trim();
    let email = req.email.trim().to_lowercase();

    if name.is_empty() || email.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation(
            "Nome, e-mail e senha são obrigatórios".to_string(),
        ));
    }
    if !email.contains('@') {
        return Err(ApiError::Validation("E-mail inválido".to_string()));
    }
    if req.password.len() < 6 {
        return Err(ApiError::Validation(
            "A senha deve ter pelo menos 6 caracteres".to_string(),
        ));
    }
    if repository::get_by_email(&email).await?.is_some() {
        return Err(ApiError::Validation("E-mail já cadastrado".to_string()));
    }

    let hash = password::hash_password(&req.password)?;
    let id = repository::create(name, &email, &hash, None, None).await?;

    let token = jwt::generate_user_token(id, name, jwt::get_jwt_secret())?;
    Ok(AuthResponse {
        token,
        user: UserInfo {
            id,
            name: name.to_string(),
            email,
        },
    })
}

/// Consumer login. Unknown e-mail and wrong password answer identically.
pub async fn login(req: UserLoginRequest) -> Result<AuthResponse, ApiError> {
    let email = req.email.trim().to_lowercase();

    let record = repository::get_by_email(&email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !password::verify_password(&req.password, &record.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    let token = jwt::generate_user_token(record.id, &record.name, jwt::get_jwt_secret())?;
    Ok(AuthResponse {
        token,
        user: record.into(),
    })
}
