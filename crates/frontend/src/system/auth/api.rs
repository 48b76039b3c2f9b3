use contracts::auth::{
    AdminAuthResponse, AdminLoginRequest, AuthResponse, RegisterRequest, UserLoginRequest,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, extract_error};

/// Shopper login with e-mail and password.
pub async fn user_login(email: String, password: String) -> Result<AuthResponse, String> {
    let request = UserLoginRequest { email, password };

    let response = Request::post(&api_url("/api/users/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(extract_error(response).await);
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a shopper account; logs in on success.
pub async fn user_register(
    name: String,
    email: String,
    password: String,
) -> Result<AuthResponse, String> {
    let request = RegisterRequest {
        name,
        email,
        password,
    };

    let response = Request::post(&api_url("/api/users/register"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(extract_error(response).await);
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Admin login with username and password.
pub async fn admin_login(username: String, password: String) -> Result<AdminAuthResponse, String> {
    let request = AdminLoginRequest { username, password };

    let response = Request::post(&api_url("/api/admin/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(extract_error(response).await);
    }

    response
        .json::<AdminAuthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
