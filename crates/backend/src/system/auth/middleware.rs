use axum::body::Body;
use axum::extract::Request;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::errors::ApiError;
use crate::system::admins;

use super::jwt;

/// Pull the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Middleware that requires a valid JWT (consumer or admin).
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers()).ok_or(ApiError::Unauthorized)?;

    let claims = jwt::validate_token(token, jwt::get_jwt_secret())
        .map_err(|_| ApiError::Unauthorized)?;

    // Claims go into request extensions for the CurrentUser extractor
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Middleware that requires an admin JWT whose admin account still exists.
/// A valid token for a deleted admin row answers 403, not 401.
pub async fn require_admin(mut req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers()).ok_or(ApiError::Unauthorized)?;

    let claims = jwt::validate_token(token, jwt::get_jwt_secret())
        .map_err(|_| ApiError::Unauthorized)?;

    if !claims.is_admin {
        return Err(ApiError::Forbidden);
    }

    let admin_id: i32 = claims.sub.parse().map_err(|_| ApiError::Forbidden)?;
    if admins::repository::get_by_id(admin_id).await?.is_none() {
        return Err(ApiError::Forbidden);
    }

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_requires_scheme_prefix() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("Bearer abc"));
        assert_eq!(bearer_token(&headers), Some("abc"));
    }
}
