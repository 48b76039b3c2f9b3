use anyhow::{Context, Result};
use chrono::Utc;
use contracts::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;

const USER_TOKEN_LIFETIME_HOURS: i64 = 24;
const ADMIN_TOKEN_LIFETIME_HOURS: i64 = 8;

static JWT_SECRET: OnceCell<String> = OnceCell::new();

/// Signing secret for this process: configured value if present, otherwise a
/// generated one that lives until restart (which invalidates issued tokens).
pub fn get_jwt_secret() -> &'static str {
    JWT_SECRET.get_or_init(|| {
        if let Some(secret) = crate::shared::config::get().auth.jwt_secret.clone() {
            return secret;
        }
        tracing::warn!("No JWT secret configured, generating an ephemeral one");
        generate_jwt_secret()
    })
}

/// Generate a cryptographically secure JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(random_bytes)
}

/// Consumer token, 24 hours.
pub fn generate_user_token(user_id: i32, name: &str, secret: &str) -> Result<String> {
    generate_token(user_id, name, false, USER_TOKEN_LIFETIME_HOURS, secret)
}

/// Admin token, 8 hours.
pub fn generate_admin_token(admin_id: i32, username: &str, secret: &str) -> Result<String> {
    generate_token(admin_id, username, true, ADMIN_TOKEN_LIFETIME_HOURS, secret)
}

fn generate_token(
    id: i32,
    username: &str,
    is_admin: bool,
    lifetime_hours: i64,
    secret: &str,
) -> Result<String> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: id.to_string(),
        username: username.to_string(),
        is_admin,
        exp: (now + chrono::Duration::hours(lifetime_hours)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

/// Validate JWT token and extract claims
pub fn validate_token(token: &str, secret: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn user_token_round_trips() {
        let token = generate_user_token(5, "A", SECRET).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "5");
        assert_eq!(claims.username, "A");
        assert!(!claims.is_admin);
        // 24 h lifetime, give or take the test's own runtime
        let lifetime = claims.exp - claims.iat;
        assert_eq!(lifetime, 24 * 3600);
    }

    #[test]
    fn admin_token_has_short_lifetime_and_flag() {
        let token = generate_admin_token(1, "admin", SECRET).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();
        assert!(claims.is_admin);
        assert_eq!(claims.exp - claims.iat, 8 * 3600);
    }

    #[test]
    fn tampered_or_foreign_tokens_fail() {
        let token = generate_user_token(5, "A", SECRET).unwrap();
        assert!(validate_token(&token, "other-secret").is_err());
        assert!(validate_token("not-a-token", SECRET).is_err());
    }
}
