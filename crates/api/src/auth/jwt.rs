//! Bearer-token validation.
//!
//! Access tokens are minted by the account service and signed with a shared
//! HS256 secret. This server only checks the signature and expiry and reads
//! the account id from `sub`.

use cosplay_core::types::DbId;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// The subset of access-token claims this server relies on.
///
/// Any other claims the issuer adds are ignored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Account id.
    pub sub: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Shared secret for verifying access tokens.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl JwtConfig {
    /// Read `JWT_SECRET` from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");
        Self { secret }
    }
}

/// Verify `token` and return its [`Claims`].
///
/// Fails on a bad signature or when `exp` is missing or in the past.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    use super::*;

    const SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
        }
    }

    fn sign(claims: serde_json::Value, secret: &str) -> String {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("encoding should succeed")
    }

    #[test]
    fn issuer_token_yields_account_id() {
        let now = chrono::Utc::now().timestamp();
        let token = sign(
            json!({ "sub": 42, "exp": now + 900, "iat": now, "role": "user", "jti": "abc" }),
            SECRET,
        );

        let claims = validate_token(&token, &config(SECRET)).expect("token should validate");
        assert_eq!(claims.sub, 42);
    }

    #[test]
    fn expired_token_fails() {
        // Well past the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let token = sign(json!({ "sub": 1, "exp": now - 300 }), SECRET);

        assert!(validate_token(&token, &config(SECRET)).is_err());
    }

    #[test]
    fn token_signed_with_another_secret_fails() {
        let now = chrono::Utc::now().timestamp();
        let token = sign(json!({ "sub": 1, "exp": now + 900 }), "secret-alpha");

        assert!(validate_token(&token, &config("secret-bravo")).is_err());
    }

    #[test]
    fn token_without_expiry_fails() {
        let token = sign(json!({ "sub": 1 }), SECRET);

        assert!(validate_token(&token, &config(SECRET)).is_err());
    }
}
