use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;

use crate::shared::config::AuthConfig;

pub struct JwtSettings {
    secret: String,
    lifetime_hours: i64,
}

static JWT_SETTINGS: OnceCell<JwtSettings> = OnceCell::new();

/// Install the signing secret and token lifetime. Called once at startup.
pub fn initialize(config: &AuthConfig) -> Result<()> {
    let secret = match config.jwt_secret.as_deref().map(str::trim) {
        Some(secret) if !secret.is_empty() => secret.to_string(),
        _ => {
            tracing::warn!("auth.jwt_secret is not set, generated a random one; tokens will not survive a restart");
            generate_jwt_secret()
        }
    };

    JWT_SETTINGS
        .set(JwtSettings {
            secret,
            lifetime_hours: config.token_lifetime_hours,
        })
        .map_err(|_| anyhow!("JWT settings already initialized"))
}

fn settings() -> Result<&'static JwtSettings> {
    JWT_SETTINGS
        .get()
        .ok_or_else(|| anyhow!("JWT settings are not initialized"))
}

/// Generate a signed access token for the user
pub fn generate_access_token(user_id: &str, username: &str, is_admin: bool) -> Result<String> {
    let settings = settings()?;
    let now = Utc::now();
    let claims = TokenClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        is_admin,
        exp: (now + chrono::Duration::hours(settings.lifetime_hours)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };
    encode_claims(&claims, &settings.secret)
}

/// Validate a token and extract its claims
pub fn validate_token(token: &str) -> Result<TokenClaims> {
    decode_claims(token, &settings()?.secret)
}

fn encode_claims(claims: &TokenClaims, secret: &str) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

fn decode_claims(token: &str, secret: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// Generate a cryptographically secure JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

#[cfg(test)]
pub(crate) fn init_for_tests() {
    let _ = JWT_SETTINGS.set(JwtSettings {
        secret: "test-secret".to_string(),
        lifetime_hours: 1,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(exp_offset_secs: i64) -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            sub: "user-1".into(),
            username: "admin".into(),
            is_admin: true,
            exp: (now + exp_offset_secs) as usize,
            iat: now as usize,
        }
    }

    #[test]
    fn test_encode_decode() {
        let token = encode_claims(&claims(3600), "k").unwrap();
        let decoded = decode_claims(&token, "k").unwrap();
        assert_eq!(decoded.sub, "user-1");
        assert_eq!(decoded.username, "admin");
        assert!(decoded.is_admin);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = encode_claims(&claims(3600), "k").unwrap();
        assert!(decode_claims(&token, "other").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Beyond the default 60s leeway
        let token = encode_claims(&claims(-3600), "k").unwrap();
        assert!(decode_claims(&token, "k").is_err());
    }

    #[test]
    fn test_generated_secret_is_256_bits() {
        use base64::{engine::general_purpose, Engine as _};
        let secret = generate_jwt_secret();
        let bytes = general_purpose::STANDARD.decode(secret).unwrap();
        assert_eq!(bytes.len(), 32);
    }

    #[test]
    fn test_access_token_round_trip_through_settings() {
        init_for_tests();
        let token = generate_access_token("user-7", "clerk", false).unwrap();
        let claims = validate_token(&token).unwrap();
        assert_eq!(claims.sub, "user-7");
        assert_eq!(claims.username, "clerk");
        assert!(!claims.is_admin);
        assert!(claims.exp > claims.iat);
    }
}
