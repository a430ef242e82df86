use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecurityConfig;

/// Claims carried by every issued token. `sub` is the principal id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("JWT generation error: {0}")]
    TokenGeneration(String),
}

/// Signs and verifies principal tokens with a process-wide HMAC secret.
///
/// Rotating the secret invalidates every outstanding token.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validity: Duration,
}

impl TokenCodec {
    pub fn new(secret: &str, validity: Duration) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::InvalidSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validity,
        })
    }

    pub fn from_config(security: &SecurityConfig) -> Result<Self, TokenError> {
        // chrono::Duration panics past ~292 million years; a century is plenty
        let hours = i64::try_from(security.jwt_expiry_hours)
            .unwrap_or(i64::MAX)
            .min(24 * 365 * 100);
        Self::new(&security.jwt_secret, Duration::hours(hours))
    }

    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Issue a token for `principal_id` expiring one validity window from now.
    pub fn issue(&self, principal_id: &str) -> Result<String, TokenError> {
        self.issue_at(principal_id, Utc::now())
    }

    pub fn issue_at(&self, principal_id: &str, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: principal_id.to_string(),
            exp: (issued_at + self.validity).timestamp(),
            iat: issued_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::TokenGeneration(e.to_string()))
    }

    /// Verify signature and expiry, returning the embedded principal id.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::ExpiredToken,
            _ => TokenError::InvalidToken,
        })?;

        Ok(token_data.claims.sub)
    }
}
