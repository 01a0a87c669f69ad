//! Stateless bearer tokens: HS256-signed JWTs carrying identity claims.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AppError;
use crate::models::Role;

/// Fixed token lifetime.
pub const TOKEN_TTL_HOURS: i64 = 2;

/// Claims embedded in every issued token. Validity is purely cryptographic
/// and time-based; nothing is persisted. The role is read from here on each
/// request, so a role change takes effect only after re-issuance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Administrator email.
    pub sub: String,
    pub profile: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Why a presented token was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signature does not verify")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("token is malformed")]
    Malformed,
}

/// Issue a signed token for an authenticated administrator.
pub fn issue(email: &str, role: Role, secret: &str) -> Result<String, AppError> {
    issue_at(email, role, Utc::now(), secret)
}

fn issue_at(
    email: &str,
    role: Role,
    issued_at: DateTime<Utc>,
    secret: &str,
) -> Result<String, AppError> {
    let claims = Claims {
        sub: email.to_string(),
        profile: role,
        iat: issued_at.timestamp(),
        exp: (issued_at + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::TokenError(e.to_string()))
}

/// Validate a presented token against the configured secret.
///
/// Issuer and audience are intentionally not checked (single-tenant
/// deployment). Expiry is enforced whenever the signature verifies.
pub fn validate(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| classify(&e))
}

fn classify(error: &jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    }
}
