use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::config;
use crate::types::error::AppError;
use crate::types::token::{Claims, TokenPurpose};

pub const SESSION_TTL_MINUTES: i64 = 60;
pub const RESET_TTL_MINUTES: i64 = 60;

pub fn issue_session_token(email: &str) -> Result<String, AppError> {
    issue_at(email, TokenPurpose::Session, Utc::now(), SESSION_TTL_MINUTES)
}

pub fn issue_reset_token(email: &str) -> Result<String, AppError> {
    issue_at(email, TokenPurpose::Reset, Utc::now(), RESET_TTL_MINUTES)
}

fn issue_at(
    email: &str,
    purpose: TokenPurpose,
    issued_at: DateTime<Utc>,
    ttl_minutes: i64,
) -> Result<String, AppError> {
    let claims = Claims {
        sub: email.to_string(),
        purpose,
        iat: issued_at.timestamp(),
        exp: (issued_at + Duration::minutes(ttl_minutes)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config().auth_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
}

/// Signature first, then expiry, then purpose. Every failure collapses into
/// the same Unauthorized so callers cannot probe which check tripped.
pub fn verify_token(token: &str, expected: TokenPurpose) -> Result<String, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["sub", "exp"]);

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config().auth_secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AppError::Unauthorized)?;

    if data.claims.purpose != expected {
        return Err(AppError::Unauthorized);
    }

    Ok(data.claims.sub)
}
