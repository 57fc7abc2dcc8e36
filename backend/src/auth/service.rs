//! Token validation and issuance for the authentication system.
//!
//! The backend does not manage accounts, passwords, or sessions; it validates
//! bearer tokens minted by an external identity provider. A signing helper is
//! exposed for tooling and tests.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use super::errors::AuthError;
use super::models::{Claims, Role};

const TOKEN_LIFETIME: Duration = Duration::from_secs(60 * 60);

/// Validates signature and expiry, returning the embedded claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}

/// Signs a token for `subject` carrying the given roles.
pub fn issue_token(subject: &str, roles: &[Role], secret: &str) -> Result<String, AuthError> {
    let expiry = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AuthError::TokenCreation)?
        + TOKEN_LIFETIME;

    let claims = Claims {
        sub: subject.to_string(),
        roles: roles.iter().map(|r| r.as_str().to_string()).collect(),
        exp: expiry.as_secs() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::TokenCreation)
}
