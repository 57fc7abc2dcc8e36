//! Custom error types specific to authentication failures.
//!
//! This module defines the errors that can occur while resolving a caller's
//! role set. Every one of them renders as the same forbidden response: an
//! unauthenticated caller is treated identically to one lacking any role.

use thiserror::Error;

use crate::errors::ApiError;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("missing bearer credentials")]
    MissingCredentials,

    #[error("invalid bearer token")]
    InvalidToken,

    #[error("token creation failed")]
    TokenCreation,
}

impl From<AuthError> for ApiError {
    fn from(_: AuthError) -> Self {
        ApiError::Forbidden
    }
}
