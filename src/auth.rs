use axum::http::{header, HeaderMap};

use crate::error::AppError;

/// Resolves a bearer credential to an account identity. Token issuance
/// belongs to an external auth service; this side only consumes tokens.
pub trait Authenticator: Send + Sync {
    fn resolve(&self, bearer: &str) -> Result<String, AppError>;
}

/// Treats the bearer token as the opaque identity it was issued for.
pub struct OpaqueTokenAuthenticator;

impl Authenticator for OpaqueTokenAuthenticator {
    fn resolve(&self, bearer: &str) -> Result<String, AppError> {
        let token = bearer.trim();
        if token.is_empty() {
            return Err(AppError::Unauthorized);
        }
        Ok(token.to_string())
    }
}

/// Pull the `Authorization: Bearer <token>` value out of the request headers.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)
}
