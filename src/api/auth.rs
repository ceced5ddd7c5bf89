//! HTTP Basic authentication
//!
//! Middleware that rejects requests whose `Authorization` header does not
//! carry the configured credentials.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use super::handlers::AppState;
use crate::error::{ApiError, Result};

/// Configured user name / password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Parses an HTTP Basic `Authorization` header value into (user, password).
///
/// Returns None for any other scheme or a malformed payload. The scheme token
/// is matched case-insensitively. The password may itself contain colons; only
/// the first colon separates the pair.
pub fn parse_basic_auth(header_value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header_value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let credentials = String::from_utf8(decoded).ok()?;
    let (username, password) = credentials.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Middleware guarding the employee routes.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response> {
    let supplied = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(parse_basic_auth);

    match supplied {
        Some((username, password)) if state.credentials.matches(&username, &password) => {
            Ok(next.run(req).await)
        }
        Some((username, _)) => {
            debug!(%username, path = %req.uri().path(), "Rejected basic auth credentials");
            Err(ApiError::Unauthorized)
        }
        None => {
            debug!(path = %req.uri().path(), "Missing or malformed Authorization header");
            Err(ApiError::Unauthorized)
        }
    }
}
