//! Login Handler
//!
//! Placeholder credential check: one hardcoded account, no hashing, no rate
//! limiting, no session. Replacing it with real auth is a product decision.

use axum::{extract::rejection::JsonRejection, Json};
use pokedex_domain::{ApiMessage, LoginRequest};
use tracing::{debug, info};

use crate::error::GatewayError;

const DEMO_USERNAME: &str = "admin";
const DEMO_PASSWORD: &str = "admin";

pub fn credentials_match(username: &str, password: &str) -> bool {
    username == DEMO_USERNAME && password == DEMO_PASSWORD
}

/// `POST /api/login`
///
/// An unreadable body counts as empty credentials.
pub async fn login_handler(
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiMessage>, GatewayError> {
    let request = payload
        .map(|Json(request)| request)
        .unwrap_or_else(|rejection| {
            debug!("Unreadable login body: {rejection}");
            LoginRequest::default()
        });

    if !credentials_match(&request.username, &request.password) {
        info!("Rejected login attempt");
        return Err(GatewayError::Unauthorized);
    }

    Ok(Json(ApiMessage::ok("Login successful.")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_admin_admin_matches() {
        assert!(credentials_match("admin", "admin"));
        assert!(!credentials_match("admin", "Admin"));
        assert!(!credentials_match("x", "y"));
        assert!(!credentials_match("", ""));
    }
}
