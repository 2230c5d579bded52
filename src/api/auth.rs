//! Login Binding

use pokedex_domain::{ApiMessage, AppError, Credentials, LoginRequest};

use super::{endpoint, read_json, transport_error};

/// `POST /login`. `Ok(true)` only when the gateway accepted the credentials;
/// a 401 comes back as `Err(AppError::Unauthorized)`.
pub async fn login(credentials: &Credentials) -> Result<bool, AppError> {
    let body = LoginRequest {
        username: credentials.username.clone(),
        password: credentials.password.clone(),
    };

    let response = reqwest::Client::new()
        .post(endpoint("/login"))
        .json(&body)
        .send()
        .await
        .map_err(transport_error)?;

    let message: ApiMessage = read_json(response).await?;
    Ok(message.success)
}
