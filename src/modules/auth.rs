use reqwest::Client;
use serde_json::Value;
use super::config::Config;
use super::error::AuthError;

pub const TOKEN_PATH: &str = "/api/oauth/connect/token";
pub const SCOPE: &str = "http://www.thinkministry.com/dataplatform/scopes/all";

// bearer token for the platform api, only valid for this run
pub struct AccessToken(String);

impl AccessToken {
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> AccessToken {
        AccessToken(token)
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

// exchange the client credentials for an access token (client_credentials grant)
pub async fn authenticate(client: &Client, config: &Config) -> Result<AccessToken, AuthError> {
    println!("Attempting to get authentication token...");

    let auth_url = format!("{}{}", config.base_url(), TOKEN_PATH);
    tracing::debug!(url = %auth_url, client_id = %config.client_id, "requesting access token");

    let form = [
        ("grant_type", "client_credentials"),
        ("scope", SCOPE),
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.as_str()),
    ];

    let response = client
        .post(&auth_url)
        .form(&form)
        .send()
        .await
        .map_err(|error| AuthError::TransportFailure { detail: error.to_string() })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|error| AuthError::TransportFailure { detail: error.to_string() })?;
    tracing::debug!(status = status.as_u16(), "token endpoint responded");

    if !status.is_success() {
        return Err(AuthError::HttpFailure { status: status.as_u16(), body });
    }

    let token = read_access_token(&body)?;
    println!("Successfully obtained authentication token.");
    Ok(token)
}

fn read_access_token(body: &str) -> Result<AccessToken, AuthError> {
    let token_data: Value = serde_json::from_str(body)
        .map_err(|_| AuthError::MalformedResponse { body: body.to_owned() })?;

    match token_data.get("access_token").and_then(Value::as_str) {
        Some(token) if !token.is_empty() => Ok(AccessToken::from(token.to_owned())),
        _ => Err(AuthError::MissingToken),
    }
}
