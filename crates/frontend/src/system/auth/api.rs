use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Error returned by [`fetch_with_auth`] when the backend rejects the token
pub const UNAUTHORIZED: &str = "Unauthorized";

/// Why a login attempt did not produce a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFailure {
    /// The endpoint rejected the credentials (HTTP 401)
    InvalidCredentials,
    /// Transport error or unexpected response
    Unavailable(String),
}

impl LoginFailure {
    /// Localization key of the message shown on the login form
    pub fn message_key(&self) -> &'static str {
        match self {
            LoginFailure::InvalidCredentials => "invalid_credentials",
            LoginFailure::Unavailable(_) => "login_unavailable",
        }
    }
}

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, LoginFailure> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/system/auth/login"))
        .json(&request)
        .map_err(|e| LoginFailure::Unavailable(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| LoginFailure::Unavailable(format!("Failed to send request: {}", e)))?;

    if response.status() == 401 {
        return Err(LoginFailure::InvalidCredentials);
    }
    if !response.ok() {
        return Err(LoginFailure::Unavailable(format!(
            "Login failed: {}",
            response.status()
        )));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| LoginFailure::Unavailable(format!("Failed to parse response: {}", e)))
}

/// Get current user info
pub async fn get_current_user(token: &str) -> Result<UserInfo, String> {
    fetch_with_auth("/api/system/auth/me", token).await
}

/// Fetch with authentication (helper function)
pub async fn fetch_with_auth<T>(path: &str, token: &str) -> Result<T, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let response = Request::get(&api_url(path))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 401 {
        return Err(UNAUTHORIZED.to_string());
    }
    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
