//! Authentication endpoints.

use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::core::session::Account;

/// Login body; the backend accepts a username or a phone number.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub password: String,
}

/// Registration body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Response to both login and registration: the account plus the bearer
/// credential for it.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: Account,
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::post_json("/api/auth/login/", request).await
    }
    #[cfg(feature = "ssr")]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::post_json("/api/auth/register/", request).await
    }
    #[cfg(feature = "ssr")]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the account attached to the current credential.
pub async fn me() -> Result<Account, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::get_json("/api/users/me/").await
    }
    #[cfg(feature = "ssr")]
    {
        Err(ApiError::Unavailable)
    }
}
