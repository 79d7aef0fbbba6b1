//! Admin endpoints.

use serde::Serialize;

use super::ApiError;
use crate::core::rides::Ride;
use crate::core::session::Account;

/// Body for provisioning a driver account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateDriverRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub car_type: String,
    pub car_color: String,
    pub license_plate: String,
}

/// Every account the backend knows about.
pub async fn accounts() -> Result<Vec<Account>, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::get_json("/api/users/").await
    }
    #[cfg(feature = "ssr")]
    {
        Err(ApiError::Unavailable)
    }
}

pub async fn ride_history() -> Result<Vec<Ride>, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::get_json("/api/rides/").await
    }
    #[cfg(feature = "ssr")]
    {
        Err(ApiError::Unavailable)
    }
}

pub async fn create_driver(request: &CreateDriverRequest) -> Result<Account, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::post_json("/api/users/create_driver/", request).await
    }
    #[cfg(feature = "ssr")]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
