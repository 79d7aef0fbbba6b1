//! Rider endpoints.

use super::ApiError;
use crate::core::rides::{BookRideRequest, Ride};

pub async fn book_ride(request: &BookRideRequest) -> Result<Ride, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::post_json("/api/rides/", request).await
    }
    #[cfg(feature = "ssr")]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Rides belonging to the current rider; the backend scopes the list by the
/// credential.
pub async fn my_rides() -> Result<Vec<Ride>, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::get_json("/api/rides/").await
    }
    #[cfg(feature = "ssr")]
    {
        Err(ApiError::Unavailable)
    }
}
