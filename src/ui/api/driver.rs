//! Driver endpoints.

use serde::Serialize;

use super::ApiError;
use crate::core::rides::{CarDetails, GeoPoint, Ride};
use crate::core::session::Account;

#[derive(Serialize)]
struct LocationBody<'a> {
    current_location: &'a GeoPoint,
}

#[derive(Serialize)]
struct AvailabilityBody {
    is_available: bool,
}

/// Rides assigned to the current driver; scoped by the credential.
pub async fn assigned_rides() -> Result<Vec<Ride>, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::get_json("/api/rides/").await
    }
    #[cfg(feature = "ssr")]
    {
        Err(ApiError::Unavailable)
    }
}

pub async fn update_location(location: &GeoPoint) -> Result<Account, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::patch_json(
            "/api/users/me/",
            &LocationBody {
                current_location: location,
            },
        )
        .await
    }
    #[cfg(feature = "ssr")]
    {
        let _ = location;
        Err(ApiError::Unavailable)
    }
}

pub async fn set_availability(is_available: bool) -> Result<Account, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::patch_json("/api/users/me/", &AvailabilityBody { is_available }).await
    }
    #[cfg(feature = "ssr")]
    {
        let _ = is_available;
        Err(ApiError::Unavailable)
    }
}

pub async fn update_car(details: &CarDetails) -> Result<Account, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::patch_json("/api/users/me/", details).await
    }
    #[cfg(feature = "ssr")]
    {
        let _ = details;
        Err(ApiError::Unavailable)
    }
}

pub async fn accept_ride(ride_id: i64) -> Result<Ride, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::post_empty(&format!("/api/rides/{ride_id}/accept_ride/")).await
    }
    #[cfg(feature = "ssr")]
    {
        let _ = ride_id;
        Err(ApiError::Unavailable)
    }
}

pub async fn start_ride(ride_id: i64) -> Result<Ride, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::post_empty(&format!("/api/rides/{ride_id}/start_ride/")).await
    }
    #[cfg(feature = "ssr")]
    {
        let _ = ride_id;
        Err(ApiError::Unavailable)
    }
}

pub async fn complete_ride(ride_id: i64) -> Result<Ride, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::post_empty(&format!("/api/rides/{ride_id}/complete_ride/")).await
    }
    #[cfg(feature = "ssr")]
    {
        let _ = ride_id;
        Err(ApiError::Unavailable)
    }
}
