//! Ride domain model shared by the gateway client and the dashboards.
//!
//! These are backend-shaped payloads; this layer renders them and never
//! recomputes fares or assignment.

use serde::{Deserialize, Serialize};

use crate::core::session::{Account, Role};

/// Lifecycle of a ride as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideStatus {
    Requested,
    Accepted,
    Started,
    Completed,
    Cancelled,
    /// Any status string this client does not know yet. Rendered verbatim-ish
    /// but excluded from every action.
    #[serde(other)]
    Unknown,
}

impl RideStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RideStatus::Requested => "Requested",
            RideStatus::Accepted => "Accepted",
            RideStatus::Started => "Started",
            RideStatus::Completed => "Completed",
            RideStatus::Cancelled => "Cancelled",
            RideStatus::Unknown => "Unknown",
        }
    }

    /// Badge styling per status, used by every ride list.
    pub fn badge_class(&self) -> &'static str {
        match self {
            RideStatus::Requested => "bg-yellow-100 text-yellow-800",
            RideStatus::Accepted => "bg-blue-100 text-blue-800",
            RideStatus::Started => "bg-indigo-100 text-indigo-800",
            RideStatus::Completed => "bg-green-100 text-green-800",
            RideStatus::Cancelled => "bg-red-100 text-red-800",
            RideStatus::Unknown => "bg-gray-100 text-gray-800",
        }
    }

    /// A ride still occupying a driver.
    pub fn is_active(&self) -> bool {
        matches!(self, RideStatus::Accepted | RideStatus::Started)
    }

    pub fn can_accept(&self) -> bool {
        matches!(self, RideStatus::Requested)
    }

    pub fn can_start(&self) -> bool {
        matches!(self, RideStatus::Accepted)
    }

    pub fn can_complete(&self) -> bool {
        matches!(self, RideStatus::Started)
    }
}

/// Geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Parse a `"lat,lng"` pair. Ride locations use this encoding when a map
    /// pin rather than a typed address was captured; free-form addresses
    /// simply fail to parse and carry no pin.
    pub fn parse(text: &str) -> Option<GeoPoint> {
        let (lat, lng) = text.split_once(',')?;
        let lat: f64 = lat.trim().parse().ok()?;
        let lng: f64 = lng.trim().parse().ok()?;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some(GeoPoint { lat, lng })
    }

    /// Inverse of [`GeoPoint::parse`].
    pub fn to_text(&self) -> String {
        format!("{:.6},{:.6}", self.lat, self.lng)
    }
}

/// Driver details attached to an assigned ride.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideDriver {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub car_type: String,
    #[serde(default)]
    pub car_color: String,
    #[serde(default)]
    pub license_plate: String,
}

impl RideDriver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Rider details attached to a ride on the driver and admin dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideRider {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
}

impl RideRider {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// One ride record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    pub id: i64,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub status: RideStatus,
    #[serde(default)]
    pub requested_at: String,
    #[serde(default)]
    pub fare: Option<f64>,
    #[serde(default)]
    pub driver: Option<RideDriver>,
    #[serde(default)]
    pub rider: Option<RideRider>,
}

/// Body for booking a new ride.
#[derive(Debug, Clone, Serialize)]
pub struct BookRideRequest {
    pub pickup_location: String,
    pub dropoff_location: String,
}

/// Driver-editable vehicle details.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CarDetails {
    pub car_type: String,
    pub car_color: String,
    pub license_plate: String,
}

/// Aggregate numbers on the admin dashboard, computed client-side from the
/// user and ride lists the way the backend leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_drivers: usize,
    pub total_rides: usize,
    pub active_rides: usize,
    pub completed_rides: usize,
}

impl DashboardStats {
    pub fn compute(accounts: &[Account], rides: &[Ride]) -> Self {
        Self {
            total_users: accounts
                .iter()
                .filter(|a| a.role() == Some(Role::User))
                .count(),
            total_drivers: accounts
                .iter()
                .filter(|a| a.role() == Some(Role::Driver))
                .count(),
            total_rides: rides.len(),
            active_rides: rides.iter().filter(|r| r.status.is_active()).count(),
            completed_rides: rides
                .iter()
                .filter(|r| r.status == RideStatus::Completed)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride(id: i64, status: RideStatus) -> Ride {
        Ride {
            id,
            pickup_location: "10 Downing St".to_string(),
            dropoff_location: "Heathrow T5".to_string(),
            status,
            requested_at: "2025-06-01T09:30:00Z".to_string(),
            fare: Some(42.5),
            driver: None,
            rider: None,
        }
    }

    fn account(role: &str) -> Account {
        Account {
            id: 1,
            username: role.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            role: role.to_string(),
            phone_number: String::new(),
            name: None,
            is_available: None,
        }
    }

    #[test]
    fn status_actions_follow_the_lifecycle() {
        assert!(RideStatus::Requested.can_accept());
        assert!(!RideStatus::Requested.can_start());
        assert!(RideStatus::Accepted.can_start());
        assert!(!RideStatus::Accepted.can_accept());
        assert!(RideStatus::Started.can_complete());
        assert!(!RideStatus::Completed.can_complete());
        assert!(!RideStatus::Cancelled.can_accept());
    }

    #[test]
    fn active_means_accepted_or_started() {
        assert!(RideStatus::Accepted.is_active());
        assert!(RideStatus::Started.is_active());
        assert!(!RideStatus::Requested.is_active());
        assert!(!RideStatus::Completed.is_active());
    }

    #[test]
    fn unknown_status_deserializes_without_failing() {
        let raw = r#"{
            "id": 3,
            "pickup_location": "A",
            "dropoff_location": "B",
            "status": "teleporting"
        }"#;
        let parsed: Ride = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.status, RideStatus::Unknown);
        assert!(!parsed.status.can_accept());
        assert!(!parsed.status.is_active());
    }

    #[test]
    fn ride_deserializes_with_optional_driver() {
        let raw = r#"{
            "id": 9,
            "pickup_location": "A",
            "dropoff_location": "B",
            "status": "accepted",
            "driver": {
                "first_name": "Sam",
                "last_name": "Ng",
                "phone_number": "+44123",
                "car_type": "sedan",
                "car_color": "black",
                "license_plate": "RH-1"
            }
        }"#;
        let parsed: Ride = serde_json::from_str(raw).unwrap();
        let driver = parsed.driver.unwrap();
        assert_eq!(driver.full_name(), "Sam Ng");
        assert_eq!(parsed.fare, None);
    }

    #[test]
    fn coordinate_locations_parse_back_to_pins() {
        let point = GeoPoint {
            lat: 51.507222,
            lng: -0.1275,
        };
        assert_eq!(GeoPoint::parse(&point.to_text()), Some(point));
        assert_eq!(
            GeoPoint::parse("51.5, -0.12"),
            Some(GeoPoint {
                lat: 51.5,
                lng: -0.12
            })
        );
    }

    #[test]
    fn address_locations_carry_no_pin() {
        assert_eq!(GeoPoint::parse("10 Downing St"), None);
        assert_eq!(GeoPoint::parse("Heathrow, Terminal 5"), None);
        assert_eq!(GeoPoint::parse(""), None);
        // Out-of-range pairs are addresses that merely look numeric
        assert_eq!(GeoPoint::parse("1000,2000"), None);
    }

    #[test]
    fn dashboard_stats_partition_by_role_and_status() {
        let accounts = vec![
            account("user"),
            account("user"),
            account("driver"),
            account("admin"),
            account("dispatcher"),
        ];
        let rides = vec![
            ride(1, RideStatus::Requested),
            ride(2, RideStatus::Accepted),
            ride(3, RideStatus::Started),
            ride(4, RideStatus::Completed),
            ride(5, RideStatus::Completed),
        ];
        let stats = DashboardStats::compute(&accounts, &rides);
        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.total_drivers, 1);
        assert_eq!(stats.total_rides, 5);
        assert_eq!(stats.active_rides, 2);
        assert_eq!(stats.completed_rides, 2);
    }
}
