//! Payment endpoints.
//!
//! The backend owns settlement; this client only creates an intent, hands
//! the provider's client secret to the hosted payment library, and forwards
//! the final status back.

use serde::{Deserialize, Serialize};

use super::ApiError;

#[derive(Serialize)]
struct CreateIntentBody {
    /// Amount in the currency's minor unit.
    amount: u64,
}

#[derive(Serialize)]
struct ConfirmBody<'a> {
    payment_intent_id: &'a str,
}

/// The provider client secret minted by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfirmation {
    #[serde(default)]
    pub status: Option<String>,
}

/// One settled or pending payment in the rider's history.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub amount: u64,
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

pub async fn create_intent(amount: u64) -> Result<PaymentIntent, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::post_json("/api/payments/create-intent/", &CreateIntentBody { amount }).await
    }
    #[cfg(feature = "ssr")]
    {
        let _ = amount;
        Err(ApiError::Unavailable)
    }
}

/// Forward the provider's final status to the backend.
pub async fn confirm(payment_intent_id: &str) -> Result<PaymentConfirmation, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::post_json(
            "/api/payments/confirm/",
            &ConfirmBody { payment_intent_id },
        )
        .await
    }
    #[cfg(feature = "ssr")]
    {
        let _ = payment_intent_id;
        Err(ApiError::Unavailable)
    }
}

pub async fn history() -> Result<Vec<PaymentRecord>, ApiError> {
    #[cfg(not(feature = "ssr"))]
    {
        super::client::get_json("/api/payments/history/").await
    }
    #[cfg(feature = "ssr")]
    {
        Err(ApiError::Unavailable)
    }
}
