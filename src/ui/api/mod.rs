//! API gateway client.
//!
//! Typed request functions grouped by role. Every request carries the
//! persisted bearer credential; an authentication-rejected response clears
//! the session and lands on the login page, so no view ever renders a 401.
//! Payload shapes are the backend's, passed through unmodified.

pub mod admin;
pub mod auth;
pub mod driver;
pub mod payment;
pub mod user;

use thiserror::Error;

/// Gateway error taxonomy. Network and backend failures surface as toasts in
/// the views; `Unauthorized` never reaches a view because the session is
/// already being torn down when it is returned.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("authentication rejected")]
    Unauthorized,

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("not available during server rendering")]
    Unavailable,
}

#[cfg(not(feature = "ssr"))]
pub(crate) mod client {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Serialize};

    use super::ApiError;
    use crate::core::guard::LOGIN_PATH;
    use crate::ui::deployment;
    use crate::ui::session::storage;

    /// Resolve a request path against the configured backend origin, falling
    /// back to same-origin when the deployment injected none.
    fn api_url(path: &str) -> String {
        match deployment::backend_url() {
            Some(base) => deployment::join_url(&base, path),
            None => path.to_string(),
        }
    }

    /// Error body shape used by the backend, with both spellings it emits.
    #[derive(Debug, Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        error: Option<String>,
        #[serde(default)]
        detail: Option<String>,
    }

    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match storage::get_credential() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Force-clear the session after an authentication-rejected response.
    ///
    /// Safe to hit from several concurrent rejections: clearing an already
    /// empty session and navigating to a page already being navigated to are
    /// both no-ops.
    fn force_logout() {
        storage::clear_session();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }

    async fn handle<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.status() == 401 {
            force_logout();
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            let status = response.status();
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body
                    .error
                    .or(body.detail)
                    .unwrap_or_else(|| format!("request failed with status {status}")),
                Err(_) => format!("request failed with status {status}"),
            };
            return Err(ApiError::Backend { status, message });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let response = authorize(Request::get(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = authorize(Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle(response).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let response = authorize(Request::post(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle(response).await
    }

    pub(crate) async fn patch_json<T: DeserializeOwned, B: Serialize>(
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = authorize(Request::patch(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle(response).await
    }
}
