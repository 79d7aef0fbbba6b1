//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server-side configuration loaded from environment variables.
///
/// Everything here points at external collaborators. The shell mirrors these
/// values into `<meta>` tags at render time (see `ui::deployment`); unset
/// values leave the client on same-origin `/api` and `/ws` paths, for
/// deployments that route them through a reverse proxy instead.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST backend
    /// Example: http://localhost:8000
    pub backend_url: Option<String>,

    /// Realtime socket endpoint accepting the session credential at connect
    /// Example: ws://localhost:8000/ws
    pub socket_url: Option<String>,

    /// Publishable key for the hosted payment provider's client library
    pub payment_publishable_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            backend_url: std::env::var("BACKEND_URL").ok(),
            socket_url: std::env::var("SOCKET_URL").ok(),
            payment_publishable_key: std::env::var("PAYMENT_PUBLISHABLE_KEY").ok(),
        }
    }

    /// Check if the REST backend is configured
    pub fn has_backend(&self) -> bool {
        self.backend_url.is_some()
    }

    /// Check if the realtime socket endpoint is configured
    pub fn has_socket(&self) -> bool {
        self.socket_url.is_some()
    }

    /// Check if the payment provider is configured
    pub fn has_payment_provider(&self) -> bool {
        self.payment_publishable_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Struct-level tests only; env-var reads are not thread safe under the
    // test harness.

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            backend_url: Some("http://localhost:8000".to_string()),
            socket_url: Some("ws://localhost:8000/ws".to_string()),
            payment_publishable_key: Some("pk_test_123".to_string()),
        };

        assert!(config.has_backend());
        assert!(config.has_socket());
        assert!(config.has_payment_provider());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config {
            backend_url: None,
            socket_url: None,
            payment_publishable_key: None,
        };

        assert!(!config.has_backend());
        assert!(!config.has_socket());
        assert!(!config.has_payment_provider());
    }

    #[test]
    fn test_config_with_partial_fields() {
        let config = Config {
            backend_url: Some("http://localhost:8000".to_string()),
            socket_url: None,
            payment_publishable_key: None,
        };

        assert!(config.has_backend());
        assert!(!config.has_socket());
        assert!(!config.has_payment_provider());
    }
}
