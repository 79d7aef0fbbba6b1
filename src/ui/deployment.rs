//! Deployment endpoints injected into the rendered page.
//!
//! The server reads `BACKEND_URL`, `SOCKET_URL` and `PAYMENT_PUBLISHABLE_KEY`
//! at render time and mirrors them into `<meta>` tags in the shell; the
//! hydrated client reads them back here. An absent or empty value falls back
//! to same-origin `/api` and `/ws` paths, for deployments that route those
//! through a reverse proxy instead.

/// Meta tag carrying the REST backend origin.
pub const BACKEND_URL_META: &str = "backend-url";
/// Meta tag carrying the realtime socket endpoint.
pub const SOCKET_URL_META: &str = "socket-url";
/// Meta tag carrying the payment provider's publishable key.
pub const PAYMENT_KEY_META: &str = "payment-publishable-key";

/// Join a configured base URL with a request path.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(not(feature = "ssr"))]
fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??;
    let value = element.get_attribute("content")?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Configured REST backend origin, if the deployment set one.
#[cfg(not(feature = "ssr"))]
pub fn backend_url() -> Option<String> {
    meta_content(BACKEND_URL_META)
}

/// Configured realtime socket endpoint, if the deployment set one.
#[cfg(not(feature = "ssr"))]
pub fn socket_url() -> Option<String> {
    meta_content(SOCKET_URL_META)
}

#[cfg(feature = "ssr")]
pub fn backend_url() -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn socket_url() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_the_trailing_slash() {
        assert_eq!(
            join_url("http://localhost:8000", "/api/rides/"),
            "http://localhost:8000/api/rides/"
        );
        assert_eq!(
            join_url("http://localhost:8000/", "/api/rides/"),
            "http://localhost:8000/api/rides/"
        );
    }
}
