//! Persisted session storage helpers.
//!
//! The credential and account record live in localStorage so a page reload
//! does not lose the session. The credential and role are additionally
//! mirrored into cookies, since the pre-render route guard runs server-side
//! before any of this code executes.

use crate::core::session::{
    Account, ROLE_COOKIE, STORAGE_KEY_ACCOUNT, STORAGE_KEY_TOKEN, TOKEN_COOKIE,
};

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Get the persisted bearer credential.
///
/// Returns None if localStorage is not available or the credential is absent.
#[cfg(not(feature = "ssr"))]
pub fn get_credential() -> Option<String> {
    let value = local_storage()?.get_item(STORAGE_KEY_TOKEN).ok()??;
    if value.is_empty() { None } else { Some(value) }
}

/// Get the persisted account record.
///
/// Malformed persisted data is treated as absent, never as an error.
#[cfg(not(feature = "ssr"))]
pub fn get_account() -> Option<Account> {
    let raw = local_storage()?.get_item(STORAGE_KEY_ACCOUNT).ok()??;
    crate::core::session::parse_persisted_account(&raw)
}

#[cfg(not(feature = "ssr"))]
fn write_cookie(value: &str) {
    use wasm_bindgen::JsCast;
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(html) = document.dyn_into::<web_sys::HtmlDocument>() {
            let _ = html.set_cookie(value);
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn set_cookie(name: &str, value: &str) {
    write_cookie(&format!("{}={}; path=/; SameSite=Lax", name, value));
}

#[cfg(not(feature = "ssr"))]
fn expire_cookie(name: &str) {
    write_cookie(&format!("{}=; path=/; Max-Age=0", name));
}

/// Persist the session: localStorage plus the guard's cookie mirror.
#[cfg(not(feature = "ssr"))]
pub fn save_session(account: &Account, credential: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(STORAGE_KEY_TOKEN, credential);
        let _ = storage.set_item(
            STORAGE_KEY_ACCOUNT,
            &serde_json::to_string(account).unwrap_or_default(),
        );
    }
    set_cookie(TOKEN_COOKIE, credential);
    set_cookie(ROLE_COOKIE, &account.role);
}

/// Remove every persisted trace of the session. Idempotent.
#[cfg(not(feature = "ssr"))]
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(STORAGE_KEY_TOKEN);
        let _ = storage.remove_item(STORAGE_KEY_ACCOUNT);
    }
    expire_cookie(TOKEN_COOKIE);
    expire_cookie(ROLE_COOKIE);
}

/// SSR stubs - these functions do nothing on the server
#[cfg(feature = "ssr")]
pub fn get_credential() -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn get_account() -> Option<Account> {
    None
}

#[cfg(feature = "ssr")]
pub fn save_session(_account: &Account, _credential: &str) {}

#[cfg(feature = "ssr")]
pub fn clear_session() {}
