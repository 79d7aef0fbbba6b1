//! Session store for the page's lifetime.
//!
//! This module provides the reactive session context that:
//! - Owns the authenticated account and bearer credential
//! - Handles login, logout, registration flows
//! - Persists session state to localStorage and the guard's cookies
//!
//! The store is the sole mutator of session data; the route guard and the
//! gateway client only read it (the gateway triggers `clear` on 401).

use leptos::prelude::*;

use crate::core::guard::LOGIN_PATH;
use crate::core::session::Account;
use crate::ui::api::auth::{self, LoginRequest, RegisterRequest};
use crate::ui::session::storage;

/// Session state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Initial state, restoring from localStorage
    #[default]
    Loading,
    /// No session present
    Anonymous,
    /// Session restored or freshly authenticated
    Authenticated(Account),
}

/// Session context providing session state and actions
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current session state
    pub state: RwSignal<SessionState>,
    /// Current bearer credential (if authenticated)
    credential: RwSignal<Option<String>>,
    /// Loading state for auth operations
    pub loading: RwSignal<bool>,
    /// Error message from last operation
    pub error: RwSignal<Option<String>>,
}

impl SessionContext {
    /// Check if a session is present
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), SessionState::Authenticated(_))
    }

    /// Get the current account (if authenticated)
    pub fn account(&self) -> Option<Account> {
        match self.state.get() {
            SessionState::Authenticated(account) => Some(account),
            _ => None,
        }
    }

    /// Get the bearer credential (if authenticated)
    /// Uses get_untracked() since this is typically called outside reactive contexts
    pub fn credential(&self) -> Option<String> {
        self.credential.get_untracked()
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Re-read the persisted session into memory.
    ///
    /// Anything missing or malformed degrades to an empty session; a partial
    /// persisted state (credential without account or vice versa) is scrubbed
    /// so the token-and-role-together invariant holds again.
    pub fn restore(&self) {
        match (storage::get_credential(), storage::get_account()) {
            (Some(credential), Some(account)) if account.role().is_some() => {
                self.credential.set(Some(credential));
                self.state.set(SessionState::Authenticated(account));
            }
            (None, None) => {
                self.credential.set(None);
                self.state.set(SessionState::Anonymous);
            }
            _ => {
                storage::clear_session();
                self.credential.set(None);
                self.state.set(SessionState::Anonymous);
            }
        }
    }

    /// Install a freshly authenticated session and navigate to its dashboard.
    ///
    /// Refuses an account whose role does not resolve: a credential is never
    /// persisted without a resolvable role.
    pub fn set(&self, account: Account, credential: String) -> Result<(), String> {
        let Some(role) = account.role() else {
            storage::clear_session();
            self.credential.set(None);
            self.state.set(SessionState::Anonymous);
            return Err(format!("Unrecognized account role '{}'", account.role));
        };

        let account = account.with_display_name();
        storage::save_session(&account, &credential);
        self.credential.set(Some(credential));
        self.state.set(SessionState::Authenticated(account));
        navigate_to(role.home_path());
        Ok(())
    }

    /// Destroy the session everywhere and land on the login page. Idempotent.
    pub fn clear(&self) {
        storage::clear_session();
        self.credential.set(None);
        self.state.set(SessionState::Anonymous);
        navigate_to(LOGIN_PATH);
    }
}

/// Provide the session context to the component tree
pub fn provide_session_context() -> SessionContext {
    // Start Anonymous on both server and client to avoid hydration mismatch
    let ctx = SessionContext {
        state: RwSignal::new(SessionState::Anonymous),
        credential: RwSignal::new(None),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    };

    // Restore from localStorage after hydration (client-side only), then
    // refresh the account record from the backend in the background. A stale
    // persisted account must not outlive what the backend says; a refresh
    // whose role no longer resolves tears the session down.
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::task::spawn_local;

        Effect::new(move |_| {
            ctx.state.set(SessionState::Loading);
            ctx.restore();

            if matches!(ctx.state.get_untracked(), SessionState::Authenticated(_)) {
                spawn_local(async move {
                    match auth::me().await {
                        Ok(account) if account.role().is_some() => {
                            let account = account.with_display_name();
                            if let Some(credential) = ctx.credential() {
                                storage::save_session(&account, &credential);
                            }
                            ctx.state.set(SessionState::Authenticated(account));
                        }
                        Ok(_) => ctx.clear(),
                        // Network trouble keeps the persisted session; a 401
                        // has already torn it down in the gateway client.
                        Err(_) => {}
                    }
                });
            }
        });
    }

    provide_context(ctx);
    ctx
}

/// Get the session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Authenticate with the backend and install the resulting session.
pub async fn login(request: &LoginRequest) -> Result<(), String> {
    let ctx = use_session_context();
    ctx.loading.set(true);
    ctx.error.set(None);

    let result = match auth::login(request).await {
        Ok(resp) => ctx.set(resp.user, resp.access),
        Err(e) => Err(e.to_string()),
    };

    ctx.loading.set(false);
    if let Err(ref e) = result {
        ctx.error.set(Some(e.clone()));
    }
    result
}

/// Register a new account; a successful registration logs straight in.
pub async fn register(request: &RegisterRequest) -> Result<(), String> {
    let ctx = use_session_context();
    ctx.loading.set(true);
    ctx.error.set(None);

    let result = match auth::register(request).await {
        Ok(resp) => ctx.set(resp.user, resp.access),
        Err(e) => Err(e.to_string()),
    };

    ctx.loading.set(false);
    if let Err(ref e) = result {
        ctx.error.set(Some(e.clone()));
    }
    result
}

/// Log out the current session.
pub fn logout() {
    use_session_context().clear();
}

/// Full-page navigation so the route guard re-evaluates the new session
/// cookies on the way in.
#[cfg(not(feature = "ssr"))]
fn navigate_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

#[cfg(feature = "ssr")]
fn navigate_to(_path: &str) {}
