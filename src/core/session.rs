//! Session domain model.
//!
//! The session is the only entity in this layer with real invariants: the
//! bearer credential and the role are set together or not at all. The role
//! mapping lives here so the route guard and the session store share a single
//! source of truth for "where does this role live".

use serde::{Deserialize, Serialize};

/// Storage key for the bearer credential in localStorage.
pub const STORAGE_KEY_TOKEN: &str = "ridehail_token";
/// Storage key for the persisted account record in localStorage.
pub const STORAGE_KEY_ACCOUNT: &str = "ridehail_account";

/// Cookie carrying the bearer credential for the pre-render guard.
pub const TOKEN_COOKIE: &str = "token";
/// Cookie carrying the session role for the pre-render guard.
pub const ROLE_COOKIE: &str = "userRole";

/// Closed-set role classification for an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Driver,
    Admin,
}

impl Role {
    /// Parse a role string. Anything outside the closed set is unresolved.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "user" => Some(Role::User),
            "driver" => Some(Role::Driver),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Driver => "driver",
            Role::Admin => "admin",
        }
    }

    /// Dashboard path a session with this role lands on.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::User => "/user/book",
            Role::Driver => "/driver",
            Role::Admin => "/admin",
        }
    }
}

/// Account record as returned by the backend.
///
/// The role is kept as the raw backend string; callers resolve it through
/// [`Role::parse`] so an unrecognized value degrades instead of failing
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub phone_number: String,
    /// Display name; derived from first/last name when the backend omits it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Driver availability flag; only present on driver accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

impl Account {
    /// Resolved role, or `None` for anything outside the closed set.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Display name: explicit `name`, else "first last", else the username.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            if !name.trim().is_empty() {
                return name.clone();
            }
        }
        let derived = format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string();
        if derived.is_empty() {
            self.username.clone()
        } else {
            derived
        }
    }

    /// Fill in the derived display name so later reads are cheap.
    pub fn with_display_name(mut self) -> Self {
        if self.name.as_deref().map(str::trim).unwrap_or("").is_empty() {
            self.name = Some(self.display_name());
        }
        self
    }
}

/// Parse a persisted account blob. Malformed data is treated as absent, never
/// as an error: a corrupt localStorage entry must not take the app down.
pub fn parse_persisted_account(raw: &str) -> Option<Account> {
    serde_json::from_str::<Account>(raw)
        .ok()
        .map(Account::with_display_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(role: &str) -> Account {
        Account {
            id: 7,
            username: "jdoe".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            role: role.to_string(),
            phone_number: "+4470000000".to_string(),
            name: None,
            is_available: None,
        }
    }

    #[test]
    fn role_parse_is_closed_set() {
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("driver"), Some(Role::Driver));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("superadmin"), None);
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_home_paths() {
        assert_eq!(Role::User.home_path(), "/user/book");
        assert_eq!(Role::Driver.home_path(), "/driver");
        assert_eq!(Role::Admin.home_path(), "/admin");
    }

    #[test]
    fn display_name_derived_from_first_and_last() {
        assert_eq!(account("user").display_name(), "Jane Doe");
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let mut acct = account("user");
        acct.first_name.clear();
        acct.last_name.clear();
        assert_eq!(acct.display_name(), "jdoe");
    }

    #[test]
    fn display_name_prefers_explicit_name() {
        let mut acct = account("user");
        acct.name = Some("JD".to_string());
        assert_eq!(acct.display_name(), "JD");
    }

    #[test]
    fn with_display_name_fills_missing_name() {
        let acct = account("driver").with_display_name();
        assert_eq!(acct.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn persisted_account_round_trips() {
        let raw = serde_json::to_string(&account("driver")).unwrap();
        let restored = parse_persisted_account(&raw).unwrap();
        assert_eq!(restored.username, "jdoe");
        assert_eq!(restored.role(), Some(Role::Driver));
        assert_eq!(restored.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn malformed_persisted_account_is_absent() {
        assert!(parse_persisted_account("not json at all").is_none());
        assert!(parse_persisted_account("{\"id\": \"oops\"}").is_none());
        assert!(parse_persisted_account("").is_none());
    }

    #[test]
    fn availability_flag_is_optional_and_survives_round_trip() {
        let raw = r#"{"id": 3, "username": "drv", "role": "driver", "is_available": true}"#;
        let acct: Account = serde_json::from_str(raw).unwrap();
        assert_eq!(acct.is_available, Some(true));

        let raw = r#"{"id": 4, "username": "rider", "role": "user"}"#;
        let acct: Account = serde_json::from_str(raw).unwrap();
        assert_eq!(acct.is_available, None);
    }

    #[test]
    fn unrecognized_role_survives_parsing_but_does_not_resolve() {
        let raw = serde_json::to_string(&account("dispatcher")).unwrap();
        let restored = parse_persisted_account(&raw).unwrap();
        assert_eq!(restored.role(), None);
    }
}
