//! Pre-render navigation guard.
//!
//! Every navigation is classified against a static rule table before any view
//! code runs: public paths, protected path prefixes with an allowed role set,
//! and everything else. The decision is a pure function of the requested path
//! and the two cookie-sourced session signals (credential presence, role
//! string), so it is mounted server-side as an axum middleware and tested as
//! plain Rust.
//!
//! The guard has no failure mode other than "proceed": a missing or malformed
//! role degrades to the least-privileged outcome (redirect to login), never to
//! granting access.

use crate::core::session::Role;

/// Public path every unauthenticated redirect lands on.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of evaluating one navigation. No other side effects exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(String),
}

/// Static route classification table.
#[derive(Debug, Clone)]
pub struct RouteRules {
    /// Exact-match paths reachable without a session.
    public: Vec<&'static str>,
    /// Path prefixes mapped to the roles allowed past them, in evaluation
    /// order.
    protected: Vec<(&'static str, &'static [Role])>,
}

impl Default for RouteRules {
    fn default() -> Self {
        Self {
            public: vec!["/login", "/register"],
            protected: vec![
                ("/admin", &[Role::Admin]),
                ("/driver", &[Role::Driver]),
                ("/user", &[Role::User]),
            ],
        }
    }
}

impl RouteRules {
    /// Decide whether a navigation proceeds or gets redirected.
    ///
    /// `credential` and `role` come from request-scoped cookies, not from the
    /// in-memory session store; the guard runs before any view code executes.
    pub fn evaluate(
        &self,
        path: &str,
        credential: Option<&str>,
        role: Option<&str>,
    ) -> GuardDecision {
        // An empty cookie value is the same as no cookie.
        let credential = credential.filter(|c| !c.is_empty());
        let resolved = role.and_then(Role::parse);

        if self.public.contains(&path) {
            if credential.is_some() {
                if let Some(role) = resolved {
                    return GuardDecision::Redirect(role.home_path().to_string());
                }
                // Logged in but the role does not resolve: let the public
                // page through rather than trap the session in a redirect
                // loop. Protected paths below still reject such a session.
            }
            return GuardDecision::Proceed;
        }

        // Prefixes are checked independently and in order; the first
        // violation wins, but a permitting match must not short-circuit
        // since a later prefix rule could still reject.
        for (prefix, allowed) in &self.protected {
            if !path.starts_with(prefix) {
                continue;
            }
            if credential.is_none() {
                return GuardDecision::Redirect(LOGIN_PATH.to_string());
            }
            match resolved {
                Some(role) if allowed.contains(&role) => {}
                Some(role) => {
                    return GuardDecision::Redirect(role.home_path().to_string());
                }
                None => return GuardDecision::Redirect(LOGIN_PATH.to_string()),
            }
        }

        GuardDecision::Proceed
    }
}

/// Axum middleware wiring for the guard.
#[cfg(feature = "ssr")]
pub mod middleware {
    use axum::extract::Request;
    use axum::middleware::Next;
    use axum::response::{IntoResponse, Redirect, Response};
    use axum_extra::extract::cookie::CookieJar;

    use super::{GuardDecision, RouteRules};
    use crate::core::session::{ROLE_COOKIE, TOKEN_COOKIE};

    /// Run the guard for one incoming navigation.
    ///
    /// Asset and API requests are not navigations and pass through untouched.
    pub async fn guard_navigation(jar: CookieJar, request: Request, next: Next) -> Response {
        let path = request.uri().path().to_string();
        if path.starts_with("/pkg") || path.starts_with("/api") || path == "/favicon.ico" {
            return next.run(request).await;
        }

        let credential = jar.get(TOKEN_COOKIE).map(|c| c.value().to_string());
        let role = jar.get(ROLE_COOKIE).map(|c| c.value().to_string());

        let rules = RouteRules::default();
        match rules.evaluate(&path, credential.as_deref(), role.as_deref()) {
            GuardDecision::Proceed => next.run(request).await,
            GuardDecision::Redirect(target) => {
                tracing::debug!(%path, %target, "navigation redirected by guard");
                Redirect::temporary(&target).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirect(to: &str) -> GuardDecision {
        GuardDecision::Redirect(to.to_string())
    }

    fn rules() -> RouteRules {
        RouteRules::default()
    }

    #[test]
    fn anonymous_proceeds_on_public_paths() {
        assert_eq!(rules().evaluate("/login", None, None), GuardDecision::Proceed);
        assert_eq!(
            rules().evaluate("/register", None, None),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn anonymous_is_sent_to_login_from_any_protected_prefix() {
        for path in ["/admin", "/driver", "/user", "/user/book", "/user/rides"] {
            assert_eq!(rules().evaluate(path, None, None), redirect("/login"));
        }
    }

    #[test]
    fn credential_without_role_is_sent_to_login_on_protected_paths() {
        assert_eq!(
            rules().evaluate("/driver", Some("abc"), None),
            redirect("/login")
        );
    }

    #[test]
    fn credential_without_role_proceeds_on_public_paths() {
        // Cannot redirect without knowing the target dashboard.
        assert_eq!(
            rules().evaluate("/login", Some("abc"), None),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn logged_in_session_is_bounced_off_public_paths_to_its_home() {
        assert_eq!(
            rules().evaluate("/login", Some("abc"), Some("admin")),
            redirect("/admin")
        );
        assert_eq!(
            rules().evaluate("/register", Some("abc"), Some("driver")),
            redirect("/driver")
        );
        assert_eq!(
            rules().evaluate("/login", Some("abc"), Some("user")),
            redirect("/user/book")
        );
    }

    #[test]
    fn recognized_role_proceeds_on_its_own_prefix() {
        assert_eq!(
            rules().evaluate("/admin", Some("abc"), Some("admin")),
            GuardDecision::Proceed
        );
        assert_eq!(
            rules().evaluate("/driver", Some("abc"), Some("driver")),
            GuardDecision::Proceed
        );
        assert_eq!(
            rules().evaluate("/user/book", Some("abc"), Some("user")),
            GuardDecision::Proceed
        );
        assert_eq!(
            rules().evaluate("/user/rides", Some("abc"), Some("user")),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn foreign_prefix_redirects_to_own_home_never_proceeds() {
        assert_eq!(
            rules().evaluate("/admin", Some("abc"), Some("user")),
            redirect("/user/book")
        );
        assert_eq!(
            rules().evaluate("/driver", Some("abc"), Some("admin")),
            redirect("/admin")
        );
        assert_eq!(
            rules().evaluate("/user/book", Some("abc"), Some("driver")),
            redirect("/driver")
        );
    }

    #[test]
    fn unrecognized_role_is_treated_as_unauthenticated_on_protected_paths() {
        assert_eq!(
            rules().evaluate("/admin", Some("abc"), Some("dispatcher")),
            redirect("/login")
        );
    }

    #[test]
    fn unrecognized_role_proceeds_on_public_paths() {
        // Intentional: such a session must not be trapped on the public page
        // forever, and it gains no access elsewhere.
        assert_eq!(
            rules().evaluate("/login", Some("abc"), Some("dispatcher")),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn empty_credential_cookie_counts_as_absent() {
        assert_eq!(rules().evaluate("/driver", Some(""), None), redirect("/login"));
        assert_eq!(
            rules().evaluate("/login", Some(""), Some("admin")),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn unclassified_paths_proceed_unconditionally() {
        assert_eq!(rules().evaluate("/", None, None), GuardDecision::Proceed);
        assert_eq!(
            rules().evaluate("/about", Some("abc"), Some("admin")),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn prefix_match_is_not_exact_match() {
        // "/userland" starts with "/user" and is therefore guarded; prefix
        // classification is deliberately literal.
        assert_eq!(rules().evaluate("/userland", None, None), redirect("/login"));
    }

    #[test]
    fn later_prefix_can_still_reject_after_a_permitting_match() {
        let custom = RouteRules {
            public: vec!["/login"],
            protected: vec![
                ("/ops", &[Role::Admin, Role::Driver]),
                ("/ops/fleet", &[Role::Admin]),
            ],
        };
        // Driver passes the first rule but the narrower second rule rejects.
        assert_eq!(
            custom.evaluate("/ops/fleet", Some("abc"), Some("driver")),
            redirect("/driver")
        );
        assert_eq!(
            custom.evaluate("/ops/fleet", Some("abc"), Some("admin")),
            GuardDecision::Proceed
        );
        assert_eq!(
            custom.evaluate("/ops", Some("abc"), Some("driver")),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn first_violation_in_configuration_order_wins() {
        let custom = RouteRules {
            public: vec![],
            protected: vec![("/a", &[Role::Admin]), ("/a/b", &[Role::Driver])],
        };
        // The user role violates both rules; the redirect comes from the
        // first one evaluated.
        assert_eq!(
            custom.evaluate("/a/b", Some("abc"), Some("user")),
            redirect("/user/book")
        );
    }
}
