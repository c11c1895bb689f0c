//! Admin path policy.
//!
//! Decides, from the request path and whether a session exists, if the
//! resolver continues or redirects. The function is pure; the middleware
//! owns the I/O.

use std::str::FromStr;

/// Whether admin paths are gated on a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathPolicy {
    Enabled,
    #[default]
    Disabled,
}

impl PathPolicy {
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl FromStr for PathPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enabled" | "on" | "true" | "1" => Ok(Self::Enabled),
            "disabled" | "off" | "false" | "0" => Ok(Self::Disabled),
            other => Err(format!("unknown path policy '{other}'")),
        }
    }
}

impl std::fmt::Display for PathPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enabled => write!(f, "enabled"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

/// What to do when the session store cannot be consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Continue as anonymous.
    #[default]
    Open,
    /// Refuse the request.
    Closed,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            other => Err(format!("unknown failure policy '{other}'")),
        }
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// Paths that make up the admin area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRoutes {
    pub protected_prefix: String,
    pub login_path: String,
    pub dashboard_path: String,
}

impl Default for AdminRoutes {
    fn default() -> Self {
        Self {
            protected_prefix: "/admin".to_string(),
            login_path: "/admin/login".to_string(),
            dashboard_path: "/admin/dashboard".to_string(),
        }
    }
}

impl AdminRoutes {
    pub fn is_protected(&self, path: &str) -> bool {
        path.starts_with(&self.protected_prefix)
    }

    pub fn is_login(&self, path: &str) -> bool {
        path == self.login_path
    }
}

/// Outcome of the admin path policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Continue,
    RedirectToLogin,
    RedirectToDashboard,
}

impl Decision {
    /// Redirect target, if this decision redirects.
    pub fn redirect_target(self, routes: &AdminRoutes) -> Option<&str> {
        match self {
            Self::Continue => None,
            Self::RedirectToLogin => Some(&routes.login_path),
            Self::RedirectToDashboard => Some(&routes.dashboard_path),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continue => write!(f, "continue"),
            Self::RedirectToLogin => write!(f, "redirect_login"),
            Self::RedirectToDashboard => write!(f, "redirect_dashboard"),
        }
    }
}

/// Apply the admin path policy.
///
/// The login path is carved out of the protected area so that an anonymous
/// visitor can reach it and an authenticated one is sent on to the
/// dashboard instead of looping.
///
/// # Examples
///
/// ```
/// use atelier_core::auth::{decide, AdminRoutes, Decision, PathPolicy};
///
/// let routes = AdminRoutes::default();
/// assert_eq!(
///     decide(PathPolicy::Enabled, &routes, "/admin/dashboard", false),
///     Decision::RedirectToLogin
/// );
/// assert_eq!(
///     decide(PathPolicy::Disabled, &routes, "/admin/dashboard", false),
///     Decision::Continue
/// );
/// ```
pub fn decide(
    policy: PathPolicy,
    routes: &AdminRoutes,
    path: &str,
    has_session: bool,
) -> Decision {
    if !policy.is_enabled() || !routes.is_protected(path) {
        return Decision::Continue;
    }

    match (routes.is_login(path), has_session) {
        (true, true) => Decision::RedirectToDashboard,
        (true, false) => Decision::Continue,
        (false, true) => Decision::Continue,
        (false, false) => Decision::RedirectToLogin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled(path: &str, has_session: bool) -> Decision {
        decide(PathPolicy::Enabled, &AdminRoutes::default(), path, has_session)
    }

    #[test]
    fn non_admin_paths_always_continue() {
        assert_eq!(enabled("/blog", false), Decision::Continue);
        assert_eq!(enabled("/portfolio/case-study", true), Decision::Continue);
        assert_eq!(enabled("/", false), Decision::Continue);
    }

    #[test]
    fn anonymous_login_continues() {
        assert_eq!(enabled("/admin/login", false), Decision::Continue);
    }

    #[test]
    fn authenticated_login_redirects_to_dashboard() {
        assert_eq!(enabled("/admin/login", true), Decision::RedirectToDashboard);
    }

    #[test]
    fn anonymous_protected_redirects_to_login() {
        assert_eq!(enabled("/admin/dashboard", false), Decision::RedirectToLogin);
        assert_eq!(enabled("/admin/posts/new", false), Decision::RedirectToLogin);
        assert_eq!(enabled("/admin", false), Decision::RedirectToLogin);
    }

    #[test]
    fn authenticated_protected_continues() {
        assert_eq!(enabled("/admin/dashboard", true), Decision::Continue);
    }

    #[test]
    fn disabled_policy_never_redirects() {
        let routes = AdminRoutes::default();
        for (path, session) in [
            ("/admin/dashboard", false),
            ("/admin/login", true),
            ("/admin", false),
        ] {
            assert_eq!(
                decide(PathPolicy::Disabled, &routes, path, session),
                Decision::Continue
            );
        }
    }

    #[test]
    fn redirect_targets_follow_routes() {
        let routes = AdminRoutes::default();
        assert_eq!(Decision::Continue.redirect_target(&routes), None);
        assert_eq!(
            Decision::RedirectToLogin.redirect_target(&routes),
            Some("/admin/login")
        );
        assert_eq!(
            Decision::RedirectToDashboard.redirect_target(&routes),
            Some("/admin/dashboard")
        );
    }

    #[test]
    fn policies_parse_from_strings() {
        assert_eq!("enabled".parse::<PathPolicy>(), Ok(PathPolicy::Enabled));
        assert_eq!(" OFF ".parse::<PathPolicy>(), Ok(PathPolicy::Disabled));
        assert!("sometimes".parse::<PathPolicy>().is_err());

        assert_eq!("closed".parse::<FailurePolicy>(), Ok(FailurePolicy::Closed));
        assert_eq!("Open".parse::<FailurePolicy>(), Ok(FailurePolicy::Open));
        assert!("ajar".parse::<FailurePolicy>().is_err());
    }

    #[test]
    fn defaults_are_disabled_and_fail_open() {
        assert_eq!(PathPolicy::default(), PathPolicy::Disabled);
        assert_eq!(FailurePolicy::default(), FailurePolicy::Open);
    }
}
