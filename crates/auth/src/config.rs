use std::time::Duration;

use atelier_core::auth::{AdminRoutes, FailurePolicy, PathPolicy};
use atelier_core::paths::ExclusionSet;
use url::Url;

use crate::error::AuthError;

const DEFAULT_STORE_URL: &str = "http://localhost:54321";
const DEFAULT_COOKIE_NAME: &str = "sb-access-token";
const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 2_000;

/// Connection settings for the remote session store.
#[derive(Debug, Clone)]
pub struct SessionStoreConfig {
    pub base_url: Url,
    pub api_key: String,
}

/// Complete auth configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub store: SessionStoreConfig,
    pub cookie_name: String,
    pub lookup_timeout: Duration,
    pub path_policy: PathPolicy,
    pub failure_policy: FailurePolicy,
    pub exclusions: ExclusionSet,
    pub admin_routes: AdminRoutes,
    /// Set once exclusions are chosen explicitly; they then stop following
    /// the path policy.
    custom_exclusions: bool,
}

impl AuthConfig {
    /// Configuration with shipped defaults against the given store.
    pub fn new(store: SessionStoreConfig) -> Self {
        let path_policy = PathPolicy::default();
        Self {
            store,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            lookup_timeout: Duration::from_millis(DEFAULT_LOOKUP_TIMEOUT_MS),
            path_policy,
            failure_policy: FailurePolicy::default(),
            exclusions: ExclusionSet::default_for(path_policy),
            admin_routes: AdminRoutes::default(),
            custom_exclusions: false,
        }
    }

    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SESSION_STORE_URL`: Base URL of the auth service (default: `http://localhost:54321`)
    /// - `SESSION_STORE_API_KEY`: Value sent in the `apikey` header (default: empty)
    /// - `SESSION_COOKIE_NAME`: Cookie carrying the access token (default: `sb-access-token`)
    /// - `SESSION_LOOKUP_TIMEOUT_MS`: Bound on each session lookup (default: 2000)
    /// - `AUTH_PATH_POLICY`: `enabled` or `disabled` admin redirects (default: disabled)
    /// - `AUTH_FAILURE_POLICY`: `open` or `closed` on lookup errors (default: open)
    /// - `AUTH_EXCLUDE_PATHS`: Comma-separated patterns bypassing the resolver
    ///   (default depends on `AUTH_PATH_POLICY`)
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Config` if any variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, AuthError> {
        let base_url: Url = var("SESSION_STORE_URL")
            .unwrap_or_else(|| DEFAULT_STORE_URL.to_string())
            .parse()
            .map_err(|e| AuthError::Config(format!("SESSION_STORE_URL: {e}")))?;

        let store = SessionStoreConfig {
            base_url,
            api_key: var("SESSION_STORE_API_KEY").unwrap_or_default(),
        };

        let lookup_timeout = match var("SESSION_LOOKUP_TIMEOUT_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| AuthError::Config(format!("SESSION_LOOKUP_TIMEOUT_MS: {e}")))?,
            None => Duration::from_millis(DEFAULT_LOOKUP_TIMEOUT_MS),
        };

        let path_policy = match var("AUTH_PATH_POLICY") {
            Some(raw) => raw.parse::<PathPolicy>().map_err(AuthError::Config)?,
            None => PathPolicy::default(),
        };

        let failure_policy = match var("AUTH_FAILURE_POLICY") {
            Some(raw) => raw.parse::<FailurePolicy>().map_err(AuthError::Config)?,
            None => FailurePolicy::default(),
        };

        let custom = var("AUTH_EXCLUDE_PATHS");
        let custom_exclusions = custom.is_some();
        let exclusions = match custom {
            Some(list) => ExclusionSet::parse_list(&list)?,
            None => ExclusionSet::default_for(path_policy),
        };

        Ok(Self {
            store,
            cookie_name: var("SESSION_COOKIE_NAME")
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string()),
            lookup_timeout,
            path_policy,
            failure_policy,
            exclusions,
            admin_routes: AdminRoutes::default(),
            custom_exclusions,
        })
    }

    /// Switch the admin path policy.
    ///
    /// Default exclusions are replaced by the defaults for `policy`;
    /// exclusions set through `with_exclusions` or `AUTH_EXCLUDE_PATHS` are
    /// kept as they are, whatever the call order.
    pub fn with_path_policy(mut self, policy: PathPolicy) -> Self {
        self.path_policy = policy;
        if !self.custom_exclusions {
            self.exclusions = ExclusionSet::default_for(policy);
        }
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self.custom_exclusions = true;
        self
    }

    /// Admin paths the policy is meant to gate but the exclusions hide.
    ///
    /// Non-empty only when the path policy is enabled and some exclusion
    /// pattern swallows the login or dashboard path, leaving the redirects
    /// unreachable.
    pub fn unreachable_policy_paths(&self) -> Vec<&str> {
        if !self.path_policy.is_enabled() {
            return Vec::new();
        }

        [
            self.admin_routes.login_path.as_str(),
            self.admin_routes.dashboard_path.as_str(),
        ]
        .into_iter()
        .filter(|path| self.exclusions.is_excluded(path))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> Result<AuthConfig, AuthError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AuthConfig::from_vars(|key| map.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = from_map(&[]).unwrap();

        assert_eq!(config.store.base_url.as_str(), "http://localhost:54321/");
        assert_eq!(config.store.api_key, "");
        assert_eq!(config.cookie_name, "sb-access-token");
        assert_eq!(config.lookup_timeout, Duration::from_secs(2));
        assert_eq!(config.path_policy, PathPolicy::Disabled);
        assert_eq!(config.failure_policy, FailurePolicy::Open);
        assert!(config.exclusions.is_excluded("/admin/dashboard"));
        assert!(!config.exclusions.is_excluded("/blog"));
    }

    #[test]
    fn test_enabling_path_policy_unhides_admin() {
        let config = from_map(&[("AUTH_PATH_POLICY", "enabled")]).unwrap();

        assert_eq!(config.path_policy, PathPolicy::Enabled);
        assert!(!config.exclusions.is_excluded("/admin/dashboard"));
        assert!(config.unreachable_policy_paths().is_empty());
    }

    #[test]
    fn test_explicit_exclusions_override_defaults() {
        let config = from_map(&[
            ("AUTH_PATH_POLICY", "enabled"),
            ("AUTH_EXCLUDE_PATHS", "/admin*,/favicon.ico"),
        ])
        .unwrap();

        assert_eq!(
            config.unreachable_policy_paths(),
            vec!["/admin/login", "/admin/dashboard"]
        );
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = from_map(&[
            ("SESSION_STORE_URL", "https://auth.example.com"),
            ("SESSION_STORE_API_KEY", "anon-key"),
            ("SESSION_COOKIE_NAME", "session"),
            ("SESSION_LOOKUP_TIMEOUT_MS", "150"),
            ("AUTH_FAILURE_POLICY", "closed"),
        ])
        .unwrap();

        assert_eq!(config.store.base_url.host_str(), Some("auth.example.com"));
        assert_eq!(config.store.api_key, "anon-key");
        assert_eq!(config.cookie_name, "session");
        assert_eq!(config.lookup_timeout, Duration::from_millis(150));
        assert_eq!(config.failure_policy, FailurePolicy::Closed);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        for pairs in [
            [("SESSION_STORE_URL", "not a url")],
            [("SESSION_LOOKUP_TIMEOUT_MS", "soon")],
            [("AUTH_PATH_POLICY", "maybe")],
            [("AUTH_FAILURE_POLICY", "ajar")],
            [("AUTH_EXCLUDE_PATHS", "admin")],
        ] {
            assert!(
                matches!(from_map(&pairs), Err(AuthError::Config(_))),
                "{pairs:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_explicit_exclusions_survive_path_policy_change() {
        let exclusions = ExclusionSet::parse_list("/favicon.ico").unwrap();
        let config = AuthConfig::new(SessionStoreConfig {
            base_url: "http://localhost:54321".parse().unwrap(),
            api_key: String::new(),
        })
        .with_exclusions(exclusions)
        .with_path_policy(PathPolicy::Disabled);

        assert_eq!(config.exclusions.patterns().len(), 1);
        assert!(!config.exclusions.is_excluded("/admin/dashboard"));
    }

    #[test]
    fn test_env_exclusions_survive_path_policy_change() {
        let config = from_map(&[("AUTH_EXCLUDE_PATHS", "/admin*")])
            .unwrap()
            .with_path_policy(PathPolicy::Enabled);

        assert!(config.exclusions.is_excluded("/admin/login"));
        assert!(!config.exclusions.is_excluded("/favicon.ico"));
    }

    #[test]
    fn test_default_exclusions_follow_path_policy() {
        let config = from_map(&[]).unwrap().with_path_policy(PathPolicy::Enabled);
        assert!(!config.exclusions.is_excluded("/admin/login"));

        let config = config.with_path_policy(PathPolicy::Disabled);
        assert!(config.exclusions.is_excluded("/admin/login"));
    }

    #[test]
    fn test_disabled_policy_reports_nothing_unreachable() {
        let config = from_map(&[]).unwrap();
        assert!(config.unreachable_policy_paths().is_empty());
    }
}
