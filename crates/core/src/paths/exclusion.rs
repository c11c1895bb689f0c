use crate::auth::PathPolicy;

use super::{PathPattern, PatternError};

/// Prefix of the admin area, excluded unless the admin path policy is enabled.
const ADMIN_PREFIX: &str = "/admin";

/// Ordered list of path patterns that bypass the resolver entirely.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    patterns: Vec<PathPattern>,
}

impl ExclusionSet {
    pub fn new(patterns: Vec<PathPattern>) -> Self {
        Self { patterns }
    }

    /// Exclusions shipped for the given admin path policy.
    ///
    /// With the policy disabled the whole admin area is excluded; enabling
    /// the policy removes that exclusion so the redirects can fire.
    pub fn default_for(policy: PathPolicy) -> Self {
        let mut patterns = Vec::with_capacity(5);
        if !policy.is_enabled() {
            patterns.push(PathPattern::prefix(ADMIN_PREFIX));
        }
        // Static bundles and browser probes.
        patterns.extend([
            PathPattern::prefix("/dist/"),
            PathPattern::prefix("/_next/static"),
            PathPattern::prefix("/_next/image"),
            PathPattern::exact("/favicon.ico"),
        ]);
        Self { patterns }
    }

    /// Parse a comma-separated pattern list, keeping order.
    ///
    /// Blank entries are skipped.
    pub fn parse_list(list: &str) -> Result<Self, PatternError> {
        let patterns = list
            .split(',')
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// First pattern matching `path`, if any.
    pub fn matches(&self, path: &str) -> Option<&PathPattern> {
        self.patterns.iter().find(|pattern| pattern.matches(path))
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.matches(path).is_some()
    }

    pub fn patterns(&self) -> &[PathPattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
