//! Paths the locale middleware must never touch.

use regex::Regex;
use std::sync::OnceLock;

/// Prefixes bypassed when no override is configured.
pub const DEFAULT_BYPASS_PREFIXES: &[&str] = &["/api", "/_next", "/_vercel", "/favicon.ico"];

static PUBLIC_FILE_REGEX: OnceLock<Regex> = OnceLock::new();

fn public_file_regex() -> &'static Regex {
    // Last path segment carries an extension
    PUBLIC_FILE_REGEX.get_or_init(|| Regex::new(r"\.[^/]+$").expect("valid regex"))
}

/// Decides which request paths skip locale routing.
///
/// Prefix matching is plain `starts_with`, so `/api` also covers `/apidocs`.
/// Any path whose final segment contains a dot is treated as a static file,
/// which also catches dotted page routes such as `/sessions/v1.2`.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    prefixes: Vec<String>,
}

impl ExclusionRules {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// True if `path` is an API, framework-internal or static-file route.
    pub fn is_bypassed(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
            || is_public_file(path)
    }
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self::new(DEFAULT_BYPASS_PREFIXES.iter().copied())
    }
}

/// True if the last segment of `path` looks like a file name with an extension.
pub fn is_public_file(path: &str) -> bool {
    public_file_regex().is_match(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefixes_bypassed() {
        let rules = ExclusionRules::default();
        assert!(rules.is_bypassed("/api"));
        assert!(rules.is_bypassed("/api/anything"));
        assert!(rules.is_bypassed("/_next/static/chunks/app.js"));
        assert!(rules.is_bypassed("/_vercel/insights/view"));
        assert!(rules.is_bypassed("/favicon.ico"));
    }

    #[test]
    fn test_prefix_match_is_not_segment_aware() {
        let rules = ExclusionRules::default();
        assert!(rules.is_bypassed("/apidocs"));
    }

    #[test]
    fn test_static_files_bypassed() {
        let rules = ExclusionRules::default();
        assert!(rules.is_bypassed("/robots.txt"));
        assert!(rules.is_bypassed("/images/logo.svg"));
        assert!(rules.is_bypassed("/en/sessions/v1.2"));
    }

    #[test]
    fn test_page_routes_not_bypassed() {
        let rules = ExclusionRules::default();
        assert!(!rules.is_bypassed("/"));
        assert!(!rules.is_bypassed("/topics"));
        assert!(!rules.is_bypassed("/ur/topics"));
        assert!(!rules.is_bypassed("/v1.2/sessions"));
        assert!(!rules.is_bypassed("/dotted.dir/"));
    }

    #[test]
    fn test_custom_prefixes() {
        let rules = ExclusionRules::new(["/health", "/assets"]);
        assert!(rules.is_bypassed("/health"));
        assert!(rules.is_bypassed("/assets/app"));
        assert!(!rules.is_bypassed("/api/topics"));
        assert!(!rules.is_bypassed("/favicon"));
    }

    #[test]
    fn test_is_public_file() {
        assert!(is_public_file("/file.pdf"));
        assert!(!is_public_file("/file."));
        assert!(!is_public_file("/no-extension"));
    }
}
