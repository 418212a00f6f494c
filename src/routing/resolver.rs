//! Locale resolution for incoming requests.
//!
//! The resolver is pure: the stored preference is read from, and written to,
//! an explicit [`PreferenceStore`] handed in by the caller. The HTTP layer
//! backs that store with a cookie; tests back it with plain memory.

use tracing::debug;

use super::exclusion::ExclusionRules;
use super::path::{locale_from_path, with_locale};
use crate::i18n::Locale;

/// Where a visitor's preferred locale is remembered between requests.
pub trait PreferenceStore {
    /// The raw stored value, which may not be a supported locale.
    fn read(&self) -> Option<&str>;

    /// Remember `locale` for future requests.
    fn write(&mut self, locale: Locale);
}

/// What to do with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Not a page route; pass through untouched.
    Bypass,

    /// The path already carries this locale; pass through.
    Localized(Locale),

    /// Send the visitor to `location` (path plus original query).
    Redirect { locale: Locale, location: String },
}

#[derive(Debug, Clone)]
pub struct LocaleResolver {
    rules: ExclusionRules,
    default_locale: Locale,
}

impl LocaleResolver {
    pub fn new(rules: ExclusionRules, default_locale: Locale) -> Self {
        Self {
            rules,
            default_locale,
        }
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// The stored preference if it names a supported locale, else the default.
    pub fn preferred_locale(&self, stored: Option<&str>) -> Locale {
        stored
            .and_then(Locale::from_code)
            .unwrap_or(self.default_locale)
    }

    /// Decide the outcome for `path` (and its query string, without `?`).
    ///
    /// A localized request writes its locale to `store`; the other outcomes
    /// leave the store untouched.
    pub fn resolve<P>(&self, path: &str, query: Option<&str>, store: &mut P) -> Outcome
    where
        P: PreferenceStore + ?Sized,
    {
        if self.rules.is_bypassed(path) {
            return Outcome::Bypass;
        }

        if let Some(locale) = locale_from_path(path) {
            store.write(locale);
            return Outcome::Localized(locale);
        }

        let locale = self.preferred_locale(store.read());
        let mut location = with_locale(path, locale);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            location.push('?');
            location.push_str(query);
        }

        debug!("Redirecting {} to {}", path, location);
        Outcome::Redirect { locale, location }
    }
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new(ExclusionRules::default(), Locale::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryPreference {
        stored: Option<String>,
        written: Option<Locale>,
    }

    impl MemoryPreference {
        fn with(value: &str) -> Self {
            Self {
                stored: Some(value.to_string()),
                written: None,
            }
        }
    }

    impl PreferenceStore for MemoryPreference {
        fn read(&self) -> Option<&str> {
            self.stored.as_deref()
        }

        fn write(&mut self, locale: Locale) {
            self.written = Some(locale);
        }
    }

    fn redirect(locale: Locale, location: &str) -> Outcome {
        Outcome::Redirect {
            locale,
            location: location.to_string(),
        }
    }

    // ==================== Bypass ====================

    #[test]
    fn test_api_never_redirected() {
        let resolver = LocaleResolver::default();

        for mut store in [
            MemoryPreference::default(),
            MemoryPreference::with("de"),
            MemoryPreference::with("garbage"),
        ] {
            assert_eq!(resolver.resolve("/api/anything", None, &mut store), Outcome::Bypass);
            assert_eq!(store.written, None);
        }
    }

    #[test]
    fn test_static_file_bypassed() {
        let resolver = LocaleResolver::default();
        let mut store = MemoryPreference::default();
        assert_eq!(resolver.resolve("/logo.png", None, &mut store), Outcome::Bypass);
    }

    // ==================== Already localized ====================

    #[test]
    fn test_localized_path_persists_locale() {
        let resolver = LocaleResolver::default();
        let mut store = MemoryPreference::default();

        assert_eq!(
            resolver.resolve("/ur/topics", None, &mut store),
            Outcome::Localized(Locale::Ur)
        );
        assert_eq!(store.written, Some(Locale::Ur));
    }

    #[test]
    fn test_path_locale_beats_cookie() {
        let resolver = LocaleResolver::default();
        let mut store = MemoryPreference::with("de");

        assert_eq!(
            resolver.resolve("/fr", None, &mut store),
            Outcome::Localized(Locale::Fr)
        );
        assert_eq!(store.written, Some(Locale::Fr));
    }

    // ==================== Redirects ====================

    #[test]
    fn test_redirect_to_default_without_cookie() {
        let resolver = LocaleResolver::default();
        let mut store = MemoryPreference::default();

        assert_eq!(
            resolver.resolve("/topics", None, &mut store),
            redirect(Locale::En, "/en/topics")
        );
        assert_eq!(store.written, None);
    }

    #[test]
    fn test_redirect_uses_cookie() {
        let resolver = LocaleResolver::default();
        let mut store = MemoryPreference::with("de");

        assert_eq!(
            resolver.resolve("/topics", None, &mut store),
            redirect(Locale::De, "/de/topics")
        );
    }

    #[test]
    fn test_redirect_preserves_query() {
        let resolver = LocaleResolver::default();
        let mut store = MemoryPreference::default();

        assert_eq!(
            resolver.resolve("/topics", Some("x=1"), &mut store),
            redirect(Locale::En, "/en/topics?x=1")
        );
    }

    #[test]
    fn test_empty_query_not_appended() {
        let resolver = LocaleResolver::default();
        let mut store = MemoryPreference::default();

        assert_eq!(
            resolver.resolve("/topics", Some(""), &mut store),
            redirect(Locale::En, "/en/topics")
        );
    }

    #[test]
    fn test_invalid_cookie_falls_back_to_default() {
        let resolver = LocaleResolver::default();

        for value in ["xx", "EN", "", " de"] {
            let mut store = MemoryPreference::with(value);
            assert_eq!(
                resolver.resolve("/topics", None, &mut store),
                redirect(Locale::En, "/en/topics"),
                "cookie value {:?}",
                value
            );
        }
    }

    #[test]
    fn test_root_redirect() {
        let resolver = LocaleResolver::default();
        let mut store = MemoryPreference::with("ur");

        assert_eq!(resolver.resolve("/", None, &mut store), redirect(Locale::Ur, "/ur"));
    }

    #[test]
    fn test_configured_default_locale() {
        let resolver = LocaleResolver::new(ExclusionRules::default(), Locale::Es);
        let mut store = MemoryPreference::default();

        assert_eq!(resolver.default_locale(), Locale::Es);
        assert_eq!(
            resolver.resolve("/sessions", None, &mut store),
            redirect(Locale::Es, "/es/sessions")
        );
    }

    #[test]
    fn test_preferred_locale() {
        let resolver = LocaleResolver::default();
        assert_eq!(resolver.preferred_locale(Some("fr")), Locale::Fr);
        assert_eq!(resolver.preferred_locale(Some("fr-FR")), Locale::En);
        assert_eq!(resolver.preferred_locale(None), Locale::En);
    }
}
