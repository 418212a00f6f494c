//! Locale prefixes on request paths.
//!
//! Public URLs always start with a locale segment (`/fr/topics/zakat`); the
//! routes behind the gateway are locale-free (`/topics/zakat`). These
//! functions convert between the two forms.

use crate::i18n::Locale;

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// The locale named by the first path segment, if any.
pub fn locale_from_path(path: &str) -> Option<Locale> {
    segments(path).next().and_then(Locale::from_code)
}

/// Remove a leading locale segment.
///
/// An empty path, or one with only a locale segment, becomes `/`. A path
/// without a locale prefix is returned as given (with a leading `/` added if
/// missing), so empty segments and trailing slashes survive in that case.
pub fn strip_locale(path: &str) -> String {
    let mut parts = segments(path).peekable();

    let Some(first) = parts.peek().copied() else {
        return "/".to_string();
    };

    if Locale::from_code(first).is_some() {
        parts.next();
        let rest: Vec<&str> = parts.collect();
        return if rest.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", rest.join("/"))
        };
    }

    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Prefix `path` with `locale`, replacing any locale it already carries.
///
/// The root collapses to `/{locale}` without a trailing slash. This is also
/// how the language switcher builds the link to the current page in
/// another locale.
pub fn with_locale(path: &str, locale: Locale) -> String {
    if path.is_empty() || path == "/" {
        return format!("/{}", locale);
    }

    let clean = strip_locale(path);
    if clean == "/" {
        format!("/{}", locale)
    } else {
        format!("/{}{}", locale, clean)
    }
}

/// Internal route served behind a localized public path.
///
/// `/:locale` maps to `/` and `/:locale/*rest` to `/*rest`; paths without a
/// locale are returned unchanged.
pub fn internal_route(path: &str) -> String {
    strip_locale(path)
}
