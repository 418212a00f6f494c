//! Locale routing: which requests get a locale prefix, and how.
//!
//! - `path`: Pure conversions between public (localized) and internal paths
//! - `exclusion`: API, framework and static-file routes that skip routing
//! - `resolver`: The bypass / localized / redirect decision
//! - `middleware`: Cookie-backed axum layer running the resolver
//! - `metrics`: Counters of routing outcomes

mod exclusion;
mod metrics;
mod middleware;
mod path;
mod resolver;

pub use exclusion::{is_public_file, ExclusionRules, DEFAULT_BYPASS_PREFIXES};
pub use metrics::{MetricsReport, RoutingMetrics};
pub use middleware::{
    extract_cookie, locale_layer, redirect_response, CookiePreference, LocaleRouting,
    DEFAULT_COOKIE_NAME,
};
pub use path::{internal_route, locale_from_path, strip_locale, with_locale};
pub use resolver::{LocaleResolver, Outcome, PreferenceStore};
