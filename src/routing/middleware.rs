//! Axum middleware applying locale resolution to every request.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, LOCATION, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, error, warn};

use super::metrics::RoutingMetrics;
use super::resolver::{LocaleResolver, Outcome, PreferenceStore};
use crate::error::RoutingError;
use crate::i18n::Locale;

/// Cookie name shared with the site frontend.
pub const DEFAULT_COOKIE_NAME: &str = "NEXT_LOCALE";

/// Everything the locale middleware needs, shared across requests.
#[derive(Debug)]
pub struct LocaleRouting {
    pub resolver: LocaleResolver,
    pub cookie_name: String,
    pub metrics: RoutingMetrics,
}

impl LocaleRouting {
    pub fn new(resolver: LocaleResolver, cookie_name: impl Into<String>) -> Self {
        Self {
            resolver,
            cookie_name: cookie_name.into(),
            metrics: RoutingMetrics::new(),
        }
    }
}

impl Default for LocaleRouting {
    fn default() -> Self {
        Self::new(LocaleResolver::default(), DEFAULT_COOKIE_NAME)
    }
}

/// Read a cookie value from the request's `Cookie` headers.
///
/// HTTP/2 clients may send one `Cookie` field per pair, so every field is
/// searched. Fields that are not valid UTF-8 are skipped.
pub fn extract_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;

            if name == cookie_name {
                Some(value.to_string())
            } else {
                None
            }
        })
}

/// Preference store backed by the request cookie.
///
/// Writes are collected and turned into a `Set-Cookie` header for the
/// response; nothing is sent unless the resolver writes.
#[derive(Debug)]
pub struct CookiePreference<'a> {
    name: &'a str,
    stored: Option<String>,
    pending: Option<Locale>,
}

impl<'a> CookiePreference<'a> {
    pub fn from_headers(headers: &HeaderMap, name: &'a str) -> Self {
        Self {
            name,
            stored: extract_cookie(headers, name),
            pending: None,
        }
    }

    /// `Set-Cookie` value for a pending write: `Path=/`, `SameSite=Lax`, session lifetime.
    pub fn set_cookie_header(&self) -> Result<Option<HeaderValue>, RoutingError> {
        let Some(locale) = self.pending else {
            return Ok(None);
        };

        let cookie = format!("{}={}; Path=/; SameSite=Lax", self.name, locale);
        HeaderValue::from_str(&cookie)
            .map(Some)
            .map_err(RoutingError::PreferenceCookie)
    }
}

impl PreferenceStore for CookiePreference<'_> {
    fn read(&self) -> Option<&str> {
        self.stored.as_deref()
    }

    fn write(&mut self, locale: Locale) {
        self.pending = Some(locale);
    }
}

/// `307 Temporary Redirect` to `location`.
pub fn redirect_response(location: &str) -> Result<Response, RoutingError> {
    let value = HeaderValue::from_str(location).map_err(|source| RoutingError::RedirectLocation {
        location: location.to_string(),
        source,
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(LOCATION, value)]).into_response())
}

/// Locale middleware.
///
/// Routing failures never fail the request: they are logged and the
/// request continues as if it had been bypassed.
pub async fn locale_layer(
    State(routing): State<Arc<LocaleRouting>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);
    let mut store = CookiePreference::from_headers(request.headers(), &routing.cookie_name);

    match routing.resolver.resolve(&path, query.as_deref(), &mut store) {
        Outcome::Bypass => {
            debug!("Bypassing locale routing for {}", path);
            routing.metrics.record_bypassed();
            next.run(request).await
        }
        Outcome::Localized(locale) => {
            let cookie = store.set_cookie_header();
            let mut response = next.run(request).await;

            match cookie {
                Ok(Some(value)) => {
                    response.headers_mut().append(SET_COOKIE, value);
                    routing.metrics.record_localized();
                }
                Ok(None) => routing.metrics.record_localized(),
                Err(e) => {
                    warn!("Could not persist locale {} for {}: {}", locale, path, e);
                    routing.metrics.record_failed_open();
                }
            }

            response
        }
        Outcome::Redirect { location, .. } => match redirect_response(&location) {
            Ok(response) => {
                routing.metrics.record_redirected();
                response
            }
            Err(e) => {
                error!("Locale redirect failed, passing {} through: {}", path, e);
                routing.metrics.record_failed_open();
                next.run(request).await
            }
        },
    }
}
