use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::{Topic, TopicCatalog};
use crate::config::Config;
use crate::error::ApiError;
use crate::i18n::{translate_topic_label, Direction, Locale};
use crate::routing::{
    internal_route, locale_from_path, locale_layer, with_locale, ExclusionRules, LocaleResolver,
    LocaleRouting, MetricsReport,
};

#[derive(Clone)]
pub struct AppState {
    pub routing: Arc<LocaleRouting>,
    pub catalog: Arc<TopicCatalog>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        let resolver = LocaleResolver::new(
            ExclusionRules::new(config.bypass_prefixes.iter().cloned()),
            config.default_locale,
        );

        Ok(Self {
            routing: Arc::new(LocaleRouting::new(resolver, &config.locale_cookie_name)),
            catalog: Arc::new(TopicCatalog::from_config(config)?),
        })
    }
}

/// Build the gateway router with locale routing in front of every route.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/locales", get(list_locales))
        .route("/api/localize", get(localize))
        .route("/api/topics/label", get(topic_label))
        .route("/api/metrics", get(metrics))
        .fallback(page_shell)
        .layer(from_fn_with_state(state.routing.clone(), locale_layer))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: &Config) -> Result<()> {
    let state = AppState::from_config(config)?;
    let app = router(state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Server running on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

// ==================== API Handlers ====================

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Serialize)]
struct LocaleInfo {
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    short: &'static str,
    direction: Direction,
    is_default: bool,
}

async fn list_locales(State(state): State<AppState>) -> Json<Vec<LocaleInfo>> {
    let default_locale = state.routing.resolver.default_locale();

    Json(
        Locale::ALL
            .iter()
            .map(|locale| LocaleInfo {
                code: locale.code(),
                name: locale.name(),
                native_name: locale.native_name(),
                short: locale.short(),
                direction: locale.direction(),
                is_default: *locale == default_locale,
            })
            .collect(),
    )
}

#[derive(Debug, Deserialize)]
struct LocalizeParams {
    path: Option<String>,
    locale: Option<String>,
}

#[derive(Debug, Serialize)]
struct LocalizeResponse {
    path: String,
}

async fn localize(
    Query(params): Query<LocalizeParams>,
) -> Result<Json<LocalizeResponse>, ApiError> {
    let path = params.path.ok_or(ApiError::MissingParameter("path"))?;
    let locale: Locale = params
        .locale
        .ok_or(ApiError::MissingParameter("locale"))?
        .parse()?;

    Ok(Json(LocalizeResponse {
        path: with_locale(&path, locale),
    }))
}

#[derive(Debug, Deserialize)]
struct TopicLabelParams {
    name: Option<String>,
    locale: Option<String>,
}

#[derive(Debug, Serialize)]
struct TopicLabelResponse {
    label: String,
}

async fn topic_label(
    Query(params): Query<TopicLabelParams>,
) -> Result<Json<TopicLabelResponse>, ApiError> {
    let name = params.name.ok_or(ApiError::MissingParameter("name"))?;
    let locale: Locale = params
        .locale
        .ok_or(ApiError::MissingParameter("locale"))?
        .parse()?;

    Ok(Json(TopicLabelResponse {
        label: translate_topic_label(&name, locale),
    }))
}

async fn metrics(State(state): State<AppState>) -> Json<MetricsReport> {
    Json(state.routing.metrics.report())
}

// ==================== Page Shell ====================

#[derive(Debug, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct LanguageLink {
    pub code: &'static str,
    pub name: &'static str,
    pub short: &'static str,
    pub href: String,
    pub current: bool,
}

/// Topic pages linked from every footer, whatever the content API lists.
const FOOTER_TOPICS: [&str; 6] = [
    "salah-worship",
    "zakat-finance",
    "marriage-family",
    "business-halal-income",
    "women-hijab",
    "social-issues",
];

/// Locale-dependent frame around a page: document attributes, navigation
/// and the language switcher.
#[derive(Debug, Serialize)]
pub struct PageShell {
    pub lang: &'static str,
    pub dir: &'static str,
    pub route: String,
    pub nav: Vec<Link>,
    pub footer: Vec<Link>,
    pub footer_topics: Vec<Link>,
    pub topics: Vec<Link>,
    pub languages: Vec<LanguageLink>,
}

impl PageShell {
    pub fn build(path: &str, locale: Locale, topics: &[Topic]) -> Self {
        let strings = locale.strings();
        let links = |pairs: &[(&'static str, &'static str)]| -> Vec<Link> {
            pairs
                .iter()
                .map(|(label, target)| Link {
                    label: label.to_string(),
                    href: with_locale(target, locale),
                })
                .collect()
        };

        Self {
            lang: locale.code(),
            dir: locale.direction().as_str(),
            route: internal_route(path),
            nav: links(strings.header_links().as_slice()),
            footer: links(strings.footer_links().as_slice()),
            footer_topics: FOOTER_TOPICS
                .iter()
                .map(|slug| Link {
                    label: translate_topic_label(slug, locale),
                    href: with_locale(&format!("/topics/{}", slug), locale),
                })
                .collect(),
            topics: topics
                .iter()
                .map(|topic| Link {
                    label: translate_topic_label(&topic.name, locale),
                    href: with_locale(&format!("/topics/{}", topic.slug), locale),
                })
                .collect(),
            languages: Locale::ALL
                .iter()
                .map(|other| LanguageLink {
                    code: other.code(),
                    name: other.native_name(),
                    short: other.short(),
                    href: with_locale(path, *other),
                    current: *other == locale,
                })
                .collect(),
        }
    }
}

/// Every path not claimed by an API route. The locale layer has already
/// redirected unprefixed page paths, so a missing locale here means a
/// bypassed route nobody serves.
async fn page_shell(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    let Some(locale) = locale_from_path(path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let topics = state.catalog.topics_or_fallback().await;
    Json(PageShell::build(path, locale, &topics)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_topics;

    #[test]
    fn test_shell_document_attributes() {
        let shell = PageShell::build("/ur/topics", Locale::Ur, &[]);
        assert_eq!(shell.lang, "ur");
        assert_eq!(shell.dir, "rtl");
        assert_eq!(shell.route, "/topics");

        let shell = PageShell::build("/de", Locale::De, &[]);
        assert_eq!(shell.dir, "ltr");
        assert_eq!(shell.route, "/");
    }

    #[test]
    fn test_shell_nav_links_are_localized() {
        let shell = PageShell::build("/fr/about", Locale::Fr, &[]);

        assert_eq!(shell.nav[0].href, "/fr");
        assert_eq!(shell.nav[0].label, "Accueil");
        assert!(shell.nav.iter().skip(1).all(|link| link.href.starts_with("/fr/")));
        assert!(shell.footer.iter().any(|link| link.href == "/fr/contact"));
    }

    #[test]
    fn test_shell_footer_topics_are_translated() {
        let shell = PageShell::build("/ur/about", Locale::Ur, &[]);

        assert_eq!(shell.footer_topics.len(), 6);
        assert_eq!(shell.footer_topics[0].label, "نماز اور عبادات");
        assert_eq!(shell.footer_topics[0].href, "/ur/topics/salah-worship");
        assert_eq!(shell.footer_topics[5].label, "سماجی مسائل");
        assert_eq!(shell.footer_topics[5].href, "/ur/topics/social-issues");

        let shell = PageShell::build("/es", Locale::Es, &[]);
        assert_eq!(shell.footer_topics[1].label, "Zakat y finanzas");
        assert_eq!(shell.footer_topics[1].href, "/es/topics/zakat-finance");
    }

    #[test]
    fn test_shell_language_switcher() {
        let shell = PageShell::build("/es/sessions/42", Locale::Es, &[]);

        let hrefs: Vec<&str> = shell.languages.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "/en/sessions/42",
                "/ur/sessions/42",
                "/de/sessions/42",
                "/fr/sessions/42",
                "/es/sessions/42"
            ]
        );

        let current: Vec<&str> = shell
            .languages
            .iter()
            .filter(|l| l.current)
            .map(|l| l.code)
            .collect();
        assert_eq!(current, vec!["es"]);
    }

    #[test]
    fn test_shell_topic_links() {
        let shell = PageShell::build("/de", Locale::De, &fallback_topics());

        assert_eq!(shell.topics.len(), 6);
        assert_eq!(shell.topics[0].href, "/de/topics/salah");
        assert_eq!(shell.topics[2].label, "Geschaft");
        assert_eq!(shell.topics[5].label, "Finanzen");
    }
}
