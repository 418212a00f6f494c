use anyhow::{bail, Context, Result};

use crate::i18n::Locale;
use crate::routing::{DEFAULT_BYPASS_PREFIXES, DEFAULT_COOKIE_NAME};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Locale routing
    pub default_locale: Locale,
    pub locale_cookie_name: String,
    pub bypass_prefixes: Vec<String>,

    // Content API
    pub api_url: String,
    pub api_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_locale = match std::env::var("DEFAULT_LOCALE") {
            Ok(code) => code
                .parse::<Locale>()
                .with_context(|| format!("DEFAULT_LOCALE '{}' is not supported", code))?,
            Err(_) => Locale::DEFAULT,
        };

        let locale_cookie_name = std::env::var("LOCALE_COOKIE_NAME")
            .unwrap_or_else(|_| DEFAULT_COOKIE_NAME.to_string());
        validate_cookie_name(&locale_cookie_name)?;

        Ok(Self {
            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Locale routing
            default_locale,
            locale_cookie_name,
            bypass_prefixes: std::env::var("BYPASS_PREFIXES")
                .map(|v| parse_prefixes(&v))
                .unwrap_or_else(|_| {
                    DEFAULT_BYPASS_PREFIXES.iter().map(|p| p.to_string()).collect()
                }),

            // Content API
            api_url: std::env::var("API_URL")
                .unwrap_or_else(|_| "http://localhost:5000/api".to_string()),
            api_timeout_secs: std::env::var("API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        })
    }
}

/// Split a comma-separated prefix list, dropping blanks.
fn parse_prefixes(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Cookie names are RFC 6265 tokens: visible ASCII minus separators.
fn validate_cookie_name(name: &str) -> Result<()> {
    const SEPARATORS: &str = "()<>@,;:\\\"/[]?={} \t";

    if name.is_empty() {
        bail!("LOCALE_COOKIE_NAME must not be empty");
    }
    if let Some(c) = name
        .chars()
        .find(|c| !c.is_ascii_graphic() || SEPARATORS.contains(*c))
    {
        bail!("LOCALE_COOKIE_NAME contains invalid character {:?}", c);
    }
    Ok(())
}
