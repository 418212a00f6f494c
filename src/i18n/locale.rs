//! Locale type: the closed set of languages the site is published in.
//!
//! Every locale-aware decision in the gateway goes through this enum, so
//! adding a language means adding a variant and its [`LocaleConfig`] entry.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::LocaleError;

/// Reading direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Static metadata for a supported locale.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleConfig {
    /// ISO 639-1 code used as the path prefix and cookie value (e.g., "en", "ur")
    pub code: &'static str,

    /// English name of the language (e.g., "Urdu")
    pub name: &'static str,

    /// Native name shown in the language switcher (e.g., "اردو")
    pub native_name: &'static str,

    /// Region tag shown next to the native name (e.g., "PK")
    pub short: &'static str,

    /// Script direction
    pub direction: Direction,
}

/// A supported site locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ur,
    De,
    Fr,
    Es,
}

impl Locale {
    /// All supported locales, in language-switcher order.
    pub const ALL: [Locale; 5] = [Locale::En, Locale::Ur, Locale::De, Locale::Fr, Locale::Es];

    /// Locale used when neither the path nor the preference cookie names one.
    pub const DEFAULT: Locale = Locale::En;

    /// Look up a locale by its exact code.
    ///
    /// Matching is case-sensitive and does not trim: `"EN"` and `" en"` are
    /// not locales.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "ur" => Some(Locale::Ur),
            "de" => Some(Locale::De),
            "fr" => Some(Locale::Fr),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    /// The code used in paths and cookies.
    pub fn code(&self) -> &'static str {
        self.config().code
    }

    pub fn config(&self) -> &'static LocaleConfig {
        match self {
            Locale::En => &EN,
            Locale::Ur => &UR,
            Locale::De => &DE,
            Locale::Fr => &FR,
            Locale::Es => &ES,
        }
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn short(&self) -> &'static str {
        self.config().short
    }

    pub fn direction(&self) -> Direction {
        self.config().direction
    }
}

/// True iff `value` is exactly one of the supported locale codes.
pub fn is_locale(value: Option<&str>) -> bool {
    value.and_then(Locale::from_code).is_some()
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| LocaleError::Unknown(s.to_string()))
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

static EN: LocaleConfig = LocaleConfig {
    code: "en",
    name: "English",
    native_name: "English",
    short: "GB",
    direction: Direction::Ltr,
};

static UR: LocaleConfig = LocaleConfig {
    code: "ur",
    name: "Urdu",
    native_name: "اردو",
    short: "PK",
    direction: Direction::Rtl,
};

static DE: LocaleConfig = LocaleConfig {
    code: "de",
    name: "German",
    native_name: "Deutsch",
    short: "DE",
    direction: Direction::Ltr,
};

static FR: LocaleConfig = LocaleConfig {
    code: "fr",
    name: "French",
    native_name: "Français",
    short: "FR",
    direction: Direction::Ltr,
};

static ES: LocaleConfig = LocaleConfig {
    code: "es",
    name: "Spanish",
    native_name: "Español",
    short: "ES",
    direction: Direction::Ltr,
};
