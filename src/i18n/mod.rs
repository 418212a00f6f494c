//! Internationalization (i18n) module for the localized site.
//!
//! # Architecture
//!
//! - `locale`: The closed `Locale` enum and its per-language metadata
//! - `strings`: Navigation labels for each locale
//! - `topics`: Translation of topic names coming from the content API
//!
//! # Example
//!
//! ```rust,ignore
//! use askyourmufti_gateway::i18n::{Locale, translate_topic_label};
//!
//! let urdu = Locale::from_code("ur").expect("supported");
//! assert_eq!(urdu.direction().as_str(), "rtl");
//! let label = translate_topic_label("Zakat & Finance", urdu);
//! ```

mod locale;
mod strings;
mod topics;

pub use locale::{is_locale, Direction, Locale, LocaleConfig};
pub use strings::LocaleStrings;
pub use topics::{resolve_topic_key, to_slug, translate_topic_label};
