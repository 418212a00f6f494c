//! Topic label translation.
//!
//! Topic names arrive from the content API in English and in several
//! spellings ("Zakat & Finance", "zakat-finance", "Zakat and Finance").
//! They are normalized to a canonical key and looked up in a fixed table of
//! translated labels. Labels that match no known topic are shown as-is.

use regex::Regex;
use std::sync::OnceLock;

use super::Locale;

/// A topic label in every supported locale.
#[derive(Debug, Clone, Copy)]
pub struct TopicLabels {
    pub en: &'static str,
    pub ur: &'static str,
    pub de: &'static str,
    pub fr: &'static str,
    pub es: &'static str,
}

impl TopicLabels {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Ur => self.ur,
            Locale::De => self.de,
            Locale::Fr => self.fr,
            Locale::Es => self.es,
        }
    }
}

const TOPIC_LABELS: &[(&str, TopicLabels)] = &[
    (
        "salah-worship",
        TopicLabels {
            en: "Salah & Worship",
            ur: "نماز اور عبادات",
            de: "Gebet und Anbetung",
            fr: "Priere et adoration",
            es: "Salah y adoracion",
        },
    ),
    (
        "zakat-finance",
        TopicLabels {
            en: "Zakat & Finance",
            ur: "زکوٰة اور مالیات",
            de: "Zakat und Finanzen",
            fr: "Zakat et finance",
            es: "Zakat y finanzas",
        },
    ),
    (
        "business-halal-income",
        TopicLabels {
            en: "Business & Halal Income",
            ur: "کاروبار اور حلال آمدن",
            de: "Geschaft und Halal-Einkommen",
            fr: "Business et revenus halal",
            es: "Negocios e ingresos halal",
        },
    ),
    (
        "marriage-family",
        TopicLabels {
            en: "Marriage & Family",
            ur: "نکاح اور خاندان",
            de: "Ehe und Familie",
            fr: "Mariage et famille",
            es: "Matrimonio y familia",
        },
    ),
    (
        "women-hijab",
        TopicLabels {
            en: "Women & Hijab",
            ur: "خواتین اور حجاب",
            de: "Frauen und Hijab",
            fr: "Femmes et hijab",
            es: "Mujeres e hiyab",
        },
    ),
    (
        "gambling-sports",
        TopicLabels {
            en: "Gambling & Sports",
            ur: "جوا اور کھیل",
            de: "Glucksspiel und Sport",
            fr: "Jeux d'argent et sport",
            es: "Juegos de azar y deportes",
        },
    ),
    (
        "education-social-issues",
        TopicLabels {
            en: "Education & Social Issues",
            ur: "تعلیم اور سماجی مسائل",
            de: "Bildung und soziale Themen",
            fr: "Education et questions sociales",
            es: "Educacion y temas sociales",
        },
    ),
    (
        "social-issues",
        TopicLabels {
            en: "Social Issues",
            ur: "سماجی مسائل",
            de: "Soziale Themen",
            fr: "Questions sociales",
            es: "Temas sociales",
        },
    ),
    (
        "trade-contracts",
        TopicLabels {
            en: "Trade & Contracts",
            ur: "تجارت اور معاہدات",
            de: "Handel und Vertrage",
            fr: "Commerce et contrats",
            es: "Comercio y contratos",
        },
    ),
    (
        "islamic-law-contracts",
        TopicLabels {
            en: "Islamic Law & Contracts",
            ur: "اسلامی قانون اور معاہدات",
            de: "Islamisches Recht und Vertrage",
            fr: "Droit islamique et contrats",
            es: "Ley islamica y contratos",
        },
    ),
    (
        "finance",
        TopicLabels {
            en: "Finance",
            ur: "مالیات",
            de: "Finanzen",
            fr: "Finance",
            es: "Finanzas",
        },
    ),
    (
        "business",
        TopicLabels {
            en: "Business",
            ur: "کاروبار",
            de: "Geschaft",
            fr: "Business",
            es: "Negocios",
        },
    ),
    (
        "marriage",
        TopicLabels {
            en: "Marriage",
            ur: "نکاح",
            de: "Ehe",
            fr: "Mariage",
            es: "Matrimonio",
        },
    ),
    (
        "women",
        TopicLabels {
            en: "Women",
            ur: "خواتین",
            de: "Frauen",
            fr: "Femmes",
            es: "Mujeres",
        },
    ),
    (
        "zakat",
        TopicLabels {
            en: "Zakat",
            ur: "زکوٰة",
            de: "Zakat",
            fr: "Zakat",
            es: "Zakat",
        },
    ),
    (
        "salah",
        TopicLabels {
            en: "Salah",
            ur: "نماز",
            de: "Salah",
            fr: "Salah",
            es: "Salah",
        },
    ),
];

/// Normalized spellings that don't reduce to a key's slug form.
const TOPIC_ALIASES: &[(&str, &str)] = &[
    ("salah and worship", "salah-worship"),
    ("zakat and finance", "zakat-finance"),
    ("business and halal income", "business-halal-income"),
    ("marriage and family", "marriage-family"),
    ("women and hijab", "women-hijab"),
    ("gambling and sports", "gambling-sports"),
    ("social issues", "social-issues"),
    ("education and social issues", "education-social-issues"),
    ("trade and contracts", "trade-contracts"),
    ("islamic law and contracts", "islamic-law-contracts"),
];

static DISALLOWED_REGEX: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();

fn disallowed_regex() -> &'static Regex {
    DISALLOWED_REGEX.get_or_init(|| Regex::new(r"[^a-z0-9\s-]").expect("valid regex"))
}

fn whitespace_regex() -> &'static Regex {
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Reduce a topic name to lowercase words separated by single spaces.
///
/// `&` reads as "and"; hyphens become spaces after whitespace is collapsed,
/// so `"a - b"` keeps its extra spaces until [`to_slug`] collapses them.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let spelled = lowered.trim().replace('&', " and ");
    let cleaned = disallowed_regex().replace_all(&spelled, "");
    let collapsed = whitespace_regex().replace_all(&cleaned, " ");
    collapsed.replace('-', " ")
}

/// Slug form of a topic name (`"Zakat & Finance"` → `"zakat-and-finance"`).
pub fn to_slug(input: &str) -> String {
    whitespace_regex()
        .replace_all(&normalize(input), "-")
        .into_owned()
}

fn labels_for(key: &str) -> Option<&'static TopicLabels> {
    TOPIC_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, labels)| labels)
}

/// Resolve a topic name or slug to its canonical key, if it is a known topic.
pub fn resolve_topic_key(input: &str) -> Option<&'static str> {
    let normalized = normalize(input);
    if let Some((_, key)) = TOPIC_ALIASES.iter().find(|(alias, _)| *alias == normalized) {
        return Some(*key);
    }

    let slug = to_slug(input);
    TOPIC_LABELS
        .iter()
        .find(|(key, _)| *key == slug)
        .map(|(key, _)| *key)
}

/// Translate a topic label into `locale`, or return it unchanged when the
/// topic is unknown.
pub fn translate_topic_label(label: &str, locale: Locale) -> String {
    resolve_topic_key(label)
        .and_then(labels_for)
        .map(|labels| labels.get(locale).to_string())
        .unwrap_or_else(|| label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== normalize Tests ====================

    #[test]
    fn test_normalize_ampersand() {
        assert_eq!(normalize("Salah & Worship"), "salah and worship");
    }

    #[test]
    fn test_normalize_strips_punctuation_and_trims() {
        assert_eq!(normalize("  Women's   Issues! "), "womens issues");
    }

    #[test]
    fn test_normalize_hyphens() {
        assert_eq!(normalize("zakat-finance"), "zakat finance");
    }

    #[test]
    fn test_to_slug() {
        assert_eq!(to_slug("Zakat & Finance"), "zakat-and-finance");
        assert_eq!(to_slug("marriage-family"), "marriage-family");
        assert_eq!(to_slug("Islamic  Law"), "islamic-law");
    }

    // ==================== resolve_topic_key Tests ====================

    #[test]
    fn test_resolve_through_alias() {
        assert_eq!(resolve_topic_key("Zakat & Finance"), Some("zakat-finance"));
        assert_eq!(resolve_topic_key("zakat and finance"), Some("zakat-finance"));
        assert_eq!(resolve_topic_key("Social Issues"), Some("social-issues"));
    }

    #[test]
    fn test_resolve_through_slug() {
        assert_eq!(resolve_topic_key("salah-worship"), Some("salah-worship"));
        assert_eq!(resolve_topic_key("Finance"), Some("finance"));
        assert_eq!(resolve_topic_key("SALAH"), Some("salah"));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(resolve_topic_key("Hajj & Umrah"), None);
        assert_eq!(resolve_topic_key(""), None);
    }

    #[test]
    fn test_every_alias_points_at_a_known_key() {
        for (alias, key) in TOPIC_ALIASES {
            assert!(labels_for(key).is_some(), "alias {} -> {}", alias, key);
        }
    }

    // ==================== translate_topic_label Tests ====================

    #[test]
    fn test_translate_known_topic() {
        assert_eq!(translate_topic_label("Marriage & Family", Locale::De), "Ehe und Familie");
        assert_eq!(translate_topic_label("women-hijab", Locale::Es), "Mujeres e hiyab");
        assert_eq!(translate_topic_label("Salah", Locale::Ur), "نماز");
    }

    #[test]
    fn test_translate_english_canonicalizes_spelling() {
        assert_eq!(
            translate_topic_label("business and halal income", Locale::En),
            "Business & Halal Income"
        );
    }

    #[test]
    fn test_translate_unknown_topic_passes_through() {
        assert_eq!(translate_topic_label("Hajj & Umrah", Locale::Fr), "Hajj & Umrah");
    }
}
