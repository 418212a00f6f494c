use super::Locale;

/// Navigation labels shown in the site header and footer for one locale
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    // ==================== Header Navigation ====================
    pub nav_home: &'static str,
    pub nav_topics: &'static str,
    pub nav_sessions: &'static str,

    /// Label for the question-and-answer archive
    pub nav_qa: &'static str,
    pub nav_search: &'static str,
    pub nav_about: &'static str,
    pub nav_donate: &'static str,

    /// Call-to-action for submitting a new question
    pub nav_ask: &'static str,

    // ==================== Footer Navigation ====================
    pub nav_contact: &'static str,
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    nav_home: "Home",
    nav_topics: "Topics",
    nav_sessions: "Sessions",
    nav_qa: "Q&A",
    nav_search: "Search",
    nav_about: "About",
    nav_donate: "Donate",
    nav_ask: "Ask a Question",
    nav_contact: "Contact",
};

// ==================== Urdu Strings ====================

pub const URDU_STRINGS: LocaleStrings = LocaleStrings {
    nav_home: "ہوم",
    nav_topics: "موضوعات",
    nav_sessions: "نشستیں",
    nav_qa: "سوال و جواب",
    nav_search: "تلاش",
    nav_about: "تعارف",
    nav_donate: "عطیہ",
    nav_ask: "سوال پوچھیں",
    nav_contact: "رابطہ",
};

// ==================== German Strings ====================

pub const GERMAN_STRINGS: LocaleStrings = LocaleStrings {
    nav_home: "Startseite",
    nav_topics: "Themen",
    nav_sessions: "Vorträge",
    nav_qa: "Fragen & Antworten",
    nav_search: "Suche",
    nav_about: "Über uns",
    nav_donate: "Spenden",
    nav_ask: "Frage stellen",
    nav_contact: "Kontakt",
};

// ==================== French Strings ====================

pub const FRENCH_STRINGS: LocaleStrings = LocaleStrings {
    nav_home: "Accueil",
    nav_topics: "Thèmes",
    nav_sessions: "Séances",
    nav_qa: "Questions-réponses",
    nav_search: "Recherche",
    nav_about: "À propos",
    nav_donate: "Faire un don",
    nav_ask: "Poser une question",
    nav_contact: "Contact",
};

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: LocaleStrings = LocaleStrings {
    nav_home: "Inicio",
    nav_topics: "Temas",
    nav_sessions: "Sesiones",
    nav_qa: "Preguntas y respuestas",
    nav_search: "Buscar",
    nav_about: "Acerca de",
    nav_donate: "Donar",
    nav_ask: "Hacer una pregunta",
    nav_contact: "Contacto",
};

impl Locale {
    /// Navigation labels for this locale.
    pub fn strings(&self) -> &'static LocaleStrings {
        match self {
            Locale::En => &ENGLISH_STRINGS,
            Locale::Ur => &URDU_STRINGS,
            Locale::De => &GERMAN_STRINGS,
            Locale::Fr => &FRENCH_STRINGS,
            Locale::Es => &SPANISH_STRINGS,
        }
    }
}

impl LocaleStrings {
    /// Header navigation as `(label, unlocalized path)` pairs, in display order.
    pub fn header_links(&self) -> [(&'static str, &'static str); 8] {
        [
            (self.nav_home, "/"),
            (self.nav_topics, "/topics"),
            (self.nav_sessions, "/sessions"),
            (self.nav_qa, "/qa"),
            (self.nav_search, "/search"),
            (self.nav_about, "/about"),
            (self.nav_donate, "/donate"),
            (self.nav_ask, "/ask"),
        ]
    }

    /// Footer navigation as `(label, unlocalized path)` pairs.
    pub fn footer_links(&self) -> [(&'static str, &'static str); 6] {
        [
            (self.nav_home, "/"),
            (self.nav_about, "/about"),
            (self.nav_sessions, "/sessions"),
            (self.nav_topics, "/topics"),
            (self.nav_search, "/search"),
            (self.nav_contact, "/contact"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_strings() -> Vec<(Locale, &'static LocaleStrings)> {
        Locale::ALL.iter().map(|l| (*l, l.strings())).collect()
    }

    #[test]
    fn test_no_empty_labels() {
        for (locale, strings) in all_strings() {
            for (label, path) in strings.header_links().iter().chain(strings.footer_links().iter()) {
                assert!(!label.is_empty(), "{} has an empty label for {}", locale, path);
            }
        }
    }

    #[test]
    fn test_english_labels() {
        let strings = Locale::En.strings();
        assert_eq!(strings.nav_home, "Home");
        assert_eq!(strings.nav_qa, "Q&A");
    }

    #[test]
    fn test_translated_labels_differ_from_english() {
        for locale in [Locale::Ur, Locale::De, Locale::Fr, Locale::Es] {
            assert_ne!(locale.strings().nav_home, ENGLISH_STRINGS.nav_home);
            assert_ne!(locale.strings().nav_search, ENGLISH_STRINGS.nav_search);
        }
    }

    #[test]
    fn test_link_paths_are_unlocalized() {
        let strings = &ENGLISH_STRINGS;
        for (_, path) in strings.header_links().iter().chain(strings.footer_links().iter()) {
            assert!(path.starts_with('/'));
            let first = path.split('/').find(|s| !s.is_empty()).unwrap_or("");
            assert!(Locale::from_code(first).is_none(), "{} is already localized", path);
        }
    }
}
