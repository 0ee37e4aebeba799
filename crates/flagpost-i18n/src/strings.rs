//! Static string tables for the report dialog and badge, one per supported
//! language. Polish is the canonical table; every other language mirrors its
//! keys exactly.

pub const DEFAULT_LANGUAGE: &str = "pl";
pub const SUPPORTED_LANGUAGES: &[&str] = &["pl", "en", "de", "fr", "es"];

#[derive(Debug)]
pub struct StringTable {
    pub title: &'static str,
    pub violation_label: &'static str,
    pub violations: &'static [&'static str],
    pub email_placeholder: &'static str,
    pub additional_info_placeholder: &'static str,
    pub submit_button: &'static str,
    pub badge_title: &'static str,
    pub about: &'static str,
}

pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&code)
}

/// Table for a supported code; unsupported codes fall back to the default
/// language so the table is never absent.
pub fn string_table(code: &str) -> &'static StringTable {
    match code {
        "pl" => &PL,
        "en" => &EN,
        "de" => &DE,
        "fr" => &FR,
        "es" => &ES,
        _ => &PL,
    }
}

/// Canonical form of a supported code, so callers can hold `&'static str`.
pub fn canonical_code(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES.iter().find(|&&c| c == code).copied()
}

static PL: StringTable = StringTable {
    title: "Zgłoś nielegalną treść",
    violation_label: "Rodzaj naruszenia",
    violations: &[
        "Treści szerzące nienawiść",
        "Dezinformacja/Fake News",
        "Naruszenie praw autorskich",
        "Mowa nienawiść",
        "Cyberprzemoc",
        "Inne (sprecyzuj)",
    ],
    email_placeholder: "Adres e-mail",
    additional_info_placeholder: "Dodatkowe informacje (opcjonalne)",
    submit_button: "Wyślij zgłoszenie",
    badge_title: "Zgłoś nielegalną treść",
    about: "To narzędzie umożliwia zgłaszanie nielegalnych treści na tej stronie.",
};

static EN: StringTable = StringTable {
    title: "Report illegal content",
    violation_label: "Type of violation",
    violations: &[
        "Hate speech content",
        "Disinformation/Fake News",
        "Copyright infringement",
        "Hate speech",
        "Cyberbullying",
        "Other (specify)",
    ],
    email_placeholder: "Email address",
    additional_info_placeholder: "Additional information (optional)",
    submit_button: "Submit report",
    badge_title: "Report illegal content",
    about: "This tool lets you report illegal content found on this page.",
};

static DE: StringTable = StringTable {
    title: "Illegale Inhalte melden",
    violation_label: "Art der Verletzung",
    violations: &[
        "Hassrede-Inhalte",
        "Desinformation/Fake News",
        "Urheberrechtsverletzung",
        "Hassrede",
        "Cybermobbing",
        "Sonstiges (angeben)",
    ],
    email_placeholder: "E-Mail-Adresse",
    additional_info_placeholder: "Zusätzliche Informationen (optional)",
    submit_button: "Meldung senden",
    badge_title: "Illegale Inhalte melden",
    about: "Mit diesem Werkzeug können illegale Inhalte auf dieser Seite gemeldet werden.",
};

static FR: StringTable = StringTable {
    title: "Signaler un contenu illégal",
    violation_label: "Type de violation",
    violations: &[
        "Contenu de haine",
        "Désinformation/Fake News",
        "Violation du droit d'auteur",
        "Discours de haine",
        "Cyberharcèlement",
        "Autre (préciser)",
    ],
    email_placeholder: "Adresse e-mail",
    additional_info_placeholder: "Informations supplémentaires (optionnel)",
    submit_button: "Envoyer le signalement",
    badge_title: "Signaler un contenu illégal",
    about: "Cet outil permet de signaler les contenus illégaux présents sur cette page.",
};

static ES: StringTable = StringTable {
    title: "Denunciar contenido ilegal",
    violation_label: "Tipo de infracción",
    violations: &[
        "Contenido de odio",
        "Desinformación/Fake News",
        "Infracción de derechos de autor",
        "Discurso de odio",
        "Ciberacoso",
        "Otro (especificar)",
    ],
    email_placeholder: "Correo electrónico",
    additional_info_placeholder: "Información adicional (opcional)",
    submit_button: "Enviar denuncia",
    badge_title: "Denunciar contenido ilegal",
    about: "Esta herramienta permite denunciar contenidos ilegales en esta página.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_code_has_a_table() {
        for code in SUPPORTED_LANGUAGES {
            let table = string_table(code);
            assert!(!table.title.is_empty());
            assert_eq!(table.violations.len(), 6);
        }
    }

    #[test]
    fn unsupported_code_falls_back_to_default() {
        let fallback = string_table("xx");
        assert_eq!(fallback.title, string_table(DEFAULT_LANGUAGE).title);
    }

    #[test]
    fn canonical_code_is_static() {
        assert_eq!(canonical_code("en"), Some("en"));
        assert_eq!(canonical_code("EN"), None);
        assert_eq!(canonical_code("xx"), None);
    }
}
