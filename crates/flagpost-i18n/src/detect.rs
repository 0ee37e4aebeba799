use flagpost_core::consts::LANGUAGE_STORAGE_KEY;
use flagpost_core::Storage;
use flagpost_dom::Document;
use serde::Deserialize;

use crate::strings::{canonical_code, DEFAULT_LANGUAGE};

/// Locale signals of the runtime environment: the primary locale and the
/// ordered preference list (`navigator.language` / `navigator.languages`
/// equivalents).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostEnv {
    pub language: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// `en-US` → `en`. Region subtags never select a table on their own.
pub fn primary_subtag(code: &str) -> String {
    code.split(['-', '_'])
        .next()
        .unwrap_or(code)
        .trim()
        .to_lowercase()
}

/// Resolves the active language code, first match wins:
/// forced code → persisted choice → environment primary locale →
/// environment preference list → document `lang` attribute → default.
pub fn detect_language(
    forced: Option<&str>,
    env: &HostEnv,
    storage: &dyn Storage,
    doc: &Document,
) -> &'static str {
    if let Some(code) = forced.and_then(canonical_code) {
        return code;
    }

    if let Some(code) = storage
        .get(LANGUAGE_STORAGE_KEY)
        .as_deref()
        .and_then(canonical_code)
    {
        return code;
    }

    if let Some(code) = env
        .language
        .as_deref()
        .map(|l| primary_subtag(l))
        .as_deref()
        .and_then(canonical_code)
    {
        return code;
    }

    for preference in &env.languages {
        if let Some(code) = canonical_code(&primary_subtag(preference)) {
            return code;
        }
    }

    if let Some(code) = doc
        .document_lang()
        .map(|l| primary_subtag(&l))
        .as_deref()
        .and_then(canonical_code)
    {
        return code;
    }

    DEFAULT_LANGUAGE
}

#[cfg(test)]
mod tests {
    use super::*;
    use flagpost_core::MemoryStorage;

    fn doc(lang: Option<&str>) -> Document {
        let html = match lang {
            Some(l) => format!("<html lang=\"{}\"><body></body></html>", l),
            None => "<html><body></body></html>".to_string(),
        };
        Document::parse(&html).unwrap()
    }

    #[test]
    fn forced_supported_code_wins_over_everything() {
        let storage = MemoryStorage::new();
        storage.set(LANGUAGE_STORAGE_KEY, "en");
        let env = HostEnv {
            language: Some("fr".into()),
            languages: vec!["de".into()],
        };
        assert_eq!(
            detect_language(Some("es"), &env, &storage, &doc(Some("de"))),
            "es"
        );
    }

    #[test]
    fn forced_unsupported_code_is_ignored() {
        let storage = MemoryStorage::new();
        storage.set(LANGUAGE_STORAGE_KEY, "en");
        let env = HostEnv::default();
        assert_eq!(
            detect_language(Some("xx"), &env, &storage, &doc(None)),
            "en"
        );
    }

    #[test]
    fn persisted_choice_beats_environment() {
        let storage = MemoryStorage::new();
        storage.set(LANGUAGE_STORAGE_KEY, "de");
        let env = HostEnv {
            language: Some("fr".into()),
            languages: vec![],
        };
        assert_eq!(detect_language(None, &env, &storage, &doc(None)), "de");
    }

    #[test]
    fn primary_locale_reduces_region_tag() {
        let env = HostEnv {
            language: Some("en-US".into()),
            languages: vec![],
        };
        assert_eq!(
            detect_language(None, &env, &MemoryStorage::new(), &doc(None)),
            "en"
        );
    }

    #[test]
    fn preference_list_takes_first_supported_entry() {
        let env = HostEnv {
            language: Some("ja".into()),
            languages: vec!["ko-KR".into(), "fr-CA".into(), "en".into()],
        };
        assert_eq!(
            detect_language(None, &env, &MemoryStorage::new(), &doc(None)),
            "fr"
        );
    }

    #[test]
    fn document_lang_attribute_is_last_resort_before_default() {
        let env = HostEnv::default();
        assert_eq!(
            detect_language(None, &env, &MemoryStorage::new(), &doc(Some("de-AT"))),
            "de"
        );
        assert_eq!(
            detect_language(None, &env, &MemoryStorage::new(), &doc(None)),
            DEFAULT_LANGUAGE
        );
    }
}
