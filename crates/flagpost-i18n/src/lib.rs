pub mod detect;
pub mod strings;

pub use detect::{detect_language, primary_subtag, HostEnv};
pub use strings::{
    canonical_code, is_supported, string_table, StringTable, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES,
};

/// The resolved locale: code plus its string table. Constructed once at
/// startup and threaded explicitly through the components that render text;
/// replaced wholesale on a language change.
#[derive(Debug)]
pub struct LocaleState {
    pub code: &'static str,
    pub strings: &'static StringTable,
}

impl LocaleState {
    pub fn new(code: &str) -> Self {
        let code = canonical_code(code).unwrap_or(DEFAULT_LANGUAGE);
        Self {
            code,
            strings: string_table(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_state_falls_back_on_unsupported_code() {
        let state = LocaleState::new("xx");
        assert_eq!(state.code, DEFAULT_LANGUAGE);
        assert_eq!(state.strings.title, string_table(DEFAULT_LANGUAGE).title);
    }

    #[test]
    fn locale_state_keeps_supported_code() {
        let state = LocaleState::new("de");
        assert_eq!(state.code, "de");
        assert_eq!(state.strings.title, "Illegale Inhalte melden");
    }
}
