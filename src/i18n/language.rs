//! Language type: a code validated against the registry.

use crate::i18n::strings::{ENGLISH_STRINGS, VIETNAMESE_STRINGS};
use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings};
use anyhow::{bail, Result};

/// A validated language.
///
/// Only codes present and enabled in the registry can be turned into a
/// `Language`, so lookups through it never miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "vi", "en")
    code: &'static str,
}

impl Language {
    pub const VIETNAMESE: Language = Language { code: "vi" };

    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - ISO 639-1 code as found in a query parameter, cookie or
    ///   environment variable; it is matched exactly
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is known and enabled
    /// * `Err` if the code is unknown or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the registry entry for this language.
    ///
    /// Falls back to the default language's entry if the code has been
    /// removed from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        let registry = LanguageRegistry::get();
        registry
            .get_by_code(self.code)
            .unwrap_or_else(|| registry.default_language())
    }

    /// English name of the language (e.g., "Vietnamese").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "Tiếng Việt").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// The language the switch button leads to.
    ///
    /// # Returns
    /// The next enabled language in registry order, wrapping around. With
    /// Vietnamese and English enabled this flips between the two. A language
    /// that is no longer enabled toggles to the default.
    pub fn toggled(&self) -> Language {
        let enabled = LanguageRegistry::get().list_enabled();
        let position = enabled.iter().position(|lang| lang.code == self.code);

        match position {
            Some(index) => Language {
                code: enabled[(index + 1) % enabled.len()].code,
            },
            None => Language::default(),
        }
    }

    /// Localized strings for this language.
    ///
    /// # Returns
    /// The static string table for this language. Languages without their
    /// own table get the default (Vietnamese) one.
    pub fn strings(&self) -> &'static LanguageStrings {
        match self.code {
            "en" => &ENGLISH_STRINGS,
            _ => &VIETNAMESE_STRINGS,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language {
            code: LanguageRegistry::get().default_language().code,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_vietnamese_constant() {
        let vietnamese = Language::VIETNAMESE;
        assert_eq!(vietnamese.code(), "vi");
        assert_eq!(vietnamese.name(), "Vietnamese");
        assert!(vietnamese.is_default());
    }

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.native_name(), "English");
        assert!(!english.is_default());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_known() {
        assert_eq!(Language::from_code("vi").unwrap(), Language::VIETNAMESE);
        assert_eq!(Language::from_code("en").unwrap(), Language::ENGLISH);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("EN").is_err());
        assert!(Language::from_code("").is_err());
    }

    // ==================== Default and Toggle Tests ====================

    #[test]
    fn test_default_is_vietnamese() {
        assert_eq!(Language::default(), Language::VIETNAMESE);
    }

    #[test]
    fn test_toggle_switches_between_languages() {
        assert_eq!(Language::VIETNAMESE.toggled(), Language::ENGLISH);
        assert_eq!(Language::ENGLISH.toggled(), Language::VIETNAMESE);
    }

    #[test]
    fn test_toggle_button_label_is_target_native_name() {
        assert_eq!(Language::VIETNAMESE.toggled().native_name(), "English");
        assert_eq!(Language::ENGLISH.toggled().native_name(), "Tiếng Việt");
    }

    // ==================== Strings Tests ====================

    #[test]
    fn test_strings_per_language() {
        assert_eq!(Language::ENGLISH.strings().form_title, "Registration Form");
        assert_eq!(Language::VIETNAMESE.strings().form_title, "Đăng Ký Tham Dự");
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::ENGLISH.to_string(), "en");
    }
}
