//! Language registry: single source of truth for the languages the pages
//! can be rendered in.
//!
//! The registry is a process-wide singleton initialized on first access
//! with `OnceLock` and immutable afterwards.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "vi", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Vietnamese")
    pub name: &'static str,

    /// Native name, shown on the language switch (e.g., "Tiếng Việt")
    pub native_name: &'static str,

    /// Digit group separator used when formatting amounts
    pub thousands_separator: char,

    /// Whether this is the default and fallback language (exactly one)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "vi", "en")
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists, enabled or not
    /// * `None` if the code is not in the registry
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in registry order.
    ///
    /// # Returns
    /// The configurations with `enabled` set. The order is the order the
    /// language switch cycles through.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// Falls back to the first entry if no language is flagged as default.
    pub fn default_language(&self) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|lang| lang.is_default)
            .unwrap_or(&self.languages[0])
    }

    /// Check if a language code is supported and enabled.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code to check
    ///
    /// # Returns
    /// `true` only if the code is in the registry and enabled
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Vietnamese is the default; English is the alternative.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "vi",
            name: "Vietnamese",
            native_name: "Tiếng Việt",
            thousands_separator: '.',
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            thousands_separator: ',',
            is_default: false,
            enabled: true,
        },
    ]
}
