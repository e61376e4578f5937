use anyhow::{Context, Result};

use crate::i18n::Language;

#[derive(Debug, Clone)]
pub struct Config {
    // Registration API
    pub api_url: String,
    pub api_timeout_ms: u64,

    // Server
    pub port: u16,

    // Language used when neither the query nor the cookie picks one
    pub default_language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = match std::env::var("DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(code.trim())
                .with_context(|| format!("DEFAULT_LANGUAGE is invalid: '{}'", code))?,
            Err(_) => Language::default(),
        };

        Ok(Self {
            // Registration API
            api_url: normalize_base_url(
                &std::env::var("API_URL").unwrap_or_else(|_| "https://api.example.com".to_string()),
            ),
            api_timeout_ms: std::env::var("API_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            default_language,
        })
    }
}

/// Strip trailing slashes so paths can be appended with a leading `/`.
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
