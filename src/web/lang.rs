//! Per-request language selection and its cookie.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;

use crate::i18n::Language;

pub const LANGUAGE_COOKIE: &str = "lang";

/// One year, in seconds.
const COOKIE_MAX_AGE: u32 = 31_536_000;

/// The language a response is rendered in, and whether the choice came
/// from the query string and should be written back as a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageChoice {
    pub language: Language,
    pub persist: bool,
}

impl LanguageChoice {
    /// Resolve in order: `lang` query parameter, `lang` cookie, default.
    /// Unknown codes are ignored at every step.
    pub fn resolve(query_lang: Option<&str>, headers: &HeaderMap, default: Language) -> Self {
        if let Some(language) = query_lang.and_then(|code| Language::from_code(code.trim()).ok()) {
            return Self {
                language,
                persist: true,
            };
        }

        let language = cookie_language(headers).unwrap_or(default);
        Self {
            language,
            persist: false,
        }
    }

    /// Add the language cookie to `response` when the choice should persist.
    pub fn apply(&self, mut response: Response) -> Response {
        if self.persist {
            response
                .headers_mut()
                .append(SET_COOKIE, language_cookie(self.language));
        }
        response
    }
}

/// Language stored in the `lang` cookie, if it names an enabled language.
pub fn cookie_language(headers: &HeaderMap) -> Option<Language> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(name, _)| *name == LANGUAGE_COOKIE)
        .find_map(|(_, value)| Language::from_code(value.trim()).ok())
}

pub fn language_cookie(language: Language) -> HeaderValue {
    // Language codes are plain ASCII, so this is always a valid header value
    HeaderValue::from_str(&format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        LANGUAGE_COOKIE,
        language.code(),
        COOKIE_MAX_AGE
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("lang=vi; Path=/"))
}

/// Only same-site absolute paths are accepted as redirect targets.
///
/// Browsers drop tabs and newlines from URLs, so `/\t/host` would turn into
/// the protocol-relative `//host`; any control character rejects the target.
/// The result is always a valid `Location` header value.
pub fn safe_redirect_target(target: Option<&str>) -> &str {
    match target {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control)
                && HeaderValue::from_str(path).is_ok() =>
        {
            path
        }
        _ => "/",
    }
}
