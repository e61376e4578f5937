//! Internationalization (i18n) for the registration pages.
//!
//! # Architecture
//!
//! - `registry`: the supported languages and their metadata (Vietnamese is the default)
//! - `language`: validated `Language` type
//! - `strings`: every user-facing string, one table per language
//! - `format`: locale-aware amount formatting
//!
//! # Example
//!
//! ```rust
//! use conference_registration::i18n::Language;
//!
//! let english = Language::from_code("en").unwrap();
//! assert_eq!(english.strings().submit, "Go to payment");
//! assert_eq!(english.toggled(), Language::VIETNAMESE);
//! ```

mod format;
mod language;
mod registry;
mod strings;

pub use format::format_amount;
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LanguageStrings;
