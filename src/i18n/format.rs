//! Locale-aware number formatting for fee amounts.

use crate::i18n::Language;

/// Format an amount with the language's digit grouping, rounded to a whole
/// number (e.g. `1800000` -> `1.800.000` in Vietnamese, `1,800,000` in English).
pub fn format_amount(value: f64, language: Language) -> String {
    let separator = language.config().thousands_separator;
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
