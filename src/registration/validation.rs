//! Field rules for the registration form.

use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::form::{Field, RegistrationForm, CATEGORY_VALUES, DOCTORATE_VALUES};
use crate::i18n::LanguageStrings;

/// What a non-empty value must look like.
#[derive(Debug, Clone, Copy)]
pub enum Pattern {
    /// Letters and whitespace, 2 to 50 characters
    PersonName,
    Email,
    /// Digits, `+`, `-`, spaces and parentheses, 10 to 15 characters
    Phone,
    /// `YYYY-MM-DD`, not after today
    PastDate,
    /// One of a fixed set of option values
    OneOf(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct ValidationRule {
    pub required: bool,
    pub pattern: Option<Pattern>,
}

impl ValidationRule {
    const OPTIONAL: ValidationRule = ValidationRule {
        required: false,
        pattern: None,
    };

    const fn required(pattern: Option<Pattern>) -> ValidationRule {
        ValidationRule {
            required: true,
            pattern,
        }
    }
}

static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

fn name_regex() -> &'static Regex {
    NAME_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z\s]{2,50}$").expect("valid name pattern"))
}

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"))
}

fn phone_regex() -> &'static Regex {
    PHONE_REGEX.get_or_init(|| Regex::new(r"^[0-9+\-\s()]{10,15}$").expect("valid phone pattern"))
}

/// The rule attached to a field.
pub fn rule_for(field: Field) -> ValidationRule {
    match field {
        Field::Category => ValidationRule::required(Some(Pattern::OneOf(&CATEGORY_VALUES))),
        Field::Doctorate => ValidationRule::required(Some(Pattern::OneOf(&DOCTORATE_VALUES))),
        Field::FirstName | Field::LastName => ValidationRule::required(Some(Pattern::PersonName)),
        Field::Dob => ValidationRule::required(Some(Pattern::PastDate)),
        Field::Email => ValidationRule::required(Some(Pattern::Email)),
        Field::Phone => ValidationRule::required(Some(Pattern::Phone)),
        Field::Institution | Field::Nationality => ValidationRule::required(None),
        Field::MiddleName | Field::Sponsor => ValidationRule::OPTIONAL,
    }
}

/// Localized message shown when `field` fails. Optional fields have none.
pub fn message_for(field: Field, strings: &LanguageStrings) -> Option<&'static str> {
    match field {
        Field::Category => Some(strings.validation_category),
        Field::Nationality => Some(strings.validation_nationality),
        Field::Doctorate => Some(strings.validation_doctorate),
        Field::FirstName => Some(strings.validation_first_name),
        Field::LastName => Some(strings.validation_last_name),
        Field::Dob => Some(strings.validation_dob),
        Field::Institution => Some(strings.validation_institution),
        Field::Email => Some(strings.validation_email),
        Field::Phone => Some(strings.validation_phone),
        Field::MiddleName | Field::Sponsor => None,
    }
}

fn matches(pattern: Pattern, value: &str, today: NaiveDate) -> bool {
    match pattern {
        Pattern::PersonName => name_regex().is_match(value),
        Pattern::Email => email_regex().is_match(value),
        Pattern::Phone => phone_regex().is_match(value),
        Pattern::PastDate => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map(|date| date <= today)
            .unwrap_or(false),
        Pattern::OneOf(options) => options.contains(&value),
    }
}

/// Per-field validation errors, ordered as the fields appear on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The first invalid field in display order.
    pub fn first(&self) -> Option<Field> {
        self.0.keys().next().copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Check a single value against its field's rule.
///
/// Required fields fail when blank after trimming; non-empty values fail
/// when they do not match the pattern.
pub fn validate_field(
    field: Field,
    value: &str,
    strings: &LanguageStrings,
    today: NaiveDate,
) -> Result<(), &'static str> {
    let rule = rule_for(field);
    let Some(message) = message_for(field, strings) else {
        return Ok(());
    };

    if rule.required && value.trim().is_empty() {
        return Err(message);
    }

    match rule.pattern {
        Some(pattern) if !value.is_empty() && !matches(pattern, value, today) => Err(message),
        _ => Ok(()),
    }
}

/// Validate every field of the form as of `today`.
pub fn validate(
    form: &RegistrationForm,
    strings: &LanguageStrings,
    today: NaiveDate,
) -> Result<(), FieldErrors> {
    let mut errors = BTreeMap::new();

    for field in Field::ALL {
        if let Err(message) = validate_field(field, form.value(field), strings, today) {
            errors.insert(field, message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FieldErrors(errors))
    }
}
