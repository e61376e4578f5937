//! Registration form model and field validation.

mod form;
mod validation;

pub use form::{
    categories, doctorate_degrees, Field, RegistrationForm, CATEGORY_VALUES, DOCTORATE_VALUES,
    REGISTRATION_TYPE,
};
pub(crate) use form::deserialize_checkbox;
pub use validation::{
    message_for, rule_for, validate, validate_field, FieldErrors, Pattern, ValidationRule,
};
