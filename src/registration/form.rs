use serde::{Deserialize, Deserializer};

use crate::checkout::RegistrationRequest;
use crate::i18n::LanguageStrings;

/// Registration type sent with every submission from this form.
pub const REGISTRATION_TYPE: &str = "Doctor";

/// Registration categories offered by the form, as (value, label) pairs.
/// The value doubles as the registration option key on the backend.
pub fn categories(strings: &LanguageStrings) -> [(&'static str, &'static str); 3] {
    [
        ("ENT Doctors", strings.category_ent),
        ("Student & Trainees", strings.category_student),
        ("Chairman & Speaker", strings.category_chairman),
    ]
}

/// Doctorate degrees offered by the form, as (value, label) pairs.
pub fn doctorate_degrees(strings: &LanguageStrings) -> [(&'static str, &'static str); 5] {
    [
        ("prof_md_phd", strings.doctorate_prof_md_phd),
        ("aprof_md_phd", strings.doctorate_aprof_md_phd),
        ("dr_md_phd", strings.doctorate_dr_md_phd),
        ("dr_md", strings.doctorate_dr_md),
        ("dr", strings.doctorate_dr),
    ]
}

pub const CATEGORY_VALUES: [&str; 3] = ["ENT Doctors", "Student & Trainees", "Chairman & Speaker"];

pub const DOCTORATE_VALUES: [&str; 5] = ["prof_md_phd", "aprof_md_phd", "dr_md_phd", "dr_md", "dr"];

/// Form fields in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Category,
    Nationality,
    Doctorate,
    FirstName,
    MiddleName,
    LastName,
    Dob,
    Institution,
    Email,
    Phone,
    Sponsor,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Category,
        Field::Nationality,
        Field::Doctorate,
        Field::FirstName,
        Field::MiddleName,
        Field::LastName,
        Field::Dob,
        Field::Institution,
        Field::Email,
        Field::Phone,
        Field::Sponsor,
    ];

    /// Form key and element id.
    pub fn name(self) -> &'static str {
        match self {
            Field::Category => "category",
            Field::Nationality => "nationality",
            Field::Doctorate => "doctorate",
            Field::FirstName => "first_name",
            Field::MiddleName => "middle_name",
            Field::LastName => "last_name",
            Field::Dob => "dob",
            Field::Institution => "institution",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Sponsor => "sponsor",
        }
    }

    pub fn label(self, strings: &LanguageStrings) -> &'static str {
        match self {
            Field::Category => strings.category_title,
            Field::Nationality => strings.nationality,
            Field::Doctorate => strings.doctorate_title,
            Field::FirstName => strings.first_name,
            Field::MiddleName => strings.middle_name,
            Field::LastName => strings.last_name,
            Field::Dob => strings.dob,
            Field::Institution => strings.institution,
            Field::Email => strings.email,
            Field::Phone => strings.phone,
            Field::Sponsor => strings.sponsor_title,
        }
    }
}

/// The registration form as submitted by the browser.
///
/// Every text field defaults to empty so a partially filled form still
/// deserializes and can be re-rendered with its errors.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub category: String,
    pub nationality: String,
    pub doctorate: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub dob: String,
    pub institution: String,
    pub email: String,
    pub phone: String,
    pub sponsor: String,
    #[serde(deserialize_with = "deserialize_checkbox")]
    pub attend_gala_dinner: bool,
}

impl RegistrationForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Category => &self.category,
            Field::Nationality => &self.nationality,
            Field::Doctorate => &self.doctorate,
            Field::FirstName => &self.first_name,
            Field::MiddleName => &self.middle_name,
            Field::LastName => &self.last_name,
            Field::Dob => &self.dob,
            Field::Institution => &self.institution,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Sponsor => &self.sponsor,
        }
    }

    /// Build the backend request body.
    ///
    /// The category is sent both as the registration category and as the
    /// registration option key.
    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            registration_category: Some(self.category.clone()),
            registration_option: Some(self.category.clone()),
            nationality: Some(self.nationality.clone()),
            doctorate_degree: Some(self.doctorate.clone()),
            first_name: Some(self.first_name.clone()),
            middle_name: Some(self.middle_name.clone()),
            last_name: Some(self.last_name.clone()),
            date_of_birth: Some(self.dob.clone()),
            institution: Some(self.institution.clone()),
            email: Some(self.email.clone()),
            phone_number: Some(self.phone.clone()),
            sponsor: Some(self.sponsor.clone()),
            attend_gala_dinner: self.attend_gala_dinner,
            registration_type: Some(REGISTRATION_TYPE.to_string()),
        }
    }
}

/// HTML checkboxes are absent when unchecked and send a value (usually
/// "on") when checked.
pub(crate) fn deserialize_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(
        value.as_deref().map(str::trim),
        Some("on") | Some("true") | Some("1") | Some("yes")
    ))
}
