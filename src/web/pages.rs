//! Page rendering for the registration form and the checkout status page.

use std::fmt::Write;

use super::html::{escape_html, layout};
use crate::checkout::{RegistrationInfo, RegistrationOption};
use crate::i18n::{format_amount, Language, LanguageStrings};
use crate::registration::{
    categories, doctorate_degrees, rule_for, Field, FieldErrors, RegistrationForm,
};

/// State of the price block under the category selector.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceBlock {
    /// No category chosen yet
    SelectCategory,
    Loaded(RegistrationOption),
    Failed,
}

/// A failed submission, shown above the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitError {
    /// Backend message; the generic failure text is used when absent
    pub detail: Option<String>,
}

/// Everything the form page needs to render.
pub struct FormPage<'a> {
    pub language: Language,
    pub form: &'a RegistrationForm,
    pub errors: Option<&'a FieldErrors>,
    pub submit_error: Option<&'a SubmitError>,
    pub price: &'a PriceBlock,
    /// Shown instead of errors after an accepted submission
    pub notice: Option<&'a str>,
}

impl FormPage<'_> {
    fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.and_then(|errors| errors.get(field))
    }

    fn is_first_error(&self, field: Field) -> bool {
        self.errors.and_then(FieldErrors::first) == Some(field)
    }

    /// `aria-invalid`, error class and autofocus for a field.
    fn field_attributes(&self, field: Field) -> String {
        let mut attributes = String::new();
        if self.error(field).is_some() {
            attributes.push_str(" class=\"invalid\" aria-invalid=\"true\"");
        }
        if self.is_first_error(field) {
            attributes.push_str(" autofocus");
        }
        attributes
    }

    fn error_message(&self, field: Field) -> String {
        match self.error(field) {
            Some(message) => format!(
                "<div class=\"error\" id=\"{}-error\">{}</div>",
                field.name(),
                escape_html(message)
            ),
            None => String::new(),
        }
    }

    fn text_input(&self, field: Field, input_type: &str, placeholder: &str, extra: &str) -> String {
        format!(
            "<div>{label}\
<input type=\"{input_type}\" id=\"{name}\" name=\"{name}\" value=\"{value}\" placeholder=\"{placeholder}\"{attributes}{extra}>{error}</div>\n",
            name = field.name(),
            label = self.label(field),
            input_type = input_type,
            value = escape_html(self.form.value(field)),
            placeholder = escape_html(placeholder),
            attributes = self.field_attributes(field),
            extra = extra,
            error = self.error_message(field),
        )
    }

    /// Field label, with a marker on required fields.
    fn label(&self, field: Field) -> String {
        let strings = self.language.strings();
        let marker = if rule_for(field).required {
            format!(
                " <span class=\"required\" title=\"{0}\" aria-label=\"{0}\">*</span>",
                escape_html(strings.required)
            )
        } else {
            String::new()
        };
        format!(
            "<label for=\"{}\">{}{}</label>",
            field.name(),
            escape_html(field.label(strings)),
            marker
        )
    }

    fn select(&self, field: Field, options: &[(&'static str, &'static str)]) -> String {
        let strings = self.language.strings();
        let mut html = format!(
            "<div>{label}<select id=\"{name}\" name=\"{name}\"{attributes}>",
            label = self.label(field),
            name = field.name(),
            attributes = self.field_attributes(field),
        );
        html.push_str(&select_options(
            field.label(strings),
            options,
            self.form.value(field),
        ));
        html.push_str("</select>");
        html.push_str(&self.error_message(field));
        html.push_str("</div>\n");
        html
    }

    fn price_block(&self) -> String {
        let strings = self.language.strings();
        match self.price {
            PriceBlock::SelectCategory => format!(
                "<div class=\"price\"><h3>{}</h3><p>{}</p></div>",
                escape_html(strings.price_title),
                escape_html(strings.price_select_category)
            ),
            PriceBlock::Failed => format!(
                "<div class=\"price alert\"><strong>{}</strong><p>{}</p></div>",
                escape_html(strings.price_error_title),
                escape_html(strings.price_error_description)
            ),
            PriceBlock::Loaded(option) => {
                let total = if option.fee_vnd <= 0.0 && option.fee_usd <= 0.0 {
                    format!("<strong class=\"fee-free\">{}</strong>", escape_html(strings.total_free))
                } else {
                    format!(
                        "<strong class=\"fee-vnd\">{} VND</strong> (<span class=\"fee-usd\">${}</span>)",
                        format_amount(option.fee_vnd, self.language),
                        option.fee_usd
                    )
                };
                let gala_line = if self.form.attend_gala_dinner {
                    format!("<li>{}</li>", escape_html(strings.total_gala))
                } else {
                    String::new()
                };
                format!(
                    "<div class=\"price\"><h3>{title}</h3>\
<p>{subtype_label}: <strong>{subtype}</strong></p>\
<p>{total_title}: {total}</p>\
<p>{includes}</p><ul><li>{conference}</li>{gala}</ul></div>",
                    title = escape_html(strings.price_title),
                    subtype_label = escape_html(strings.price_subtype),
                    subtype = escape_html(&option.subtype),
                    total_title = escape_html(strings.total_title),
                    total = total,
                    includes = escape_html(strings.total_includes),
                    conference = escape_html(strings.total_conference),
                    gala = gala_line,
                )
            }
        }
    }

    fn submit_error_block(&self) -> String {
        let strings = self.language.strings();
        match self.submit_error {
            Some(error) => format!(
                "<div class=\"alert\" role=\"alert\"><strong>{}</strong><p>{}</p><p>{}</p></div>",
                escape_html(strings.api_error_title),
                escape_html(strings.api_error_description),
                escape_html(error.detail.as_deref().unwrap_or(strings.submit_error))
            ),
            None => String::new(),
        }
    }

    /// Fee lookup form. It is separate from the registration form so that
    /// only the category and gala choice end up in the GET query string.
    fn price_check_form(&self) -> String {
        let strings = self.language.strings();
        let mut html = format!(
            "<section><form method=\"get\" action=\"/\" class=\"price-check\">\
<label for=\"price-category\">{label}</label><select id=\"price-category\" name=\"category\">",
            label = escape_html(strings.category_title),
        );
        html.push_str(&select_options(
            strings.category_title,
            &categories(strings),
            &self.form.category,
        ));
        let _ = write!(
            html,
            "</select>\
<label><input type=\"checkbox\" id=\"price-gala\" name=\"attend_gala_dinner\" value=\"on\"{checked}> {gala}</label>\
<button type=\"submit\">{check}</button></form>\n{price}</section>\n",
            checked = if self.form.attend_gala_dinner { " checked" } else { "" },
            gala = escape_html(strings.gala_title),
            check = escape_html(strings.price_check),
            price = self.price_block(),
        );
        html
    }

    pub fn render(&self) -> String {
        let strings = self.language.strings();
        let mut content = String::new();

        content.push_str(&fee_table(strings));

        if let Some(notice) = self.notice {
            let _ = write!(
                content,
                "<section><div class=\"notice\" role=\"status\">{}</div></section>",
                escape_html(notice)
            );
        }

        content.push_str(&self.price_check_form());

        let _ = write!(
            content,
            "<section><h2>{}</h2><p>{}</p>\n<form method=\"post\" action=\"/register\" novalidate>\n",
            escape_html(strings.form_title),
            escape_html(strings.form_subtitle)
        );

        content.push_str(&self.select(Field::Category, &categories(strings)));
        content.push_str(&self.text_input(Field::Nationality, "text", strings.nationality, ""));
        content.push_str(&self.select(Field::Doctorate, &doctorate_degrees(strings)));
        content.push_str(&self.text_input(Field::FirstName, "text", strings.first_name, ""));
        content.push_str(&self.text_input(Field::MiddleName, "text", strings.middle_name, ""));
        content.push_str(&self.text_input(Field::LastName, "text", strings.last_name, ""));
        let max_date = format!(" max=\"{}\"", chrono::Local::now().date_naive().format("%Y-%m-%d"));
        content.push_str(&self.text_input(Field::Dob, "date", strings.dob, &max_date));
        content.push_str(&self.text_input(Field::Institution, "text", strings.institution, ""));
        content.push_str(&self.text_input(Field::Email, "email", strings.email, ""));
        content.push_str(&self.text_input(Field::Phone, "tel", strings.phone, ""));
        content.push_str(&self.text_input(Field::Sponsor, "text", strings.sponsor_placeholder, ""));
        let _ = write!(
            content,
            "<small>{}</small>\n",
            escape_html(strings.sponsor_subtitle)
        );

        let _ = write!(
            content,
            "<div><label><input type=\"checkbox\" name=\"attend_gala_dinner\" value=\"on\"{checked}> {title}</label><small>{subtitle}</small></div>\n",
            checked = if self.form.attend_gala_dinner { " checked" } else { "" },
            title = escape_html(strings.gala_title),
            subtitle = escape_html(strings.gala_subtitle),
        );

        content.push_str(&self.submit_error_block());
        let _ = write!(
            content,
            "\n<button type=\"submit\">{}</button>\n</form></section>",
            escape_html(strings.submit)
        );

        layout(self.language, strings.form_title, "/", &content)
    }
}

/// `<option>` list with an empty placeholder entry first.
fn select_options(placeholder: &str, options: &[(&'static str, &'static str)], selected: &str) -> String {
    let mut html = format!("<option value=\"\">{}</option>", escape_html(placeholder));
    for (value, label) in options {
        let _ = write!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            escape_html(value),
            if *value == selected { " selected" } else { "" },
            escape_html(label)
        );
    }
    html
}

/// The static fee schedule shown above the form.
fn fee_table(strings: &LanguageStrings) -> String {
    format!(
        "<section class=\"fees\"><table>\
<thead><tr><th>{title}</th>\
<th>{early}<br><small>{early_sub}</small></th>\
<th>{standard}<br><small>{standard_sub}</small></th>\
<th>{onsite}<br><small>{onsite_sub}</small></th></tr></thead>\
<tbody>\
<tr><td>{delegate}</td><td>{early_price}</td><td>{standard_price}</td><td>{onsite_price}</td></tr>\
<tr><td>{resident}</td><td colspan=\"3\">{resident_price}</td></tr>\
<tr><td>{gala}</td><td colspan=\"3\">{gala_price}</td></tr>\
</tbody></table><p><small>{note}</small></p></section>\n",
        title = escape_html(strings.fees_title),
        early = escape_html(strings.fees_early_title),
        early_sub = escape_html(strings.fees_early_subtitle),
        standard = escape_html(strings.fees_standard_title),
        standard_sub = escape_html(strings.fees_standard_subtitle),
        onsite = escape_html(strings.fees_onsite_title),
        onsite_sub = escape_html(strings.fees_onsite_subtitle),
        delegate = escape_html(strings.fees_delegate),
        early_price = escape_html(strings.fees_early_price),
        standard_price = escape_html(strings.fees_standard_price),
        onsite_price = escape_html(strings.fees_onsite_price),
        resident = escape_html(strings.fees_resident_title),
        resident_price = escape_html(strings.fees_resident_price),
        gala = escape_html(strings.fees_gala_title),
        gala_price = escape_html(strings.fees_gala_price),
        note = escape_html(strings.fees_note),
    )
}

// ==================== Checkout Status ====================

fn detail_row(label: &str, value: &str) -> String {
    format!(
        "<tr><th>{}</th><td>{}</td></tr>",
        escape_html(label),
        escape_html(value)
    )
}

/// Status page for a fetched registration.
pub fn status_page(language: Language, info: &RegistrationInfo) -> String {
    let strings = language.strings();
    let paid = info.is_paid();
    let (status_class, heading, status_label) = if paid {
        ("paid", strings.checkout_payment_success, strings.status_success)
    } else {
        ("unpaid", strings.checkout_payment_failed, strings.status_failed)
    };
    let option = &info.registration_option;
    let sponsor = if info.sponsor.trim().is_empty() {
        strings.not_available
    } else {
        info.sponsor.as_str()
    };

    let mut content = format!(
        "<section class=\"status\"><h2 class=\"{status_class}\">{heading}</h2>\
<p>{id_label}: <strong class=\"registration-id\">{id}</strong></p>\
<h3>{fees_title}</h3><p><span class=\"fee-usd\">${usd}</span> / <span class=\"fee-vnd\">{vnd} VND</span></p></section>\n",
        status_class = status_class,
        heading = escape_html(heading),
        id_label = escape_html(strings.checkout_registration_id),
        id = escape_html(&info.id),
        fees_title = escape_html(strings.fees_title),
        usd = option.fee_usd,
        vnd = format_amount(option.fee_vnd, language),
    );

    let _ = write!(
        content,
        "<section class=\"details\"><h2>{}</h2><p>{}</p><table>",
        escape_html(strings.checkout_title),
        escape_html(strings.checkout_subtitle)
    );
    for (label, value) in [
        (strings.last_name, info.last_name.as_str()),
        (strings.middle_name, info.middle_name.as_str()),
        (strings.first_name, info.first_name.as_str()),
        (strings.email, info.email.as_str()),
        (strings.phone, info.phone_number.as_str()),
        (strings.dob, info.date_of_birth.as_str()),
        (strings.nationality, info.nationality.as_str()),
        (strings.category_title, info.registration_category.as_str()),
        (strings.doctorate_title, info.doctorate_degree.as_str()),
        (strings.institution, info.institution.as_str()),
        (strings.sponsor_title, sponsor),
    ] {
        content.push_str(&detail_row(label, value));
    }
    let _ = write!(
        content,
        "<tr><th>{}</th><td class=\"{}\">{}</td></tr></table></section>",
        escape_html(strings.checkout_payment_status),
        status_class,
        escape_html(status_label)
    );

    layout(
        language,
        strings.checkout_title,
        &format!("/{}", info.id),
        &content,
    )
}

/// Status page when the registration could not be loaded.
///
/// `not_found` selects the "no information" text over the load-failure text.
pub fn status_error_page(language: Language, registration_id: &str, not_found: bool) -> String {
    let strings = language.strings();
    let message = if not_found {
        strings.checkout_no_info
    } else {
        strings.checkout_error
    };

    layout(
        language,
        strings.checkout_title,
        &format!("/{}", registration_id),
        &format!(
            "<section class=\"status\"><div class=\"alert\" role=\"alert\">{}</div></section>",
            escape_html(message)
        ),
    )
}
