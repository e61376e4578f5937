use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::lang::{language_cookie, safe_redirect_target, LanguageChoice};
use super::pages::{status_error_page, status_page, FormPage, PriceBlock, SubmitError};
use super::AppState;
use crate::checkout::CheckoutError;
use crate::registration::{deserialize_checkbox, validate, RegistrationForm};

#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

/// Accepts the same gala values as the form checkbox (`on`, `true`, ...).
#[derive(Debug, Default, Deserialize)]
pub struct PriceQuery {
    pub registration_option: Option<String>,
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    pub attend_gala_dinner: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct SwitchLanguageQuery {
    pub lang: Option<String>,
    pub redirect: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

fn html_page(choice: LanguageChoice, status: StatusCode, html: String) -> Response {
    choice.apply((status, Html(html)).into_response())
}

async fn price_for(state: &AppState, form: &RegistrationForm) -> PriceBlock {
    if form.category.trim().is_empty() {
        return PriceBlock::SelectCategory;
    }

    match state
        .client
        .registration_option(&form.category, form.attend_gala_dinner)
        .await
    {
        Ok(option) => PriceBlock::Loaded(option),
        Err(_) => PriceBlock::Failed,
    }
}

/// `GET /`: the registration form.
///
/// Any form fields in the query prefill the form; a selected category also
/// triggers a price lookup.
pub async fn form_page(
    State(state): State<AppState>,
    Query(lang): Query<LangQuery>,
    Query(form): Query<RegistrationForm>,
    headers: HeaderMap,
) -> Response {
    let choice = LanguageChoice::resolve(lang.lang.as_deref(), &headers, state.default_language);
    let price = price_for(&state, &form).await;

    let html = FormPage {
        language: choice.language,
        form: &form,
        errors: None,
        submit_error: None,
        price: &price,
        notice: None,
    }
    .render();

    html_page(choice, StatusCode::OK, html)
}

/// `POST /register`: validate, submit to the API and redirect to payment.
pub async fn submit_registration(
    State(state): State<AppState>,
    Query(lang): Query<LangQuery>,
    headers: HeaderMap,
    Form(form): Form<RegistrationForm>,
) -> Response {
    let choice = LanguageChoice::resolve(lang.lang.as_deref(), &headers, state.default_language);
    let strings = choice.language.strings();
    let today = chrono::Local::now().date_naive();

    if let Err(errors) = validate(&form, strings, today) {
        info!(invalid_fields = errors.len(), "Registration form rejected");
        let price = price_for(&state, &form).await;
        let html = FormPage {
            language: choice.language,
            form: &form,
            errors: Some(&errors),
            submit_error: None,
            price: &price,
            notice: None,
        }
        .render();
        return html_page(choice, StatusCode::UNPROCESSABLE_ENTITY, html);
    }

    match state.client.register(&form.to_request()).await {
        Ok(response) => {
            let payment_url = response
                .payment_url
                .as_deref()
                .and_then(|url| reqwest::Url::parse(url).ok())
                .filter(|url| matches!(url.scheme(), "http" | "https"));

            match payment_url {
                Some(url) => {
                    info!(user_id = ?response.user_id, "Registration accepted, redirecting to payment");
                    choice.apply(Redirect::to(url.as_str()).into_response())
                }
                None => {
                    warn!(user_id = ?response.user_id, "Registration accepted without a usable payment URL");
                    let empty = RegistrationForm::default();
                    let html = FormPage {
                        language: choice.language,
                        form: &empty,
                        errors: None,
                        submit_error: None,
                        price: &PriceBlock::SelectCategory,
                        notice: Some(strings.submit_success),
                    }
                    .render();
                    html_page(choice, StatusCode::OK, html)
                }
            }
        }
        Err(e) => {
            let status = submit_failure_status(&e);
            let submit_error = SubmitError {
                detail: e.user_message().map(str::to_string),
            };
            let price = price_for(&state, &form).await;
            let html = FormPage {
                language: choice.language,
                form: &form,
                errors: None,
                submit_error: Some(&submit_error),
                price: &price,
                notice: None,
            }
            .render();
            html_page(choice, status, html)
        }
    }
}

/// API rejections of the submitted data are the user's to fix; anything
/// else is an upstream failure.
fn submit_failure_status(error: &CheckoutError) -> StatusCode {
    match error.status() {
        Some(status) if (400..500).contains(&status) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// `GET /price`: JSON price lookup for a registration option.
pub async fn price(State(state): State<AppState>, Query(query): Query<PriceQuery>) -> Response {
    let option = query.registration_option.unwrap_or_default();
    if option.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                message: "registration_option is required".to_string(),
            }),
        )
            .into_response();
    }

    match state
        .client
        .registration_option(&option, query.attend_gala_dinner)
        .await
    {
        Ok(option) => Json(option).into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorBody {
                message: e
                    .user_message()
                    .unwrap_or("failed to load registration option")
                    .to_string(),
            }),
        )
            .into_response(),
    }
}

/// `GET /language`: store the chosen (or toggled) language and go back.
pub async fn switch_language(
    State(state): State<AppState>,
    Query(query): Query<SwitchLanguageQuery>,
    headers: HeaderMap,
) -> Response {
    let current = LanguageChoice::resolve(None, &headers, state.default_language).language;
    let target = query
        .lang
        .as_deref()
        .and_then(|code| crate::i18n::Language::from_code(code.trim()).ok())
        .unwrap_or_else(|| current.toggled());

    let mut response = Redirect::to(safe_redirect_target(query.redirect.as_deref())).into_response();
    response
        .headers_mut()
        .append(axum::http::header::SET_COOKIE, language_cookie(target));
    response
}

/// `GET /{id}`: registration and payment status.
pub async fn status(
    State(state): State<AppState>,
    Path(registration_id): Path<String>,
    Query(lang): Query<LangQuery>,
    headers: HeaderMap,
) -> Response {
    let choice = LanguageChoice::resolve(lang.lang.as_deref(), &headers, state.default_language);

    match state.client.registration_info(&registration_id).await {
        Ok(info) => html_page(choice, StatusCode::OK, status_page(choice.language, &info)),
        Err(e) => {
            let not_found = e.status() == Some(404);
            let status = if not_found {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::BAD_GATEWAY
            };
            html_page(
                choice,
                status,
                status_error_page(choice.language, &registration_id, not_found),
            )
        }
    }
}

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthBody { status: "ok" })
}
