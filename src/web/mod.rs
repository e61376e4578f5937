//! HTTP surface: routes, shared state, language negotiation and HTML pages.

mod handlers;
mod html;
mod lang;
mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::checkout::CheckoutClient;
use crate::config::Config;
use crate::i18n::Language;

pub use html::escape_html;
pub use lang::{cookie_language, language_cookie, safe_redirect_target, LanguageChoice, LANGUAGE_COOKIE};
pub use pages::{status_error_page, status_page, FormPage, PriceBlock, SubmitError};

#[derive(Clone)]
pub struct AppState {
    pub client: CheckoutClient,
    pub default_language: Language,
}

impl AppState {
    pub fn new(config: &Config, client: CheckoutClient) -> Self {
        Self {
            client,
            default_language: config.default_language,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::form_page))
        .route("/register", post(handlers::submit_registration))
        .route("/price", get(handlers::price))
        .route("/language", get(handlers::switch_language))
        .route("/health", get(handlers::health))
        .route("/:id", get(handlers::status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
