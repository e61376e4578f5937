//! Client for the remote registration API.
//!
//! Three endpoints are used:
//! - `POST /register` creates a registration and returns the payment link
//! - `GET /register/{id}/registration-info` returns a registration with its payment status
//! - `GET /register/option` prices a registration option

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use crate::config::Config;
use crate::retry::{with_retry_if, RetryConfig};

// ==================== DTOs ====================

/// Body of `POST /register`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub date_of_birth: Option<String>,
    pub doctorate_degree: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub institution: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub nationality: Option<String>,
    pub phone_number: Option<String>,
    pub registration_category: Option<String>,
    pub sponsor: Option<String>,
    pub attend_gala_dinner: bool,
    pub registration_type: Option<String>,
    pub registration_option: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub payment_url: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// A priced registration option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationOption {
    pub id: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subtype: String,
    pub fee_usd: f64,
    pub fee_vnd: f64,
    #[serde(default)]
    pub active: bool,
}

/// A registration as returned by `GET /register/{id}/registration-info`.
///
/// Personal fields default to empty so a sparse record still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationInfo {
    pub id: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub registration_option_id: String,
    #[serde(rename = "RegistrationOption")]
    pub registration_option: RegistrationOption,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub registration_category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nationality: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub doctorate_degree: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub middle_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_of_birth: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub institution: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sponsor: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub payment_status: String,
}

/// The API sends `null` for optional text it has no value for.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl RegistrationInfo {
    /// A payment status of `done` (any case) means the registration is paid.
    pub fn is_paid(&self) -> bool {
        self.payment_status.eq_ignore_ascii_case("done")
    }
}

// ==================== Errors ====================

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("request to registration API failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("registration API returned {status}: {body}")]
    Api {
        status: u16,
        /// The `message` field of the error body, if the API sent one
        message: Option<String>,
        body: String,
    },

    #[error("failed to decode registration API response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl CheckoutError {
    /// Transport failures, rate limiting and server errors are worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            CheckoutError::Request(_) => true,
            CheckoutError::Api { status, .. } => *status == 429 || *status >= 500,
            CheckoutError::Decode(_) => false,
        }
    }

    /// Message to show the user, when the API supplied one.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            CheckoutError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            CheckoutError::Api { status, .. } => Some(*status),
            CheckoutError::Request(e) | CheckoutError::Decode(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// Pull a human-readable message out of an API error body.
///
/// Accepts `{"message": "..."}` and `{"message": ["...", "..."]}`.
fn extract_api_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        serde_json::Value::String(message) if !message.trim().is_empty() => Some(message.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(|item| item.as_str()).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}

// ==================== Client ====================

/// HTTP client for the registration API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct CheckoutClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
}

impl CheckoutClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.api_timeout_ms))
            .build()
            .context("Failed to build registration API client")?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            retry: RetryConfig::api_call(),
        })
    }

    /// Override the retry policy used for reads.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Submit a registration. Not retried: the call is not idempotent.
    pub async fn register(
        &self,
        body: &RegistrationRequest,
    ) -> Result<RegisterResponse, CheckoutError> {
        let url = format!("{}/register", self.base_url);

        let result: Result<RegisterResponse, CheckoutError> = async {
            let response = self
                .http
                .post(&url)
                .json(body)
                .send()
                .await
                .map_err(CheckoutError::Request)?;
            decode(response).await
        }
        .await;

        if let Err(e) = &result {
            error!(error = %e, "Register failed");
        }
        result
    }

    /// Fetch a registration and its payment status.
    pub async fn registration_info(
        &self,
        registration_id: &str,
    ) -> Result<RegistrationInfo, CheckoutError> {
        let url = format!(
            "{}/register/{}/registration-info",
            self.base_url,
            urlencoding::encode(registration_id)
        );

        let result = self
            .get_with_retry(&url, &[], "Get registration info")
            .await;
        if let Err(e) = &result {
            error!(error = %e, registration_id, "Get registration info failed");
        }
        result
    }

    /// Price a registration option, with or without the gala dinner.
    pub async fn registration_option(
        &self,
        registration_option: &str,
        attend_gala_dinner: bool,
    ) -> Result<RegistrationOption, CheckoutError> {
        let url = format!("{}/register/option", self.base_url);
        let gala = if attend_gala_dinner { "true" } else { "false" };
        let query = [
            ("registration_option", registration_option),
            ("attend_gala_dinner", gala),
        ];

        let result = self
            .get_with_retry(&url, &query, "Get registration option")
            .await;
        if let Err(e) = &result {
            error!(error = %e, registration_option, attend_gala_dinner, "Get registration option failed");
        }
        result
    }

    async fn get_with_retry<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        operation_name: &str,
    ) -> Result<T, CheckoutError> {
        with_retry_if(
            &self.retry,
            operation_name,
            || async {
                debug!(url, "GET");
                let response = self
                    .http
                    .get(url)
                    .query(query)
                    .send()
                    .await
                    .map_err(CheckoutError::Request)?;
                decode(response).await
            },
            CheckoutError::is_retryable,
        )
        .await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CheckoutError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        return Err(CheckoutError::Api {
            status: status.as_u16(),
            message: extract_api_message(&body),
            body,
        });
    }

    response.json::<T>().await.map_err(CheckoutError::Decode)
}
