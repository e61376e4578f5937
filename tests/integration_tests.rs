//! Integration tests for the conference registration service
//!
//! These drive the full router with `tower::ServiceExt::oneshot` against a
//! mocked registration API.

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::{
    matchers::{body_partial_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use conference_registration::{
    checkout::CheckoutClient,
    config::Config,
    i18n::Language,
    retry::RetryConfig,
    web::{self, AppState},
};

// ==================== Test Helpers ====================

fn create_test_config(api_url: &str) -> Config {
    Config {
        api_url: api_url.to_string(),
        api_timeout_ms: 2_000,
        port: 8080,
        default_language: Language::VIETNAMESE,
    }
}

fn app(server: &MockServer) -> Router {
    let config = create_test_config(&server.uri());
    let client = CheckoutClient::new(&config)
        .expect("client should build")
        .with_retry(RetryConfig::new(2, Duration::from_millis(5)));
    web::router(AppState::new(&config, client))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn option_json(subtype: &str, fee_usd: u32, fee_vnd: u64) -> serde_json::Value {
    serde_json::json!({
        "id": "opt-1",
        "createdAt": "2025-01-01T00:00:00.000Z",
        "updatedAt": "2025-01-01T00:00:00.000Z",
        "category": "ENT Doctors",
        "subtype": subtype,
        "fee_usd": fee_usd,
        "fee_vnd": fee_vnd,
        "active": true
    })
}

fn info_json(status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "reg-42",
        "createdAt": "2025-02-01T00:00:00.000Z",
        "updatedAt": "2025-02-01T00:00:00.000Z",
        "registration_option_id": "opt-1",
        "RegistrationOption": option_json("Standard", 120, 3_000_000),
        "registration_category": "ENT Doctors",
        "nationality": "Vietnam",
        "doctorate_degree": "dr_md",
        "first_name": "Lan",
        "middle_name": "Thi",
        "last_name": "Nguyen",
        "date_of_birth": "1985-04-12",
        "institution": "Cho Ray Hospital",
        "email": "lan@example.com",
        "phone_number": "0912345678",
        "sponsor": null,
        "payment_status": status
    })
}

const VALID_FORM: &str = "category=ENT+Doctors&nationality=Vietnam&doctorate=dr_md\
&first_name=Lan&middle_name=&last_name=Nguyen&dob=1985-04-12\
&institution=Cho+Ray+Hospital&email=lan%40example.com&phone=0912345678&sponsor=\
&attend_gala_dinner=on";

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

// ==================== Form Page ====================

#[tokio::test]
async fn test_form_page_defaults_to_vietnamese() {
    let server = MockServer::start().await;

    let response = app(&server).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let html = body_text(response).await;
    assert!(html.contains("<html lang=\"vi\">"));
    assert!(html.contains("Đăng Ký Tham Dự"));
    assert!(html.contains("Vui lòng chọn loại đăng ký"));
}

#[tokio::test]
async fn test_form_page_lang_query_sets_cookie() {
    let server = MockServer::start().await;

    let response = app(&server).oneshot(get("/?lang=en")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("cookie should be set")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("lang=en"));

    let html = body_text(response).await;
    assert!(html.contains("Registration Form"));
}

#[tokio::test]
async fn test_form_page_uses_language_cookie() {
    let server = MockServer::start().await;

    let request = Request::get("/")
        .header(header::COOKIE, "lang=en")
        .body(Body::empty())
        .unwrap();
    let response = app(&server).oneshot(request).await.unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Go to payment"));
}

#[tokio::test]
async fn test_form_page_fetches_price_for_selected_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/register/option"))
        .and(query_param("registration_option", "ENT Doctors"))
        .and(query_param("attend_gala_dinner", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(option_json("Early Bird", 172, 4_300_000)))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(get("/?lang=en&category=ENT+Doctors&attend_gala_dinner=on"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Early Bird"));
    assert!(html.contains("4,300,000 VND"));
    assert!(html.contains("<option value=\"ENT Doctors\" selected>"));
}

#[tokio::test]
async fn test_form_page_price_failure_is_shown_inline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/register/option"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(get("/?lang=en&category=ENT+Doctors"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Error Loading Price"));
}

// ==================== Submission ====================

#[tokio::test]
async fn test_submit_valid_form_redirects_to_payment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_partial_json(serde_json::json!({
            "registration_category": "ENT Doctors",
            "registration_option": "ENT Doctors",
            "registration_type": "Doctor",
            "email": "lan@example.com",
            "attend_gala_dinner": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "payment_url": "https://pay.example.com/checkout?token=abc",
            "user_id": "reg-42"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(post_form("/register", VALID_FORM))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://pay.example.com/checkout?token=abc"
    );
}

#[tokio::test]
async fn test_submit_invalid_form_does_not_call_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let body = "category=ENT+Doctors&first_name=L&email=not-an-email&institution=X";
    let request = Request::post("/register")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, "lang=en")
        .body(Body::from(body))
        .unwrap();
    Mock::given(method("GET"))
        .and(path("/register/option"))
        .respond_with(ResponseTemplate::new(200).set_body_json(option_json("Standard", 120, 3_000_000)))
        .mount(&server)
        .await;

    let response = app(&server).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains("First name must be 2-50 letters"));
    assert!(html.contains("Please enter a valid email address"));
    assert!(html.contains("Please enter a valid phone number"));
    assert!(!html.contains("Please enter your institution"));
    // Submitted values are kept
    assert!(html.contains("value=\"not-an-email\""));
}

#[tokio::test]
async fn test_submit_shows_backend_message_on_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "statusCode": 409,
            "message": "Email already registered"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/register/option"))
        .respond_with(ResponseTemplate::new(200).set_body_json(option_json("Standard", 120, 3_000_000)))
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(post_form("/register?lang=en", VALID_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains("Error occurred!"));
    assert!(html.contains("Email already registered"));
    assert!(html.contains("value=\"Cho Ray Hospital\""));
}

#[tokio::test]
async fn test_submit_upstream_failure_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/register/option"))
        .respond_with(ResponseTemplate::new(200).set_body_json(option_json("Standard", 120, 3_000_000)))
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(post_form("/register?lang=en", VALID_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let html = body_text(response).await;
    assert!(html.contains("Registration failed. Please try again."));
}

#[tokio::test]
async fn test_submit_without_payment_url_shows_notice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "payment_url": "not a url",
            "user_id": "reg-42"
        })))
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(post_form("/register?lang=en", VALID_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Registration successful!"));
    assert!(!html.contains("value=\"Cho Ray Hospital\""));
}

// ==================== Price Endpoint ====================

#[tokio::test]
async fn test_price_endpoint_proxies_option() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/register/option"))
        .and(query_param("registration_option", "Chairman & Speaker"))
        .and(query_param("attend_gala_dinner", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(option_json("Speaker", 0, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(get(
            "/price?registration_option=Chairman+%26+Speaker&attend_gala_dinner=false",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["subtype"], "Speaker");
    assert_eq!(json["createdAt"], "2025-01-01T00:00:00.000Z");
}

#[tokio::test]
async fn test_price_endpoint_accepts_checkbox_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/register/option"))
        .and(query_param("registration_option", "ENT Doctors"))
        .and(query_param("attend_gala_dinner", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(option_json("Early Bird", 172, 4_300_000)))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(get("/price?registration_option=ENT+Doctors&attend_gala_dinner=on"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["subtype"], "Early Bird");
}

#[tokio::test]
async fn test_price_endpoint_requires_option() {
    let server = MockServer::start().await;

    let response = app(&server).oneshot(get("/price")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_price_endpoint_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/register/option"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(get("/price?registration_option=ENT+Doctors"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

// ==================== Language Switch ====================

#[tokio::test]
async fn test_language_switch_toggles_and_redirects() {
    let server = MockServer::start().await;

    let request = Request::get("/language?redirect=%2Freg-42")
        .header(header::COOKIE, "lang=vi")
        .body(Body::empty())
        .unwrap();
    let response = app(&server).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/reg-42");
    let cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("lang=en"));
}

#[tokio::test]
async fn test_language_switch_rejects_external_redirect() {
    let server = MockServer::start().await;

    let response = app(&server)
        .oneshot(get("/language?lang=vi&redirect=https%3A%2F%2Fevil.example.com"))
        .await
        .unwrap();

    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    let cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("lang=vi"));
}

#[tokio::test]
async fn test_language_switch_rejects_control_characters_in_redirect() {
    let server = MockServer::start().await;

    for uri in [
        "/language?lang=en&redirect=%2F%09%2Fevil.example.com",
        "/language?lang=en&redirect=%2F%0A%2Fevil.example.com",
        "/language?lang=en&redirect=%2Ffoo%0Abar",
    ] {
        let response = app(&server).oneshot(get(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", uri);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/", "{}", uri);
    }
}

// ==================== Status Page ====================

#[tokio::test]
async fn test_status_page_paid_registration() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/register/reg-42/registration-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(info_json("Done")))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(&server).oneshot(get("/reg-42?lang=en")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Payment Successful"));
    assert!(html.contains("$120"));
    assert!(html.contains("3,000,000 VND"));
    assert!(html.contains("Cho Ray Hospital"));
    assert!(html.contains("<td>N/A</td>"));
}

#[tokio::test]
async fn test_status_page_unpaid_registration() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/register/reg-42/registration-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(info_json("pending")))
        .mount(&server)
        .await;

    let response = app(&server).oneshot(get("/reg-42")).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Thanh toán thất bại"));
    assert!(html.contains("3.000.000 VND"));
}

#[tokio::test]
async fn test_status_page_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/register/unknown/registration-info"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let response = app(&server).oneshot(get("/unknown?lang=en")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("No registration information found"));
}

#[tokio::test]
async fn test_status_page_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/register/reg-42/registration-info"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let response = app(&server).oneshot(get("/reg-42?lang=en")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(response).await;
    assert!(html.contains("Failed to load registration information"));
}

// ==================== Health ====================

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;

    let response = app(&server).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, r#"{"status":"ok"}"#);
}
