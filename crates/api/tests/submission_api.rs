mod common;

use std::sync::Arc;

use aimterior_api::config::Environment;
use aimterior_api::error::EMAIL_FAILURE_MESSAGE;
use axum::http::StatusCode;
use common::{
    body_json, build_test_app, build_test_app_with, post_json, post_raw, test_pool,
    RecordingTransport,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_without_full_name_is_rejected_before_sending() {
    let (app, transport) = build_test_app(test_pool().await);

    let response = post_json(app, "/api/contact", json!({ "email": "ada@example.com" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Email and full name are required");
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn contact_with_empty_strings_counts_as_missing() {
    let (app, transport) = build_test_app(test_pool().await);

    let response = post_json(
        app,
        "/api/contact",
        json!({ "email": "", "fullName": "Ada Lovelace" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn contact_success_sends_one_email() {
    let (app, transport) = build_test_app(test_pool().await);

    let response = post_json(
        app,
        "/api/contact",
        json!({
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "phoneNumber": "+44 20 7946 0000",
            "interest": "office-design",
            "message": "We need a new studio layout."
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Contact form submitted successfully");

    assert_eq!(transport.calls(), 1);
    let sent = transport.sent();
    assert_eq!(sent[0].to, "info@aimterior.com");
    assert_eq!(sent[0].from, "onboarding@resend.dev");
    assert_eq!(sent[0].reply_to, "ada@example.com");
    assert_eq!(sent[0].subject, "Contact Form - Office Design from Ada Lovelace");
    assert!(sent[0].text.contains("We need a new studio layout."));
    assert!(sent[0].html.contains("We need a new studio layout."));
}

// ---------------------------------------------------------------------------
// Quote
// ---------------------------------------------------------------------------

#[tokio::test]
async fn quote_with_only_email_is_accepted() {
    let (app, transport) = build_test_app(test_pool().await);

    let response = post_json(app, "/api/quote", json!({ "email": "bo@example.com" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Quote request submitted successfully");

    assert_eq!(transport.calls(), 1);
    let sent = transport.sent();
    assert_eq!(
        sent[0].subject,
        "Quote Request - General Consultation from Customer"
    );
    assert!(sent[0].text.contains("- Full Name: Not provided"));
    assert!(sent[0].text.contains("- Phone: Not provided"));
}

#[tokio::test]
async fn quote_without_email_is_rejected() {
    let (app, transport) = build_test_app(test_pool().await);

    let response = post_json(app, "/api/quote", json!({ "fullName": "Bo" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Email is required");
    assert_eq!(transport.calls(), 0);
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn provider_failure_returns_500_with_single_line_details() {
    let transport = Arc::new(RecordingTransport::failing("provider exploded\nstack trace"));
    let app = build_test_app_with(
        test_pool().await,
        Arc::clone(&transport),
        Environment::Development,
    );

    let response = post_json(
        app,
        "/api/contact",
        json!({ "fullName": "Ada", "email": "ada@example.com" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(transport.calls(), 1);

    let body = body_json(response).await;
    assert_eq!(body["error"], EMAIL_FAILURE_MESSAGE);
    assert_eq!(body["code"], "EMAIL_DELIVERY_FAILED");

    let details = body["details"].as_str().unwrap();
    assert!(details.contains("provider exploded"));
    assert!(!details.contains('\n'));
    assert!(!details.contains("stack trace"));
}

#[tokio::test]
async fn malformed_json_is_rejected_without_sending() {
    let (app, transport) = build_test_app(test_pool().await);

    let response = post_raw(app, "/api/contact", "{\"email\": ".to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(transport.calls(), 0);
}
