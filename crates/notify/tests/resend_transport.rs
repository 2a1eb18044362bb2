//! Resend transport against a wiremock server.

use aimterior_notify::config::ResendConfig;
use aimterior_notify::{DeliveryReceipt, MailError, MailTransport, OutgoingEmail, ResendTransport};
use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport(server: &MockServer) -> ResendTransport {
    ResendTransport::new(ResendConfig {
        api_key: "re_test_key".into(),
        base_url: server.uri(),
    })
    .expect("client builds")
}

fn email() -> OutgoingEmail {
    OutgoingEmail {
        from: "onboarding@resend.dev".into(),
        to: "info@aimterior.com".into(),
        reply_to: "client@example.com".into(),
        subject: "Quote Request - General Consultation from Customer".into(),
        text: "Hello AIMTERIOR Team".into(),
        html: "<p>Hello AIMTERIOR Team</p>".into(),
    }
}

#[tokio::test]
async fn posts_message_and_returns_provider_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("authorization", "Bearer re_test_key"))
        .and(body_partial_json(json!({
            "from": "onboarding@resend.dev",
            "to": ["info@aimterior.com"],
            "reply_to": "client@example.com",
            "subject": "Quote Request - General Consultation from Customer",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "4ef9a417"})))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = transport(&server).send(&email()).await.unwrap();
    assert_eq!(
        receipt,
        DeliveryReceipt {
            id: Some("4ef9a417".into())
        }
    );
}

#[tokio::test]
async fn api_rejection_surfaces_provider_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "statusCode": 422,
            "name": "validation_error",
            "message": "Invalid `from` field."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = transport(&server).send(&email()).await.unwrap_err();
    assert_matches!(
        err,
        MailError::Api { status: 422, ref message } if message == "Invalid `from` field."
    );
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_status_reason() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = transport(&server).send(&email()).await.unwrap_err();
    assert_matches!(
        err,
        MailError::Api { status: 503, ref message } if message == "Service Unavailable"
    );
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let transport = ResendTransport::new(ResendConfig {
        api_key: "re_test_key".into(),
        base_url: format!("{}/", server.uri()),
    })
    .unwrap();

    let receipt = transport.send(&email()).await.unwrap();
    assert_eq!(receipt.id.as_deref(), Some("abc"));
}
