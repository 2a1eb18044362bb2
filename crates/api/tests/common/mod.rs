#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use aimterior_api::config::{Environment, ServerConfig};
use aimterior_api::router::build_app_router;
use aimterior_api::state::AppState;
use aimterior_core::interest::InterestCatalog;
use aimterior_db::DbPool;
use aimterior_notify::{DeliveryReceipt, Dispatcher, MailError, MailTransport, OutgoingEmail};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(environment: Environment) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        environment,
    }
}

/// Fresh in-memory database with migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = aimterior_db::create_pool("sqlite::memory:")
        .await
        .expect("in-memory pool");
    aimterior_db::run_migrations(&pool)
        .await
        .expect("migrations");
    pool
}

/// Run a raw seed statement.
pub async fn seed(pool: &DbPool, sql: &str) {
    sqlx::query(sql)
        .execute(pool)
        .await
        .unwrap_or_else(|e| panic!("seed failed: {e}\n{sql}"));
}

// ---------------------------------------------------------------------------
// Mail transport double
// ---------------------------------------------------------------------------

/// Transport that records every call instead of talking to a provider.
#[derive(Default)]
pub struct RecordingTransport {
    calls: AtomicUsize,
    sent: Mutex<Vec<OutgoingEmail>>,
    failure: Option<String>,
}

impl RecordingTransport {
    /// A transport whose every send is rejected by the "provider" with
    /// `message` as the error body.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, MailError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(message) = &self.failure {
            return Err(MailError::Api {
                status: 500,
                message: message.clone(),
            });
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(DeliveryReceipt {
            id: Some(format!("test-{n}")),
        })
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the full application router (same middleware stack as production).
pub fn build_test_app_with(
    pool: DbPool,
    transport: Arc<RecordingTransport>,
    environment: Environment,
) -> Router {
    let config = test_config(environment);
    let dispatcher = Dispatcher::new(
        Arc::new(InterestCatalog::standard()),
        transport,
        "onboarding@resend.dev",
        "info@aimterior.com",
    );

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        dispatcher: Arc::new(dispatcher),
    };

    build_app_router(state, &config)
}

/// Development-mode app with a fresh recording transport.
pub fn build_test_app(pool: DbPool) -> (Router, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    let app = build_test_app_with(pool, Arc::clone(&transport), Environment::Development);
    (app, transport)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
