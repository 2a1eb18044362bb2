//! Shared response types for API handlers.
//!
//! Public content is returned as a bare JSON array or object (no envelope)
//! with a cache directive; form submissions get a small acknowledgement.

use axum::http::header::{CACHE_CONTROL, EXPIRES, PRAGMA};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use aimterior_core::submission::RequestKind;

/// Cache directive for public read responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Development: never cache, so content edits show up immediately.
    NoStore,
    /// Production: short shared cache with stale-while-revalidate.
    ShortPublic,
}

impl CachePolicy {
    pub const NO_STORE: &'static str = "no-store, no-cache, must-revalidate, proxy-revalidate";
    pub const SHORT_PUBLIC: &'static str = "public, s-maxage=60, stale-while-revalidate=30";

    /// Write this policy's headers into `headers`.
    pub fn apply(self, headers: &mut HeaderMap) {
        match self {
            CachePolicy::NoStore => {
                headers.insert(CACHE_CONTROL, HeaderValue::from_static(Self::NO_STORE));
                headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
                headers.insert(EXPIRES, HeaderValue::from_static("0"));
            }
            CachePolicy::ShortPublic => {
                headers.insert(CACHE_CONTROL, HeaderValue::from_static(Self::SHORT_PUBLIC));
            }
        }
    }
}

/// JSON body with a cache directive.
#[derive(Debug)]
pub struct CachedJson<T> {
    pub policy: CachePolicy,
    pub data: T,
}

impl<T> CachedJson<T> {
    pub fn new(policy: CachePolicy, data: T) -> Self {
        Self { policy, data }
    }
}

impl<T: Serialize> IntoResponse for CachedJson<T> {
    fn into_response(self) -> Response {
        let mut response = Json(self.data).into_response();
        self.policy.apply(response.headers_mut());
        response
    }
}

/// `{ "success": true, "message": ... }` returned after a form is sent.
#[derive(Debug, Serialize)]
pub struct SubmissionAck {
    pub success: bool,
    pub message: &'static str,
}

impl SubmissionAck {
    pub fn new(kind: RequestKind) -> Self {
        Self {
            success: true,
            message: kind.success_message(),
        }
    }
}
