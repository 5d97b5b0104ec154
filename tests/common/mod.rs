//! Common test helpers for integration tests.
//!
//! # Note
//!
//! The `#![allow(dead_code)]` attribute is necessary because Rust compiles each
//! integration test file as a separate crate, and not every file uses every
//! helper.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use notes_api::api::{AppState, create_router};
use notes_api::infrastructure::{InMemoryNoteRepository, SequentialIdGenerator};

// =============================================================================
// App Creation Helpers
// =============================================================================

/// Test application: the router plus a handle on the state behind it.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// App backed by a repository that assigns random UUIDs.
    pub fn new() -> Self {
        Self::with_state(AppState::new(InMemoryNoteRepository::new()))
    }

    /// App backed by a repository that assigns `note-1`, `note-2`, ...
    pub fn sequential() -> Self {
        Self::with_state(AppState::new(InMemoryNoteRepository::with_generator(
            Arc::new(SequentialIdGenerator::new()),
        )))
    }

    fn with_state(state: AppState) -> Self {
        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    /// Sends one request through a clone of the router.
    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
        let body = body.map_or_else(Body::empty, |text| Body::from(text.to_string()));
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes()
            .to_vec();

        TestResponse { status, body }
    }
}

// =============================================================================
// Response Helpers
// =============================================================================

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Decodes the body as JSON, panicking with the raw body on failure.
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|error| {
            panic!(
                "Body is not the expected JSON ({error}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
