//! Routing definitions for the notes API.
//!
//! The path space has exactly two shapes:
//!
//! | Path | Methods |
//! |---|---|
//! | `/notes` | `GET`, `POST` |
//! | `/notes/{id}` | `GET`, `PUT`, `DELETE` |
//!
//! Any other verb on those paths is a 405, including `HEAD`, which `get`
//! would otherwise answer. Any other path, including
//! `/notes/` with an empty id and `/notes/{id}/...` with extra segments,
//! is a 400.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, create_note, delete_note, get_note, list_notes, method_not_allowed, unmatched_path,
    update_note,
};

/// Collection path.
pub const NOTES_PATH: &str = "/notes";

/// Item path template.
pub const NOTE_PATH: &str = "/notes/{id}";

/// Creates the API router with all routes and middleware.
///
/// # Examples
///
/// ```no_run
/// use notes_api::api::{AppState, create_router};
///
/// # async fn run() -> std::io::Result<()> {
/// let router = create_router(AppState::default());
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3002").await?;
/// axum::serve(listener, router).await?;
/// # Ok(())
/// # }
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            NOTES_PATH,
            get(list_notes)
                .post(create_note)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            NOTE_PATH,
            get(get_note)
                .put(update_note)
                .delete(delete_note)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .fallback(unmatched_path)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Tests
// =============================================================================
