//! HTTP handlers for the notes API.
//!
//! Each handler performs exactly one repository call and translates its
//! outcome into a response. Bodies are taken as raw `Bytes` and decoded by
//! [`NoteRequest::decode`] so every decoding failure is a 400, regardless of
//! `Content-Type`.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::http::{Method, StatusCode, Uri};

use super::dto::{NoteRequest, NoteResponse};
use super::error::ApiError;
use crate::domain::NoteId;
use crate::infrastructure::{InMemoryNoteRepository, NoteRepository};

// =============================================================================
// Application State
// =============================================================================

/// Shared application dependencies.
///
/// Holds the one repository instance every request operates on. Cloning the
/// state clones the `Arc`, not the repository.
#[derive(Clone)]
pub struct AppState {
    /// Note repository shared by all requests.
    pub repository: Arc<dyn NoteRepository>,
}

impl AppState {
    /// Creates a new `AppState` owning the given repository.
    #[must_use]
    pub fn new(repository: impl NoteRepository + 'static) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Creates a new `AppState` from an already shared repository.
    #[must_use]
    pub fn from_arc(repository: Arc<dyn NoteRepository>) -> Self {
        Self { repository }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(InMemoryNoteRepository::new())
    }
}

// =============================================================================
// POST /notes
// =============================================================================

/// Creates a new note.
///
/// # Response
///
/// - **201 Created**: the stored note, with a server-assigned id
/// - **400 Bad Request**: body is not a note object
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] if the body cannot be decoded.
pub async fn create_note(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
    let request = NoteRequest::decode(&body)?;
    let note = state.repository.create(request.into_content());

    tracing::debug!(note_id = %note.id, "Note created");

    Ok((StatusCode::CREATED, Json(NoteResponse::from(note))))
}

// =============================================================================
// GET /notes
// =============================================================================

/// Lists all notes. An empty store yields `[]`.
pub async fn list_notes(State(state): State<AppState>) -> Json<Vec<NoteResponse>> {
    let notes = state
        .repository
        .list()
        .into_iter()
        .map(NoteResponse::from)
        .collect();
    Json(notes)
}

// =============================================================================
// GET /notes/{id}
// =============================================================================

/// Fetches a single note.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if no note has this id.
pub async fn get_note(
    State(state): State<AppState>,
    NotePath(id): NotePath,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = state.repository.get(&id)?;
    Ok(Json(NoteResponse::from(note)))
}

// =============================================================================
// PUT /notes/{id}
// =============================================================================

/// Replaces the content of an existing note.
///
/// Existence is checked before the body is decoded, so an unknown id is a
/// 404 even when the body is malformed. Any `id` in the body is ignored; the
/// path id is kept.
///
/// # Errors
///
/// - [`ApiError::NotFound`] if no note has this id
/// - [`ApiError::BadRequest`] if the body cannot be decoded
pub async fn update_note(
    State(state): State<AppState>,
    NotePath(id): NotePath,
    body: Bytes,
) -> Result<Json<NoteResponse>, ApiError> {
    state.repository.get(&id)?;

    let request = NoteRequest::decode(&body)?;
    // A concurrent delete between the check and here still surfaces as 404.
    let note = state.repository.replace(&id, request.into_content())?;

    tracing::debug!(note_id = %note.id, "Note replaced");

    Ok(Json(NoteResponse::from(note)))
}

// =============================================================================
// DELETE /notes/{id}
// =============================================================================

/// Deletes a note.
///
/// # Response
///
/// - **204 No Content**: note removed
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if no note has this id.
pub async fn delete_note(
    State(state): State<AppState>,
    NotePath(id): NotePath,
) -> Result<StatusCode, ApiError> {
    state.repository.delete(&id)?;

    tracing::debug!(note_id = %id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Fallbacks
// =============================================================================

/// Answers a verb that the matched path does not serve.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::method_not_allowed(method.as_str(), uri.path())
}

/// Answers any path outside `/notes` and `/notes/{id}`.
pub async fn unmatched_path(uri: Uri) -> ApiError {
    ApiError::bad_request(format!("Unsupported path: {}", uri.path()))
}

// =============================================================================
// NotePath Extractor
// =============================================================================

/// The `{id}` segment of `/notes/{id}`.
///
/// Rejects with a JSON 400 when the segment does not percent-decode, is
/// empty, or decodes to something containing `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePath(pub NoteId);

impl<S> FromRequestParts<S> for NotePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        parse_note_id(segment).map(Self)
    }
}

fn parse_note_id(segment: String) -> Result<NoteId, ApiError> {
    if segment.is_empty() {
        return Err(ApiError::bad_request("Note id must not be empty"));
    }
    if segment.contains('/') {
        return Err(ApiError::bad_request(format!(
            "Note id must be a single path segment: {segment}"
        )));
    }
    Ok(NoteId::from(segment))
}

// =============================================================================
// Tests
// =============================================================================
