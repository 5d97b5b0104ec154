//! Data Transfer Objects for the notes API.
//!
//! Request DTOs only carry what the server trusts from a client; response
//! DTOs mirror the stored record.

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::domain::Note;

// =============================================================================
// Request DTOs
// =============================================================================

/// Request body for `POST /notes` and `PUT /notes/{id}`.
///
/// Only `content` is read. Any `id` (or other field) in the payload is
/// ignored; identifiers always come from the server or the request path.
///
/// ```json
/// { "content": "Buy milk" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoteRequest {
    /// Note body. Missing or `null` decodes as the empty string.
    #[serde(default)]
    content: Option<String>,
}

impl NoteRequest {
    /// Decodes a raw request body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::BadRequest` if the body is not a JSON object or
    /// `content` is not a string.
    pub fn decode(body: &[u8]) -> Result<Self, ApiError> {
        let invalid = |error: serde_json::Error| {
            ApiError::bad_request(format!("Invalid request body: {error}"))
        };

        // serde would otherwise accept `["text"]` as a positional struct.
        let value: serde_json::Value = serde_json::from_slice(body).map_err(invalid)?;
        if !value.is_object() {
            return Err(ApiError::bad_request(
                "Invalid request body: expected a JSON object",
            ));
        }
        serde_json::from_value(value).map_err(invalid)
    }

    /// Consumes the request, returning its content.
    #[must_use]
    pub fn into_content(self) -> String {
        self.content.unwrap_or_default()
    }
}

// =============================================================================
// Response DTOs
// =============================================================================

/// Response body for a single note.
///
/// ```json
/// { "id": "5f0c...", "content": "Buy milk" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteResponse {
    pub id: String,
    pub content: String,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id.to_string(),
            content: note.content,
        }
    }
}

impl From<&Note> for NoteResponse {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.to_string(),
            content: note.content.clone(),
        }
    }
}

/// Error body returned with every 4xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
