//! API module for HTTP handlers.
//!
//! This module contains route definitions and request/response handlers.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, NoteRequest, NoteResponse};
pub use error::ApiError;
pub use handlers::{
    AppState, create_note, delete_note, get_note, list_notes, method_not_allowed, unmatched_path,
    update_note,
};
pub use routes::{NOTE_PATH, NOTES_PATH, create_router};
