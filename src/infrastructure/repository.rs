//! Repository trait for notes.
//!
//! Handlers only see `dyn NoteRepository`; the in-memory store is the single
//! implementation shipped with the service.

use thiserror::Error;

use crate::domain::{Note, NoteId};

// =============================================================================
// Repository Error
// =============================================================================

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No note is stored under the requested identifier.
    #[error("Note not found: {0}")]
    NotFound(NoteId),
}

// =============================================================================
// Note Repository
// =============================================================================

/// Repository trait for `Note` entities.
///
/// Every method is atomic with respect to the collection: implementations
/// must serialize access so concurrent callers never observe a partially
/// applied create, replace, or delete.
pub trait NoteRepository: Send + Sync {
    /// Stores a new note under a freshly generated identifier.
    fn create(&self, content: String) -> Note;

    /// Returns every stored note. Order is unspecified.
    fn list(&self) -> Vec<Note>;

    /// Finds a note by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no note has this identifier.
    fn get(&self, id: &NoteId) -> Result<Note, RepositoryError>;

    /// Replaces the content of an existing note, keeping its identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no note has this identifier.
    fn replace(&self, id: &NoteId, content: String) -> Result<Note, RepositoryError>;

    /// Removes a note.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no note has this identifier.
    fn delete(&self, id: &NoteId) -> Result<(), RepositoryError>;

    /// Counts stored notes.
    fn count(&self) -> usize;

    /// Returns true if no notes are stored.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Removes every stored note.
    ///
    /// Intended for test and benchmark isolation; not reachable over HTTP.
    fn reset(&self);
}

// =============================================================================
// Tests
// =============================================================================
