//! Domain module for the notes API.
//!
//! This module contains the note record and its identifier type.

pub mod note;

pub use note::{Note, NoteId};
