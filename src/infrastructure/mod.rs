//! Infrastructure module for storage concerns.
//!
//! This module contains the repository contract, its in-memory
//! implementation, and identifier generation.

pub mod id_generator;
pub mod in_memory;
pub mod repository;

pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use in_memory::InMemoryNoteRepository;
pub use repository::{NoteRepository, RepositoryError};
