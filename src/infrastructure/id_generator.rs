//! Identifier generation for new notes.
//!
//! The repository receives its generator as a trait object so tests can
//! swap random UUIDs for a predictable sequence.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::domain::NoteId;

/// Produces unique, opaque note identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns an identifier never returned before by this generator.
    fn generate(&self) -> NoteId;
}

/// Random UUID (v4) generator. 122 random bits per identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    /// Creates a new UUID generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> NoteId {
        NoteId::from_uuid(Uuid::new_v4())
    }
}

/// Deterministic generator yielding `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator using the `note` prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix("note")
    }

    /// Creates a generator using a custom prefix.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> NoteId {
        let value = self.counter.fetch_add(1, Ordering::Relaxed);
        NoteId::new(format!("{}-{value}", self.prefix))
    }
}

// =============================================================================
// Tests
// =============================================================================
