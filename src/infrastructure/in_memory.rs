//! In-memory repository implementation.
//!
//! # Features
//!
//! - Thread-safe with `Arc<RwLock<...>>`
//! - Every operation takes the lock exactly once, so each call is linearizable
//! - Pluggable identifier generation via [`IdGenerator`]

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::{Note, NoteId};
use crate::infrastructure::{IdGenerator, NoteRepository, RepositoryError, UuidGenerator};

// =============================================================================
// In-Memory Note Repository
// =============================================================================

/// In-memory implementation of `NoteRepository`.
///
/// Cloning the repository yields another handle onto the same storage.
///
/// # Example
///
/// ```
/// use notes_api::infrastructure::{InMemoryNoteRepository, NoteRepository};
///
/// let repository = InMemoryNoteRepository::new();
/// let note = repository.create("hello".to_string());
///
/// assert_eq!(repository.get(&note.id).unwrap().content, "hello");
/// ```
#[derive(Clone)]
pub struct InMemoryNoteRepository {
    notes: Arc<RwLock<HashMap<NoteId, Note>>>,
    id_generator: Arc<dyn IdGenerator>,
}

impl InMemoryNoteRepository {
    /// Creates an empty repository that assigns random UUIDs.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(Arc::new(UuidGenerator::new()))
    }

    /// Creates an empty repository with a custom identifier generator.
    #[must_use]
    pub fn with_generator(id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            notes: Arc::new(RwLock::new(HashMap::new())),
            id_generator,
        }
    }
}

impl Default for InMemoryNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryNoteRepository {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("InMemoryNoteRepository")
            .field("len", &self.notes.read().len())
            .finish_non_exhaustive()
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn create(&self, content: String) -> Note {
        let mut guard = self.notes.write();
        // A generator that repeats itself must not clobber a live note.
        loop {
            if let Entry::Vacant(entry) = guard.entry(self.id_generator.generate()) {
                let note = Note::new(entry.key().clone(), content);
                entry.insert(note.clone());
                return note;
            }
        }
    }

    fn list(&self) -> Vec<Note> {
        self.notes.read().values().cloned().collect()
    }

    fn get(&self, id: &NoteId) -> Result<Note, RepositoryError> {
        self.notes
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))
    }

    fn replace(&self, id: &NoteId, content: String) -> Result<Note, RepositoryError> {
        let mut guard = self.notes.write();
        let stored = guard
            .get_mut(id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;
        stored.content = content;
        Ok(stored.clone())
    }

    fn delete(&self, id: &NoteId) -> Result<(), RepositoryError> {
        self.notes
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))
    }

    fn count(&self) -> usize {
        self.notes.read().len()
    }

    fn reset(&self) {
        self.notes.write().clear();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::SequentialIdGenerator;
    use rstest::{fixture, rstest};
    use std::collections::HashSet;

    #[fixture]
    fn repository() -> InMemoryNoteRepository {
        InMemoryNoteRepository::with_generator(Arc::new(SequentialIdGenerator::new()))
    }

    /// Always hands out the same identifier after the first call.
    struct StuckGenerator {
        inner: SequentialIdGenerator,
        calls: std::sync::atomic::AtomicUsize,
    }

    impl IdGenerator for StuckGenerator {
        fn generate(&self) -> NoteId {
            let call = self
                .calls
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            if call < 2 {
                NoteId::new("dup")
            } else {
                self.inner.generate()
            }
        }
    }

    // -------------------------------------------------------------------------
    // Create / Get
    // -------------------------------------------------------------------------

    #[rstest]
    fn test_create_assigns_id_and_stores_content(repository: InMemoryNoteRepository) {
        let note = repository.create("Test Note".to_string());

        assert_eq!(note.id.as_str(), "note-1");
        assert_eq!(note.content, "Test Note");
        assert_eq!(repository.get(&note.id).unwrap(), note);
    }

    #[rstest]
    fn test_create_with_default_generator_yields_uuid() {
        let repository = InMemoryNoteRepository::new();
        let note = repository.create(String::new());

        assert!(!note.id.is_empty());
        assert!(uuid::Uuid::parse_str(note.id.as_str()).is_ok());
    }

    #[rstest]
    fn test_create_skips_identifier_already_in_use() {
        let repository = InMemoryNoteRepository::with_generator(Arc::new(StuckGenerator {
            inner: SequentialIdGenerator::new(),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }));

        let first = repository.create("first".to_string());
        let second = repository.create("second".to_string());

        assert_eq!(first.id.as_str(), "dup");
        assert_eq!(second.id.as_str(), "note-1");
        assert_eq!(repository.get(&first.id).unwrap().content, "first");
        assert_eq!(repository.count(), 2);
    }

    #[rstest]
    fn test_get_missing_returns_not_found(repository: InMemoryNoteRepository) {
        let result = repository.get(&NoteId::new("nonexistent"));
        assert_eq!(
            result,
            Err(RepositoryError::NotFound(NoteId::new("nonexistent")))
        );
    }

    #[rstest]
    fn test_get_returns_copy(repository: InMemoryNoteRepository) {
        let note = repository.create("original".to_string());

        let mut copy = repository.get(&note.id).unwrap();
        copy.content = "mutated".to_string();

        assert_eq!(repository.get(&note.id).unwrap().content, "original");
    }

    // -------------------------------------------------------------------------
    // List
    // -------------------------------------------------------------------------

    #[rstest]
    fn test_list_empty(repository: InMemoryNoteRepository) {
        assert!(repository.list().is_empty());
        assert!(repository.is_empty());
    }

    #[rstest]
    fn test_list_returns_all_notes(repository: InMemoryNoteRepository) {
        repository.create("A".to_string());
        repository.create("B".to_string());

        let contents: HashSet<String> = repository
            .list()
            .into_iter()
            .map(|note| note.content)
            .collect();

        assert_eq!(contents.len(), 2);
        assert!(contents.contains("A"));
        assert!(contents.contains("B"));
    }

    // -------------------------------------------------------------------------
    // Replace
    // -------------------------------------------------------------------------

    #[rstest]
    fn test_replace_keeps_id(repository: InMemoryNoteRepository) {
        let note = repository.create("old".to_string());

        let updated = repository.replace(&note.id, "new".to_string()).unwrap();

        assert_eq!(updated.id, note.id);
        assert_eq!(updated.content, "new");
        assert_eq!(repository.get(&note.id).unwrap().content, "new");
        assert_eq!(repository.count(), 1);
    }

    #[rstest]
    fn test_replace_missing_returns_not_found(repository: InMemoryNoteRepository) {
        let result = repository.replace(&NoteId::new("nonexistent"), "new".to_string());

        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
        assert!(repository.is_empty());
    }

    // -------------------------------------------------------------------------
    // Delete / Reset
    // -------------------------------------------------------------------------

    #[rstest]
    fn test_delete_then_get_not_found(repository: InMemoryNoteRepository) {
        let note = repository.create("doomed".to_string());

        assert_eq!(repository.delete(&note.id), Ok(()));
        assert!(matches!(
            repository.get(&note.id),
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[rstest]
    fn test_delete_missing_returns_not_found(repository: InMemoryNoteRepository) {
        assert!(matches!(
            repository.delete(&NoteId::new("nonexistent")),
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[rstest]
    fn test_reset_clears_everything(repository: InMemoryNoteRepository) {
        repository.create("A".to_string());
        repository.create("B".to_string());

        repository.reset();

        assert_eq!(repository.count(), 0);
        assert!(repository.list().is_empty());
    }

    #[rstest]
    fn test_clone_shares_storage(repository: InMemoryNoteRepository) {
        let handle = repository.clone();
        let note = handle.create("shared".to_string());

        assert_eq!(repository.get(&note.id).unwrap().content, "shared");
    }

    // -------------------------------------------------------------------------
    // Concurrency
    // -------------------------------------------------------------------------

    #[rstest]
    fn test_concurrent_creates_yield_distinct_ids() {
        let repository = InMemoryNoteRepository::new();

        let ids: HashSet<NoteId> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..100)
                .map(|index| {
                    let repository = &repository;
                    scope.spawn(move || repository.create(format!("note {index}")).id)
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(ids.len(), 100);
        assert_eq!(repository.list().len(), 100);
    }

    #[rstest]
    fn test_concurrent_create_and_delete_leave_consistent_state() {
        let repository = InMemoryNoteRepository::new();
        let seeded: Vec<Note> = (0..50)
            .map(|index| repository.create(format!("seed {index}")))
            .collect();

        std::thread::scope(|scope| {
            for note in &seeded {
                let repository = &repository;
                scope.spawn(move || repository.delete(&note.id).unwrap());
            }
            for index in 0..50 {
                let repository = &repository;
                scope.spawn(move || repository.create(format!("fresh {index}")));
            }
            for _ in 0..10 {
                let repository = &repository;
                scope.spawn(move || {
                    let snapshot = repository.list();
                    assert!(snapshot.len() <= 100);
                });
            }
        });

        let remaining = repository.list();
        assert_eq!(remaining.len(), 50);
        assert!(remaining.iter().all(|note| note.content.starts_with("fresh")));
    }
}
