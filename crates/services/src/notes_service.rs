use std::sync::Arc;

use gopher_core::model::{CategoryKey, Note, TopicSlug, note_key};
use storage::KeyValueStore;
use tracing::{debug, warn};

use crate::error::NotesError;

/// Single-key read/write of the freeform note attached to each topic.
#[derive(Clone)]
pub struct NotesService {
    store: Arc<dyn KeyValueStore>,
}

impl NotesService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The saved note text, or `None` if there is none or it cannot be read.
    #[must_use]
    pub fn load(&self, category: &CategoryKey, topic: &TopicSlug) -> Option<String> {
        let key = note_key(category, topic);
        match self.store.get(&key) {
            Ok(text) => text.filter(|t| !t.is_empty()),
            Err(err) => {
                warn!(error = %err, %key, "failed to read note");
                None
            }
        }
    }

    /// Validate and store a note, replacing any previous text.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Note` for blank text and `NotesError::Storage` if the
    /// write fails.
    pub fn save(
        &self,
        category: &CategoryKey,
        topic: &TopicSlug,
        text: impl Into<String>,
    ) -> Result<Note, NotesError> {
        let note = Note::new(category.clone(), topic.clone(), text)?;
        self.store.set(&note.key(), note.text())?;
        debug!(key = %note.key(), "note saved");
        Ok(note)
    }

    /// # Errors
    ///
    /// Returns `NotesError::Storage` if the key cannot be removed.
    pub fn delete(&self, category: &CategoryKey, topic: &TopicSlug) -> Result<(), NotesError> {
        let key = note_key(category, topic);
        self.store.remove(&key)?;
        debug!(%key, "note deleted");
        Ok(())
    }
}
