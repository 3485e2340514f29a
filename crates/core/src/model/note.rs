use thiserror::Error;

use crate::model::{CategoryKey, TopicSlug};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NoteError {
    #[error("note must not be empty")]
    Empty,
}

/// Storage key for a topic's note: `note-{category-slug}-{topic}`.
#[must_use]
pub fn note_key(category: &CategoryKey, topic: &TopicSlug) -> String {
    format!("note-{}-{}", category.route_slug(), topic.as_str())
}

/// Freeform text a visitor attached to a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    category: CategoryKey,
    topic: TopicSlug,
    text: String,
}

impl Note {
    /// # Errors
    ///
    /// Returns `NoteError::Empty` if the text is blank.
    pub fn new(
        category: CategoryKey,
        topic: TopicSlug,
        text: impl Into<String>,
    ) -> Result<Self, NoteError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(NoteError::Empty);
        }
        Ok(Self {
            category,
            topic,
            text,
        })
    }

    #[must_use]
    pub fn key(&self) -> String {
        note_key(&self.category, &self.topic)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}
