use std::sync::Arc;

use dioxus::prelude::*;
use tracing::error;

use gopher_core::model::{CategoryKey, TopicSlug};
use services::{NotesError, NotesService};

use crate::views::{Notice, NoticeSlot};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotesIntent {
    StartEditing,
    EditDraft(String),
    CancelEditing,
    Save,
    RequestDelete,
    CancelDelete,
    ConfirmDelete,
}

/// Signals behind one topic's notes panel.
#[derive(Clone, Copy, PartialEq)]
pub struct NotesState {
    pub saved: Signal<Option<String>>,
    pub draft: Signal<String>,
    pub editing: Signal<bool>,
    pub confirm_delete: Signal<bool>,
}

impl NotesState {
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.draft.read().trim().is_empty()
    }

    fn reset_draft(&mut self) {
        let text = self.saved.peek().clone().unwrap_or_default();
        self.draft.set(text);
    }
}

pub fn use_notes_state(
    notes: &NotesService,
    category: &CategoryKey,
    topic: &TopicSlug,
) -> NotesState {
    let saved = use_signal(|| notes.load(category, topic));
    let draft = use_signal(|| saved.peek().clone().unwrap_or_default());
    let editing = use_signal(|| false);
    let confirm_delete = use_signal(|| false);
    NotesState {
        saved,
        draft,
        editing,
        confirm_delete,
    }
}

pub fn use_notes_dispatcher(
    state: NotesState,
    notes: Arc<NotesService>,
    category: CategoryKey,
    topic: TopicSlug,
    notice: NoticeSlot,
) -> Callback<NotesIntent> {
    use_callback(move |intent: NotesIntent| {
        apply_intent(intent, state, &notes, &category, &topic, notice);
    })
}

/// Ctrl+Enter, or Cmd+Enter on macOS.
#[must_use]
pub fn is_save_shortcut(modifiers: Modifiers, key: &Key) -> bool {
    let chord = modifiers.contains(Modifiers::CONTROL) || modifiers.contains(Modifiers::META);
    chord && *key == Key::Enter
}

fn apply_intent(
    intent: NotesIntent,
    mut state: NotesState,
    notes: &NotesService,
    category: &CategoryKey,
    topic: &TopicSlug,
    mut notice: NoticeSlot,
) {
    match intent {
        NotesIntent::StartEditing => {
            state.reset_draft();
            state.editing.set(true);
        }
        NotesIntent::EditDraft(text) => state.draft.set(text),
        NotesIntent::CancelEditing => {
            state.reset_draft();
            state.editing.set(false);
        }
        NotesIntent::Save => {
            let draft = state.draft.peek().clone();
            match notes.save(category, topic, draft) {
                Ok(note) => {
                    state.saved.set(Some(note.into_text()));
                    state.editing.set(false);
                    notice.flash(Notice::success("Note saved successfully!"));
                }
                Err(NotesError::Note(_)) => {
                    notice.flash(Notice::error("Write something before saving."));
                }
                Err(err) => {
                    error!(error = %err, %category, %topic, "failed to save note");
                    notice.flash(Notice::error("Failed to save note. Please try again."));
                }
            }
        }
        NotesIntent::RequestDelete => state.confirm_delete.set(true),
        NotesIntent::CancelDelete => state.confirm_delete.set(false),
        NotesIntent::ConfirmDelete => {
            // Only a pending confirmation may delete.
            if !*state.confirm_delete.peek() {
                return;
            }
            state.confirm_delete.set(false);
            match notes.delete(category, topic) {
                Ok(()) => {
                    state.saved.set(None);
                    state.draft.set(String::new());
                    state.editing.set(false);
                    notice.flash(Notice::success("Note deleted successfully!"));
                }
                Err(err) => {
                    error!(error = %err, %category, %topic, "failed to delete note");
                    notice.flash(Notice::error("Failed to delete note. Please try again."));
                }
            }
        }
    }
}
