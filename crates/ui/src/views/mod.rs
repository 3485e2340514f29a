mod actions;
mod categories;
mod components;
mod notes;
mod progress;
mod state;
mod topic;
mod topics;

#[cfg(test)]
mod intent_smoke;
#[cfg(test)]
mod view_smoke;

pub use actions::{
    NotesIntent, NotesState, ProgressIntent, ProgressState, is_save_shortcut, use_notes_dispatcher,
    use_notes_state, use_progress_dispatcher, use_progress_state,
};
pub use categories::CategoryListView;
pub use components::{ConfirmModal, ProgressBar, ProgressRing};
pub use notes::NotesPanel;
pub use progress::ProgressView;
pub use state::{NOTICE_TTL, Notice, NoticeBanner, NoticeKind, NoticeSlot};
pub use topic::TopicView;
pub use topics::TopicListView;
