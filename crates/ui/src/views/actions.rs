mod notes;
mod progress;

pub use notes::{
    NotesIntent, NotesState, is_save_shortcut, use_notes_dispatcher, use_notes_state,
};
pub use progress::{ProgressIntent, ProgressState, use_progress_dispatcher, use_progress_state};
