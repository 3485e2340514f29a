mod catalog;
mod completion;
mod keys;
mod note;
mod progress;

pub use catalog::{CatalogError, TopicCatalog, TopicCatalogBuilder};
pub use completion::{CompletionLedger, LedgerCodecError, TopicCompletionRecord};
pub use keys::{CategoryKey, KeyError, TopicSlug};
pub use note::{Note, NoteError, note_key};
pub use progress::{OVERALL, ProgressSummary, percentage};
