use std::sync::Arc;

use dioxus::prelude::*;
use tracing::error;

use gopher_core::model::{CategoryKey, TopicSlug};
use services::ProgressService;

use crate::views::{Notice, NoticeSlot};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressIntent {
    Toggle {
        category: CategoryKey,
        topic: TopicSlug,
    },
    RequestReset,
    CancelReset,
    ConfirmReset,
}

/// `revision` is bumped after every successful write so views that read it
/// re-query the ledger.
#[derive(Clone, Copy, PartialEq)]
pub struct ProgressState {
    pub revision: Signal<u32>,
    pub confirm_reset: Signal<bool>,
}

impl ProgressState {
    /// Subscribe the calling component to ledger writes.
    pub fn track(&self) -> u32 {
        *self.revision.read()
    }

    fn bump(&mut self) {
        *self.revision.write() += 1;
    }
}

pub fn use_progress_state() -> ProgressState {
    ProgressState {
        revision: use_signal(|| 0),
        confirm_reset: use_signal(|| false),
    }
}

pub fn use_progress_dispatcher(
    state: ProgressState,
    progress: Arc<ProgressService>,
    notice: NoticeSlot,
) -> Callback<ProgressIntent> {
    use_callback(move |intent: ProgressIntent| {
        apply_intent(intent, state, &progress, notice);
    })
}

fn apply_intent(
    intent: ProgressIntent,
    mut state: ProgressState,
    progress: &ProgressService,
    mut notice: NoticeSlot,
) {
    match intent {
        ProgressIntent::Toggle { category, topic } => {
            match progress.toggle_topic(&category, &topic) {
                Ok(now_completed) => {
                    state.bump();
                    let message = if now_completed {
                        "Topic marked as complete."
                    } else {
                        "Topic marked as incomplete."
                    };
                    notice.flash(Notice::success(message));
                }
                Err(err) => {
                    error!(error = %err, %category, %topic, "failed to update progress");
                    notice.flash(Notice::error("Failed to update progress. Please try again."));
                }
            }
        }
        ProgressIntent::RequestReset => state.confirm_reset.set(true),
        ProgressIntent::CancelReset => state.confirm_reset.set(false),
        ProgressIntent::ConfirmReset => {
            if !*state.confirm_reset.peek() {
                return;
            }
            state.confirm_reset.set(false);
            match progress.reset_progress() {
                Ok(()) => {
                    state.bump();
                    notice.flash(Notice::success("Progress reset."));
                }
                Err(err) => {
                    error!(error = %err, "failed to reset progress");
                    notice.flash(Notice::error("Failed to reset progress. Please try again."));
                }
            }
        }
    }
}
