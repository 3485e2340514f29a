use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use gopher_core::model::{CategoryKey, TopicSlug};
use gopher_core::time::fixed_clock;
use services::AppServices;
use storage::{InMemoryStore, KeyValueStore, Storage, StorageError};

use super::test_harness::{drive_dom, test_catalog};
use super::{
    Notice, NoticeSlot, NotesIntent, NotesState, ProgressIntent, ProgressState,
    use_notes_dispatcher, use_notes_state, use_progress_dispatcher, use_progress_state,
};

const CATEGORY: &str = "basics_go";
const TOPIC: &str = "for-loops";
const NOTE_KEY: &str = "note-basics-go-for-loops";

fn key(raw: &str) -> CategoryKey {
    CategoryKey::parse(raw).expect("category")
}

fn slug(raw: &str) -> TopicSlug {
    TopicSlug::parse(raw).expect("topic")
}

#[derive(Clone, Default)]
struct HarnessHandles {
    notes: Rc<RefCell<Option<(Callback<NotesIntent>, NotesState)>>>,
    progress: Rc<RefCell<Option<(Callback<ProgressIntent>, ProgressState)>>>,
    notice: Rc<RefCell<Option<NoticeSlot>>>,
}

#[derive(Props, Clone)]
struct HarnessProps {
    services: AppServices,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn IntentHarness(props: HarnessProps) -> Element {
    let notice = use_context_provider(NoticeSlot::new);
    let notes = props.services.notes();
    let notes_state = use_notes_state(&notes, &key(CATEGORY), &slug(TOPIC));
    let notes_dispatch =
        use_notes_dispatcher(notes_state, notes, key(CATEGORY), slug(TOPIC), notice);
    let progress_state = use_progress_state();
    let progress_dispatch =
        use_progress_dispatcher(progress_state, props.services.progress(), notice);

    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.notes.borrow_mut() = Some((notes_dispatch, notes_state));
        *props.handles.progress.borrow_mut() = Some((progress_dispatch, progress_state));
        *props.handles.notice.borrow_mut() = Some(notice);
    }
    rsx! { div {} }
}

struct Fixture {
    dom: VirtualDom,
    services: AppServices,
    handles: HarnessHandles,
}

impl Fixture {
    fn new(storage: Storage) -> Self {
        let services = AppServices::new(&storage, test_catalog(), fixed_clock());
        let handles = HarnessHandles::default();
        let mut dom = VirtualDom::new_with_props(
            IntentHarness,
            HarnessProps {
                services: services.clone(),
                handles: handles.clone(),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self {
            dom,
            services,
            handles,
        }
    }

    fn notes(&mut self, intent: NotesIntent) {
        let (dispatch, _) = self.handles.notes.borrow().expect("notes registered");
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    fn progress(&mut self, intent: ProgressIntent) {
        let (dispatch, _) = self.handles.progress.borrow().expect("progress registered");
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    fn notes_state(&self) -> NotesState {
        self.handles.notes.borrow().expect("notes registered").1
    }

    fn progress_state(&self) -> ProgressState {
        self.handles.progress.borrow().expect("progress registered").1
    }

    fn notice(&self) -> Option<Notice> {
        let slot = self.handles.notice.borrow().expect("notice registered");
        self.dom.in_runtime(|| slot.current())
    }

    fn saved(&self) -> Option<String> {
        let state = self.notes_state();
        self.dom.in_runtime(|| state.saved.peek().clone())
    }

    fn editing(&self) -> bool {
        let state = self.notes_state();
        self.dom.in_runtime(|| *state.editing.peek())
    }

    fn revision(&self) -> u32 {
        let state = self.progress_state();
        self.dom.in_runtime(|| *state.revision.peek())
    }

    fn stored_note(&self) -> Option<String> {
        self.services.notes().load(&key(CATEGORY), &slug(TOPIC))
    }

    fn toggle(&mut self) {
        self.progress(ProgressIntent::Toggle {
            category: key(CATEGORY),
            topic: slug(TOPIC),
        });
    }

    fn is_completed(&self) -> bool {
        self.services
            .progress()
            .is_topic_completed(&key(CATEGORY), &slug(TOPIC))
    }
}

/// Reads pass through; every write fails.
struct ReadOnlyStore(InMemoryStore);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }
}

fn read_only_storage(seed: &[(&str, &str)]) -> Storage {
    let inner = InMemoryStore::new();
    for (key, value) in seed {
        inner.set(key, value).expect("seed");
    }
    Storage::from_store(Arc::new(ReadOnlyStore(inner)))
}

#[tokio::test(flavor = "current_thread")]
async fn blank_draft_is_not_saved() {
    let mut fixture = Fixture::new(Storage::in_memory());
    fixture.notes(NotesIntent::StartEditing);
    assert!(fixture.editing());
    let state = fixture.notes_state();
    assert!(!fixture.dom.in_runtime(|| state.can_save()));

    fixture.notes(NotesIntent::EditDraft(" \n\t ".to_string()));
    assert!(!fixture.dom.in_runtime(|| state.can_save()));
    fixture.notes(NotesIntent::Save);

    assert_eq!(
        fixture.notice(),
        Some(Notice::error("Write something before saving."))
    );
    assert!(fixture.editing());
    assert_eq!(fixture.saved(), None);
    assert_eq!(fixture.stored_note(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn saving_a_draft_stores_it_and_closes_the_editor() {
    let mut fixture = Fixture::new(Storage::in_memory());
    fixture.notes(NotesIntent::StartEditing);
    fixture.notes(NotesIntent::EditDraft("range over slices".to_string()));
    let state = fixture.notes_state();
    assert!(fixture.dom.in_runtime(|| state.can_save()));

    fixture.notes(NotesIntent::Save);

    assert_eq!(fixture.notice(), Some(Notice::success("Note saved successfully!")));
    assert!(!fixture.editing());
    assert_eq!(fixture.saved().as_deref(), Some("range over slices"));
    assert_eq!(fixture.stored_note().as_deref(), Some("range over slices"));
}

#[tokio::test(flavor = "current_thread")]
async fn cancel_editing_restores_the_saved_text() {
    let storage = Storage::in_memory();
    storage.kv.set(NOTE_KEY, "keep me").expect("seed note");
    let mut fixture = Fixture::new(storage);

    fixture.notes(NotesIntent::StartEditing);
    fixture.notes(NotesIntent::EditDraft("changed".to_string()));
    fixture.notes(NotesIntent::CancelEditing);

    let state = fixture.notes_state();
    assert_eq!(fixture.dom.in_runtime(|| state.draft.peek().clone()), "keep me");
    assert!(!fixture.editing());
    assert_eq!(fixture.stored_note().as_deref(), Some("keep me"));
    assert_eq!(fixture.notice(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn note_is_deleted_only_after_confirmation() {
    let storage = Storage::in_memory();
    storage.kv.set(NOTE_KEY, "keep me").expect("seed note");
    let mut fixture = Fixture::new(storage);
    assert_eq!(fixture.saved().as_deref(), Some("keep me"));

    fixture.notes(NotesIntent::ConfirmDelete);
    assert_eq!(fixture.stored_note().as_deref(), Some("keep me"));
    assert_eq!(fixture.notice(), None);

    fixture.notes(NotesIntent::RequestDelete);
    let state = fixture.notes_state();
    assert!(fixture.dom.in_runtime(|| *state.confirm_delete.peek()));
    fixture.notes(NotesIntent::CancelDelete);
    assert!(!fixture.dom.in_runtime(|| *state.confirm_delete.peek()));
    assert_eq!(fixture.stored_note().as_deref(), Some("keep me"));

    fixture.notes(NotesIntent::RequestDelete);
    fixture.notes(NotesIntent::ConfirmDelete);
    assert_eq!(fixture.stored_note(), None);
    assert_eq!(fixture.saved(), None);
    assert!(!fixture.dom.in_runtime(|| *state.confirm_delete.peek()));
    assert_eq!(fixture.notice(), Some(Notice::success("Note deleted successfully!")));
}

#[tokio::test(flavor = "current_thread")]
async fn failed_note_writes_keep_the_note_and_report_an_error() {
    let mut fixture = Fixture::new(read_only_storage(&[(NOTE_KEY, "keep me")]));

    fixture.notes(NotesIntent::StartEditing);
    fixture.notes(NotesIntent::EditDraft("new text".to_string()));
    fixture.notes(NotesIntent::Save);
    assert_eq!(
        fixture.notice(),
        Some(Notice::error("Failed to save note. Please try again."))
    );
    assert!(fixture.editing());
    assert_eq!(fixture.saved().as_deref(), Some("keep me"));

    fixture.notes(NotesIntent::CancelEditing);
    fixture.notes(NotesIntent::RequestDelete);
    fixture.notes(NotesIntent::ConfirmDelete);
    assert_eq!(
        fixture.notice(),
        Some(Notice::error("Failed to delete note. Please try again."))
    );
    assert_eq!(fixture.saved().as_deref(), Some("keep me"));
    assert_eq!(fixture.stored_note().as_deref(), Some("keep me"));
}

#[tokio::test(flavor = "current_thread")]
async fn toggle_flips_completion_and_bumps_the_revision() {
    let mut fixture = Fixture::new(Storage::in_memory());
    let start = fixture.revision();

    fixture.toggle();
    assert!(fixture.is_completed());
    assert_eq!(fixture.revision(), start + 1);
    assert_eq!(fixture.notice(), Some(Notice::success("Topic marked as complete.")));

    fixture.toggle();
    assert!(!fixture.is_completed());
    assert_eq!(fixture.revision(), start + 2);
    assert_eq!(
        fixture.notice(),
        Some(Notice::success("Topic marked as incomplete."))
    );
}

#[tokio::test(flavor = "current_thread")]
async fn reset_waits_for_confirmation_then_clears_progress() {
    let mut fixture = Fixture::new(Storage::in_memory());
    let progress = fixture.services.progress();
    progress
        .mark_topic_completed(&key("basics_go"), &slug("variables"))
        .expect("mark variables");
    progress
        .mark_topic_completed(&key("advanced_go"), &slug("generics"))
        .expect("mark generics");
    let start = fixture.revision();

    fixture.progress(ProgressIntent::ConfirmReset);
    assert_eq!(progress.overall_progress().completed, 2);
    assert_eq!(fixture.revision(), start);

    fixture.progress(ProgressIntent::RequestReset);
    let state = fixture.progress_state();
    assert!(fixture.dom.in_runtime(|| *state.confirm_reset.peek()));
    fixture.progress(ProgressIntent::CancelReset);
    assert!(!fixture.dom.in_runtime(|| *state.confirm_reset.peek()));
    assert_eq!(progress.overall_progress().completed, 2);

    fixture.progress(ProgressIntent::RequestReset);
    fixture.progress(ProgressIntent::ConfirmReset);
    assert_eq!(progress.overall_progress().completed, 0);
    assert_eq!(fixture.revision(), start + 1);
    assert!(!fixture.dom.in_runtime(|| *state.confirm_reset.peek()));
    assert_eq!(fixture.notice(), Some(Notice::success("Progress reset.")));
}

#[tokio::test(flavor = "current_thread")]
async fn failed_progress_writes_report_an_error() {
    let ledger = r#"[{"category":"basics_go","topic":"for-loops","completedAt":"2024-01-01T00:00:00.000Z"}]"#;
    let mut fixture = Fixture::new(read_only_storage(&[(services::LEDGER_KEY, ledger)]));
    let start = fixture.revision();

    fixture.toggle();
    assert!(fixture.is_completed());
    assert_eq!(fixture.revision(), start);
    assert_eq!(
        fixture.notice(),
        Some(Notice::error("Failed to update progress. Please try again."))
    );

    fixture.progress(ProgressIntent::RequestReset);
    fixture.progress(ProgressIntent::ConfirmReset);
    assert_eq!(fixture.services.progress().overall_progress().completed, 1);
    assert_eq!(fixture.revision(), start);
    assert_eq!(
        fixture.notice(),
        Some(Notice::error("Failed to reset progress. Please try again."))
    );
}
