use std::sync::Arc;

use gopher_core::model::{CategoryKey, TopicSlug};
use storage::{InMemoryStore, KeyValueStore, Storage, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

fn key(raw: &str) -> CategoryKey {
    CategoryKey::parse(raw).expect("category")
}

fn slug(raw: &str) -> TopicSlug {
    TopicSlug::parse(raw).expect("topic")
}

#[test]
fn category_list_smoke_renders_each_category() {
    let mut harness = setup_view_harness(ViewKind::Categories);
    harness
        .services
        .progress()
        .mark_topic_completed(&key("advanced_go"), &slug("generics"))
        .expect("mark");

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Gopher Notes"), "missing title in {html}");
    assert!(html.contains("5 topics across 2 categories"), "missing totals in {html}");
    assert!(html.contains("basics go"), "missing basics in {html}");
    assert!(html.contains("Syntax and control flow."), "missing description in {html}");
    assert!(html.contains("0 / 3 topics"), "missing basics count in {html}");
    assert!(html.contains("1 / 2 topics"), "missing advanced count in {html}");
    assert!(html.contains("50%"), "missing ring label in {html}");
}

#[test]
fn topic_list_smoke_renders_progress_and_badges() {
    let mut harness = setup_view_harness(ViewKind::Topics("basics-go"));
    let progress = harness.services.progress();
    progress
        .mark_topic_completed(&key("basics_go"), &slug("variables"))
        .expect("mark variables");
    progress
        .mark_topic_completed(&key("basics_go"), &slug("for-loops"))
        .expect("mark loops");

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("2 of 3 topics completed"), "missing count in {html}");
    assert!(html.contains("Syntax and control flow."), "missing description in {html}");
    assert!(html.contains("67%"), "missing percentage in {html}");
    assert!(html.contains("for loops"), "missing topic title in {html}");
    assert_eq!(html.matches("topic-card completed").count(), 2, "{html}");
}

#[test]
fn topic_list_smoke_renders_unknown_category_as_empty() {
    let mut harness = setup_view_harness(ViewKind::Topics("cooking"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("This category does not exist."), "{html}");
    assert!(html.contains("0 of 0 topics completed"), "{html}");
}

#[test]
fn topic_smoke_renders_toggle_state() {
    let mut harness = setup_view_harness(ViewKind::Topic("basics-go", "functions"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Mark as complete"), "missing toggle in {html}");
    assert!(html.contains("No notes yet."), "missing empty notes in {html}");

    harness
        .services
        .progress()
        .mark_topic_completed(&key("basics_go"), &slug("functions"))
        .expect("mark");
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Mark as incomplete"), "missing toggle in {html}");
    assert!(html.contains("Completed on 2023-11-14"), "missing date in {html}");
}

#[test]
fn topic_smoke_renders_saved_note() {
    let mut harness = setup_view_harness(ViewKind::Topic("basics-go", "for-loops"));
    harness
        .services
        .notes()
        .save(&key("basics_go"), &slug("for-loops"), "range over slices")
        .expect("save note");

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("range over slices"), "missing note in {html}");
    assert!(html.contains("Delete note"), "missing delete action in {html}");
    assert!(!html.contains("No notes yet."), "{html}");
}

#[test]
fn topic_smoke_renders_missing_topic() {
    let mut harness = setup_view_harness(ViewKind::Topic("basics-go", "lifetimes"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Topic not found."), "{html}");
}

#[test]
fn progress_smoke_renders_overall_and_message() {
    let mut harness = setup_view_harness(ViewKind::Progress);
    harness
        .services
        .progress()
        .mark_topic_completed(&key("basics_go"), &slug("variables"))
        .expect("mark");

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("1 of 5 topics completed"), "missing overall in {html}");
    assert!(html.contains("20%"), "missing overall percentage in {html}");
    assert!(html.contains("Every journey begins"), "missing message in {html}");
    assert!(!html.contains("Congratulations"), "{html}");
}

#[test]
fn progress_smoke_renders_congratulations_when_done() {
    let mut harness = setup_view_harness(ViewKind::Progress);
    let progress = harness.services.progress();
    let catalog = harness.services.catalog();
    for category in catalog.categories() {
        for topic in catalog.topics_for(category) {
            progress.mark_topic_completed(category, topic).expect("mark");
        }
    }

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("5 of 5 topics completed"), "{html}");
    assert!(html.contains("Congratulations!"), "missing congrats in {html}");
}

struct UnreadableStore;

impl KeyValueStore for UnreadableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("fail".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("fail".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("fail".to_string()))
    }
}

#[test]
fn progress_smoke_renders_empty_progress_when_storage_is_unreadable() {
    let storage = Storage::from_store(Arc::new(UnreadableStore));
    let mut harness = setup_view_harness_with_storage(ViewKind::Progress, storage);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("0 of 5 topics completed"), "{html}");
}

#[test]
fn corrupt_ledger_renders_as_no_progress() {
    let store = InMemoryStore::new();
    store
        .set(services::LEDGER_KEY, "{definitely not a ledger")
        .expect("seed");
    let storage = Storage::from_store(Arc::new(store));
    let mut harness = setup_view_harness_with_storage(ViewKind::Topics("basics_go"), storage);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("0 of 3 topics completed"), "{html}");
}

#[test]
fn topic_smoke_renders_completion_stored_without_offset() {
    let store = InMemoryStore::new();
    store
        .set(
            services::LEDGER_KEY,
            r#"[{"category":"basics_go","topic":"functions","completedAt":"2024-01-02T09:30:00"}]"#,
        )
        .expect("seed");
    let storage = Storage::from_store(Arc::new(store));
    let mut harness =
        setup_view_harness_with_storage(ViewKind::Topic("basics-go", "functions"), storage);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Mark as incomplete"), "{html}");
    assert!(html.contains("Completed on 2024-01-02"), "{html}");
}
