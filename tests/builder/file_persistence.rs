use crate::harness::{builder, memory_clipboard};
use lessonprompt::form::fields::{CONSTRAINTS, TEACHER, USE_SLIDES};
use lessonprompt::form::FormSurface;
use lessonprompt::storage::{FileStore, KeyValueStore};
use lessonprompt::{FieldSchema, FormEvent};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn snapshot_is_plain_json_under_versioned_key() {
    let tmp = TempDir::new().unwrap();
    let store = Arc::new(FileStore::new(tmp.path()));
    let builder = builder(FieldSchema::streamlined_v2(), store, memory_clipboard());

    builder.edit(|form| form.set_value(TEACHER, "A. Smith"));
    builder
        .handle(FormEvent::Input(TEACHER.to_string()))
        .await
        .unwrap();

    let raw = fs::read_to_string(
        tmp.path()
            .join("lessonPlanPromptBuilder.streamlined.v2.json"),
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[TEACHER], "A. Smith");
    assert_eq!(json[USE_SLIDES], false);
    assert_eq!(json[CONSTRAINTS], "");
}

#[tokio::test]
async fn corrupt_file_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let store = Arc::new(FileStore::new(tmp.path()));
    store
        .set("lessonPlanPromptBuilder.streamlined.v2", "{\"teacher\": 42")
        .unwrap();

    let builder = builder(FieldSchema::streamlined_v2(), store, memory_clipboard());
    builder.handle(FormEvent::Loaded).await.unwrap();
    assert_eq!(builder.read_state().text(TEACHER), "");
}

#[tokio::test]
async fn unwritable_storage_does_not_block_editing() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    fs::write(&blocker, "file in the way").unwrap();

    let builder = builder(
        FieldSchema::streamlined_v2(),
        Arc::new(FileStore::new(&blocker)),
        memory_clipboard(),
    );
    builder.edit(|form| form.set_value(TEACHER, "A. Smith"));
    builder
        .handle(FormEvent::Input(TEACHER.to_string()))
        .await
        .unwrap();
    assert_eq!(builder.read_state().text(TEACHER), "A. Smith");
}
