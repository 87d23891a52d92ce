use crate::harness::{builder, memory_clipboard};
use lessonprompt::form::fields::{
    BRIEF, DURATION, GROUP, SLIDES_NOTES, SLIDES_NOTES_PANEL, TEACHER, TITLE, USE_SLIDES,
};
use lessonprompt::form::FormSurface;
use lessonprompt::storage::{MemoryStore, SnapshotStore};
use lessonprompt::{Control, FieldSchema, FormEvent, FormState, PromptBuilder, MemoryForm};
use std::sync::Arc;

async fn type_field(builder: &PromptBuilder<MemoryForm>, field: &str, value: &str) {
    builder.edit(|form| form.set_value(field, value));
    builder
        .handle(FormEvent::Input(field.to_string()))
        .await
        .expect("input event");
}

async fn set_slides(builder: &PromptBuilder<MemoryForm>, on: bool) {
    builder.edit(|form| form.set_checked(USE_SLIDES, on));
    builder
        .handle(FormEvent::Change(USE_SLIDES.to_string()))
        .await
        .expect("toggle event");
}

async fn fill_forces_lesson(builder: &PromptBuilder<MemoryForm>) {
    type_field(builder, TEACHER, "A. Smith").await;
    type_field(builder, GROUP, "Y10").await;
    type_field(builder, TITLE, "Forces").await;
    type_field(builder, BRIEF, "Newton's laws intro").await;
}

#[tokio::test]
async fn forces_lesson_without_slides() {
    let builder = builder(
        FieldSchema::streamlined_v2(),
        Arc::new(MemoryStore::new()),
        memory_clipboard(),
    );
    builder.handle(FormEvent::Loaded).await.unwrap();
    fill_forces_lesson(&builder).await;

    builder
        .handle(FormEvent::Click(Control::Generate))
        .await
        .unwrap();
    let prompt = builder.output();

    assert!(prompt.contains("Teacher: A. Smith"));
    assert!(prompt.contains("Duration: [ASSUMED: 50 mins]"));
    assert!(prompt.contains("Context / constraints (must follow):\nNone provided."));
    assert!(prompt.contains("- No slides are attached (or I am not providing them)."));
    assert!(!prompt.contains("(Slide 3)"));
    assert!(!prompt.contains("SLIDES/POWERPOINT (IMPORTANT):"));
}

#[tokio::test]
async fn forces_lesson_with_slides() {
    let builder = builder(
        FieldSchema::streamlined_v2(),
        Arc::new(MemoryStore::new()),
        memory_clipboard(),
    );
    builder.handle(FormEvent::Loaded).await.unwrap();
    fill_forces_lesson(&builder).await;
    set_slides(&builder, true).await;
    type_field(&builder, SLIDES_NOTES, "Topic: momentum, slides 1-10").await;

    builder
        .handle(FormEvent::Click(Control::Generate))
        .await
        .unwrap();
    let prompt = builder.output();

    assert!(prompt.contains("SLIDES/POWERPOINT (IMPORTANT):"));
    assert!(prompt.contains("Topic: momentum, slides 1-10"));
    assert!(!prompt.contains("No slides are attached"));
}

#[tokio::test]
async fn generate_then_copy_puts_prompt_on_clipboard() {
    let clipboard = memory_clipboard();
    let builder = builder(
        FieldSchema::streamlined_v2(),
        Arc::new(MemoryStore::new()),
        clipboard.clone(),
    );
    builder.handle(FormEvent::Loaded).await.unwrap();
    type_field(&builder, DURATION, "60 mins").await;

    builder
        .handle(FormEvent::Click(Control::Copy))
        .await
        .unwrap();
    assert_eq!(clipboard.contents(), None);

    builder
        .handle(FormEvent::Click(Control::Generate))
        .await
        .unwrap();
    builder
        .handle(FormEvent::Click(Control::Copy))
        .await
        .unwrap();
    let copied = clipboard.contents().unwrap();
    assert!(copied.contains("Duration: 60 mins"));
    assert_eq!(copied, builder.output());
}

#[tokio::test]
async fn reset_clears_all_observable_state() {
    let store = Arc::new(MemoryStore::new());
    let schema = FieldSchema::streamlined_v2();
    let snapshots = SnapshotStore::new(store.clone(), &schema);
    let builder = builder(schema.clone(), store, memory_clipboard());

    builder.handle(FormEvent::Loaded).await.unwrap();
    fill_forces_lesson(&builder).await;
    set_slides(&builder, true).await;
    builder
        .handle(FormEvent::Click(Control::Generate))
        .await
        .unwrap();

    builder
        .handle(FormEvent::Click(Control::Reset))
        .await
        .unwrap();

    assert_eq!(builder.read_state(), FormState::defaults(&schema));
    assert_eq!(builder.output(), "");
    assert_eq!(snapshots.load(), None);
    assert_eq!(
        builder.inspect(|form| form.is_visible(SLIDES_NOTES_PANEL)),
        Some(false)
    );
}

#[tokio::test]
async fn draft_survives_reload() {
    let store = Arc::new(MemoryStore::new());
    let first = builder(FieldSchema::streamlined_v2(), store.clone(), memory_clipboard());
    first.handle(FormEvent::Loaded).await.unwrap();
    fill_forces_lesson(&first).await;
    set_slides(&first, true).await;
    let before = first.read_state();

    let second = builder(FieldSchema::streamlined_v2(), store, memory_clipboard());
    second.handle(FormEvent::Loaded).await.unwrap();
    assert_eq!(second.read_state(), before);
    assert_eq!(
        second.inspect(|form| form.is_visible(SLIDES_NOTES_PANEL)),
        Some(true)
    );
    assert_eq!(second.output(), "");
}

#[tokio::test]
async fn schema_change_starts_from_a_blank_draft() {
    let store = Arc::new(MemoryStore::new());
    let v1 = builder(FieldSchema::streamlined_v1(), store.clone(), memory_clipboard());
    v1.handle(FormEvent::Loaded).await.unwrap();
    fill_forces_lesson(&v1).await;

    let v2 = builder(FieldSchema::streamlined_v2(), store, memory_clipboard());
    v2.handle(FormEvent::Loaded).await.unwrap();
    assert_eq!(
        v2.read_state(),
        FormState::defaults(&FieldSchema::streamlined_v2())
    );
}
