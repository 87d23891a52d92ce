use lessonprompt::clipboard::{Clipboard, MemoryClipboard};
use lessonprompt::commands::CopyAcknowledgement;
use lessonprompt::form::{FieldSchema, StateAccessor};
use lessonprompt::storage::{KeyValueStore, SnapshotStore};
use lessonprompt::{MemoryForm, PromptBuilder, PromptBuilderParts, PromptComposer};
use std::sync::Arc;

/// Assemble a builder over an in-process form and the given collaborators.
pub fn builder(
    schema: FieldSchema,
    store: Arc<dyn KeyValueStore>,
    clipboard: Arc<dyn Clipboard>,
) -> PromptBuilder<MemoryForm> {
    let schema = Arc::new(schema);
    PromptBuilder::from_parts(PromptBuilderParts {
        form: MemoryForm::for_schema(&schema),
        accessor: StateAccessor::new(Arc::clone(&schema)),
        snapshots: SnapshotStore::new(store, &schema),
        composer: PromptComposer::new(Arc::clone(&schema)).expect("built-in templates parse"),
        clipboard,
        acknowledgement: CopyAcknowledgement::default(),
    })
}

pub fn memory_clipboard() -> Arc<MemoryClipboard> {
    Arc::new(MemoryClipboard::new())
}
