//! The user-facing actions: generate, copy, reset, and autosave on edit.

pub mod acknowledge;
pub mod events;

pub use acknowledge::{CopyAcknowledgement, DEFAULT_ACK_DURATION};
pub use events::{Control, FormEvent};

use crate::clipboard::Clipboard;
use crate::error::{ClipboardError, PromptError};
use crate::form::surface::PROMPT_OUTPUT;
use crate::form::{FieldSchema, FormState, FormSurface, StateAccessor};
use crate::prompt::PromptComposer;
use crate::storage::SnapshotStore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Collaborators a [`PromptBuilder`] orchestrates.
pub struct PromptBuilderParts<F> {
    pub form: F,
    pub accessor: StateAccessor,
    pub snapshots: SnapshotStore,
    pub composer: PromptComposer,
    pub clipboard: Arc<dyn Clipboard>,
    pub acknowledgement: CopyAcknowledgement,
}

/// Result of a copy request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// The output surface was empty; the clipboard was not touched.
    NothingToCopy,
}

/// Command surface over an injected form, snapshot store and clipboard.
pub struct PromptBuilder<F> {
    form: Arc<Mutex<F>>,
    accessor: StateAccessor,
    snapshots: SnapshotStore,
    composer: PromptComposer,
    clipboard: Arc<dyn Clipboard>,
    acknowledgement: CopyAcknowledgement,
}

impl<F: FormSurface + 'static> PromptBuilder<F> {
    pub fn from_parts(parts: PromptBuilderParts<F>) -> Self {
        Self {
            form: Arc::new(Mutex::new(parts.form)),
            accessor: parts.accessor,
            snapshots: parts.snapshots,
            composer: parts.composer,
            clipboard: parts.clipboard,
            acknowledgement: parts.acknowledgement,
        }
    }

    fn lock_form(&self) -> MutexGuard<'_, F> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the current form.
    pub fn inspect<R>(&self, f: impl FnOnce(&F) -> R) -> R {
        f(&self.lock_form())
    }

    /// Change the form directly, the way a user typing into it would. Fire
    /// the matching [`FormEvent`] afterwards to autosave.
    pub fn edit<R>(&self, f: impl FnOnce(&mut F) -> R) -> R {
        f(&mut self.lock_form())
    }

    pub fn schema(&self) -> &FieldSchema {
        self.accessor.schema()
    }

    pub fn read_state(&self) -> FormState {
        self.accessor.read(&*self.lock_form())
    }

    pub fn output(&self) -> String {
        self.lock_form().value(PROMPT_OUTPUT).unwrap_or_default()
    }

    /// Restore the saved draft into the form, or hide dependent panels when
    /// there is none.
    pub fn restore(&self) {
        let mut form = self.lock_form();
        match self.snapshots.load() {
            Some(state) => {
                debug!(key = self.snapshots.key(), "restoring saved draft");
                self.accessor.write(&mut *form, &state);
                self.sync_panels(&mut *form, &state);
            }
            None => self.sync_panels(&mut *form, &FormState::default()),
        }
    }

    /// Compose the prompt from the current form, show it and save the draft.
    pub fn generate(&self) -> Result<String, PromptError> {
        let state = self.read_state();
        let prompt = self.composer.compose(&state)?;
        self.lock_form().set_value(PROMPT_OUTPUT, &prompt);
        self.snapshots.save(&state);
        info!(chars = prompt.chars().count(), "prompt generated");
        Ok(prompt)
    }

    /// Send the current output to the clipboard and acknowledge on the copy
    /// control. A failed write leaves the form untouched.
    pub async fn copy_to_clipboard(&self) -> Result<CopyOutcome, ClipboardError> {
        let text = self.output().trim().to_string();
        if text.is_empty() {
            debug!("nothing to copy");
            return Ok(CopyOutcome::NothingToCopy);
        }

        self.clipboard.write_text(&text).await?;
        self.acknowledgement.show(&self.form);
        Ok(CopyOutcome::Copied)
    }

    /// Forget the saved draft and blank the form and output.
    pub fn reset(&self) {
        self.snapshots.clear();
        let defaults = FormState::defaults(self.accessor.schema());
        let mut form = self.lock_form();
        self.accessor.write(&mut *form, &defaults);
        form.set_value(PROMPT_OUTPUT, "");
        self.sync_panels(&mut *form, &defaults);
        info!(key = self.snapshots.key(), "draft reset");
    }

    /// Autosave after an edit. The output is not regenerated.
    pub fn on_field_change(&self) {
        self.snapshots.save(&self.read_state());
    }

    pub fn on_toggle_change(&self) {
        let state = self.read_state();
        self.sync_panels(&mut *self.lock_form(), &state);
        self.snapshots.save(&state);
    }

    fn sync_panels(&self, form: &mut F, state: &FormState) {
        for (toggle, panel) in self.accessor.schema().toggles() {
            if let Some(panel) = panel {
                form.set_visible(panel, state.toggle(toggle));
            }
        }
    }
}
