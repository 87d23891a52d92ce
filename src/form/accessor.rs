use super::fields::FieldSchema;
use super::state::{FieldValue, FormState};
use super::surface::FormSurface;
use std::sync::Arc;

/// Moves whole [`FormState`] records in and out of a [`FormSurface`].
#[derive(Debug, Clone)]
pub struct StateAccessor {
    schema: Arc<FieldSchema>,
}

impl StateAccessor {
    pub fn new(schema: Arc<FieldSchema>) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    /// Snapshot the form. Missing inputs read as empty text or unchecked.
    pub fn read(&self, form: &dyn FormSurface) -> FormState {
        let texts = self.schema.text_fields().map(|name| {
            let value = form.value(name).unwrap_or_default();
            (name.to_string(), FieldValue::Text(value.trim().to_string()))
        });
        let toggles = self.schema.toggles().map(|(name, _)| {
            let checked = form.checked(name).unwrap_or(false);
            (name.to_string(), FieldValue::Toggle(checked))
        });
        texts.chain(toggles).collect()
    }

    /// Push literal field values into the form. Panel visibility is left to
    /// the caller.
    pub fn write(&self, form: &mut dyn FormSurface, state: &FormState) {
        for name in self.schema.text_fields() {
            form.set_value(name, state.text(name));
        }
        for (name, _) in self.schema.toggles() {
            form.set_checked(name, state.toggle(name));
        }
    }
}
