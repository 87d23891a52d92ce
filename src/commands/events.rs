use super::PromptBuilder;
use crate::error::Result;
use crate::form::FormSurface;
use tracing::debug;

/// The three trigger controls on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Generate,
    Copy,
    Reset,
}

/// Something the user did to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The form finished loading.
    Loaded,
    /// Keystroke-level edit of a field.
    Input(String),
    /// Committed change of a field (blur, checkbox click).
    Change(String),
    Click(Control),
}

impl<F: FormSurface + 'static> PromptBuilder<F> {
    /// Route one event to the matching command.
    pub async fn handle(&self, event: FormEvent) -> Result<()> {
        debug!(?event, "form event");
        match event {
            FormEvent::Loaded => self.restore(),
            FormEvent::Input(name) | FormEvent::Change(name)
                if self.accessor.schema().text_fields().any(|field| field == name) =>
            {
                self.on_field_change();
            }
            FormEvent::Change(name) if self.accessor.schema().has_toggle(&name) => {
                self.on_toggle_change();
            }
            FormEvent::Input(name) | FormEvent::Change(name) => {
                debug!(field = %name, "ignoring event for undeclared field");
            }
            FormEvent::Click(Control::Generate) => {
                self.generate()?;
            }
            FormEvent::Click(Control::Copy) => {
                self.copy_to_clipboard().await?;
            }
            FormEvent::Click(Control::Reset) => self.reset(),
        }
        Ok(())
    }
}
