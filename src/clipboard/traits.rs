use crate::error::ClipboardError;
use async_trait::async_trait;

/// Destination for finished prompt text.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Backend name (for logging)
    fn name(&self) -> &str;

    /// Replace the clipboard contents. Completes once the text is in place.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
