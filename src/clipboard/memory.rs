use super::traits::Clipboard;
use crate::error::ClipboardError;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-process clipboard. Holds the last text written; can be built to refuse
/// every write.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    refuse_writes: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing() -> Self {
        Self {
            contents: Mutex::new(None),
            refuse_writes: true,
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .ok()
            .and_then(|contents| contents.clone())
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.refuse_writes {
            return Err(ClipboardError::Write("write refused".into()));
        }
        let mut contents = self
            .contents
            .lock()
            .map_err(|error| ClipboardError::Unavailable(format!("lock error: {error}")))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}
