//! OS clipboard through `arboard`. The arboard handle is blocking, so each
//! write runs on the blocking pool.
//!
//! On X11 and Wayland the selection is served by the process that set it, so
//! a write keeps serving it until a clipboard manager or another program takes
//! ownership, or the hold duration runs out.

use super::traits::Clipboard;
use crate::error::ClipboardError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_HOLD_DURATION: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy)]
pub struct SystemClipboard {
    hold: Duration,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::with_hold(DEFAULT_HOLD_DURATION)
    }

    /// Longest time a write keeps serving the selection on Linux.
    /// `Duration::ZERO` hands off immediately and relies on a clipboard manager.
    pub fn with_hold(hold: Duration) -> Self {
        Self { hold }
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    fn name(&self) -> &str {
        "system"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        let chars = text.chars().count();
        let hold = self.hold;
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|error| ClipboardError::Unavailable(error.to_string()))?;
            set_text(&mut clipboard, text, hold)
                .map_err(|error| ClipboardError::Write(error.to_string()))
        })
        .await
        .map_err(|error| ClipboardError::Write(format!("clipboard task failed: {error}")))??;

        debug!(chars, "prompt copied to system clipboard");
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: String,
    hold: Duration,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hold.is_zero() {
        return clipboard.set_text(text);
    }
    debug!(hold_ms = hold.as_millis(), "serving clipboard selection");
    clipboard
        .set()
        .wait_until(std::time::Instant::now() + hold)
        .text(text)
}

#[cfg(not(target_os = "linux"))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: String,
    _hold: Duration,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}
