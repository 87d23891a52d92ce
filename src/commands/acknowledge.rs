use crate::form::FormSurface;
use crate::form::surface::{COPY_BUTTON, COPY_DONE_LABEL, COPY_IDLE_LABEL};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

pub const DEFAULT_ACK_DURATION: Duration = Duration::from_millis(900);

/// Brief "Copied!" label on the copy control.
///
/// Each `show` restarts the countdown. Earlier timers still fire, but only the
/// most recent one restores the idle label.
#[derive(Debug, Clone)]
pub struct CopyAcknowledgement {
    duration: Duration,
    generation: Arc<AtomicU64>,
}

impl CopyAcknowledgement {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn show<F: FormSurface + 'static>(&self, form: &Arc<Mutex<F>>) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        form.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .set_label(COPY_BUTTON, COPY_DONE_LABEL);

        let form = Arc::clone(form);
        let latest = Arc::clone(&self.generation);
        let duration = self.duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if latest.load(Ordering::SeqCst) == generation {
                form.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .set_label(COPY_BUTTON, COPY_IDLE_LABEL);
            }
        });
    }
}

impl Default for CopyAcknowledgement {
    fn default() -> Self {
        Self::new(DEFAULT_ACK_DURATION)
    }
}
