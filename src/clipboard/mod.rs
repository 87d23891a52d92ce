pub mod memory;
pub mod system;
pub mod traits;

pub use memory::MemoryClipboard;
pub use system::{DEFAULT_HOLD_DURATION, SystemClipboard};
pub use traits::Clipboard;
