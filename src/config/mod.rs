pub mod schema;

pub use schema::{ClipboardConfig, Config, PromptConfig, StorageConfig};
