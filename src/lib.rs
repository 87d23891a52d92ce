#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod prompt;
pub mod storage;
pub mod ui;

pub use commands::{Control, CopyOutcome, FormEvent, PromptBuilder, PromptBuilderParts};
pub use config::Config;
pub use error::{LessonPromptError, Result};
pub use form::{FieldSchema, FormState, MemoryForm};
pub use prompt::PromptComposer;
