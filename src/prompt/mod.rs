mod composer;
mod engine;
pub mod templates;

pub use composer::PromptComposer;
pub use engine::TeraEngine;
