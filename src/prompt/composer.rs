use super::engine::TeraEngine;
use super::templates::{
    LESSON_PLAN_NAME, LESSON_PLAN_TEMPLATE, NO_SLIDES_NAME, NO_SLIDES_TEMPLATE,
    SLIDES_ATTACHED_NAME, SLIDES_ATTACHED_TEMPLATE,
};
use crate::error::PromptError;
use crate::form::fields::{ADD_HERE, USE_SLIDES};
use crate::form::{FieldSchema, FormState};
use std::path::Path;
use std::sync::Arc;
use tera::Context;
use tracing::debug;

/// Variable the outer template receives the selected slides block under.
const SLIDES_BLOCK_VAR: &str = "slides_block";

/// Turns a [`FormState`] into the final prompt text.
///
/// With the built-in templates composition cannot fail and is deterministic:
/// the same state always yields the same bytes. Errors are only possible once
/// templates have been overridden from disk.
///
/// Every field the built-in templates mention is always bound. Fields the
/// schema does not declare render as their standard fallback marker.
pub struct PromptComposer {
    engine: TeraEngine,
    schema: Arc<FieldSchema>,
    template_fields: FieldSchema,
}

impl PromptComposer {
    pub fn new(schema: Arc<FieldSchema>) -> Result<Self, PromptError> {
        let mut engine = TeraEngine::new();
        engine.add_template(LESSON_PLAN_NAME, LESSON_PLAN_TEMPLATE)?;
        engine.add_template(SLIDES_ATTACHED_NAME, SLIDES_ATTACHED_TEMPLATE)?;
        engine.add_template(NO_SLIDES_NAME, NO_SLIDES_TEMPLATE)?;
        Ok(Self {
            engine,
            schema,
            template_fields: FieldSchema::streamlined_v2(),
        })
    }

    /// Replace built-in templates with any `<name>.tera` files found in `dir`.
    pub fn with_overrides(mut self, dir: &Path) -> Result<Self, PromptError> {
        for name in [LESSON_PLAN_NAME, SLIDES_ATTACHED_NAME, NO_SLIDES_NAME] {
            if self.engine.override_from_dir(dir, name)? {
                debug!(template = name, dir = %dir.display(), "template overridden");
            }
        }
        Ok(self)
    }

    /// Trimmed value of a text field, or its fallback marker when empty.
    pub fn display_value<'a>(&self, state: &'a FormState, name: &str) -> &'a str {
        let value = state.text(name).trim();
        if value.is_empty() {
            self.schema.fallback(name).unwrap_or_default()
        } else {
            value
        }
    }

    /// Slides block selection. Schemas without the toggle always get the
    /// no-slides block.
    pub fn slides_attached(&self, state: &FormState) -> bool {
        self.schema.has_toggle(USE_SLIDES) && state.toggle(USE_SLIDES)
    }

    pub fn compose(&self, state: &FormState) -> Result<String, PromptError> {
        let mut ctx = Context::new();
        for name in self.template_fields.text_fields() {
            let fallback = self.template_fields.fallback(name).unwrap_or(ADD_HERE);
            ctx.insert(name, fallback);
        }
        for name in self.schema.text_fields() {
            ctx.insert(name, self.display_value(state, name));
        }

        let block_name = if self.slides_attached(state) {
            SLIDES_ATTACHED_NAME
        } else {
            NO_SLIDES_NAME
        };
        let block = self.engine.render(block_name, &ctx)?;
        ctx.insert(SLIDES_BLOCK_VAR, block.trim());

        let prompt = self.engine.render(LESSON_PLAN_NAME, &ctx)?;
        Ok(prompt.trim().to_string())
    }
}
