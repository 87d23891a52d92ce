use crate::error::PromptError;
use std::error::Error as _;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tera::Tera;

/// Tera-backed template engine for building structured prompts.
pub struct TeraEngine {
    tera: Tera,
}

impl TeraEngine {
    /// Create with inline templates (no filesystem).
    pub fn new() -> Self {
        Self {
            tera: Tera::default(),
        }
    }

    /// Register a template from a string.
    pub fn add_template(&mut self, name: &str, content: &str) -> Result<(), PromptError> {
        self.tera
            .add_raw_template(name, content)
            .map_err(|error| PromptError::Render(describe(&error)))
    }

    /// Replace `name` with `<dir>/<name>.tera` when that file exists.
    ///
    /// Returns whether an override was registered.
    pub fn override_from_dir(&mut self, dir: &Path, name: &str) -> Result<bool, PromptError> {
        let path = dir.join(format!("{name}.tera"));
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(false),
            Err(error) => {
                return Err(PromptError::Override {
                    path: path.display().to_string(),
                    message: error.to_string(),
                });
            }
        };
        self.add_template(name, &content)?;
        Ok(true)
    }

    /// Render a named template with the given context.
    pub fn render(
        &self,
        template_name: &str,
        context: &tera::Context,
    ) -> Result<String, PromptError> {
        self.tera
            .render(template_name, context)
            .map_err(|error| match error.kind {
                tera::ErrorKind::TemplateNotFound(ref name) => PromptError::NotFound(name.clone()),
                _ => PromptError::Render(describe(&error)),
            })
    }
}

impl Default for TeraEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Tera keeps the useful detail in the source chain; flatten it.
fn describe(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tera::Context;

    #[test]
    fn new_creates_empty_engine() {
        let engine = TeraEngine::new();
        let ctx = Context::new();
        assert!(matches!(
            engine.render("nonexistent", &ctx),
            Err(PromptError::NotFound(name)) if name == "nonexistent"
        ));
    }

    #[test]
    fn add_template_and_render() {
        let mut engine = TeraEngine::new();
        engine.add_template("greeting", "Teacher: {{ teacher }}").unwrap();

        let mut ctx = Context::new();
        ctx.insert("teacher", "A. Smith");
        assert_eq!(engine.render("greeting", &ctx).unwrap(), "Teacher: A. Smith");
    }

    #[test]
    fn render_missing_variable_fails_with_detail() {
        let mut engine = TeraEngine::new();
        engine.add_template("greeting", "Teacher: {{ teacher }}").unwrap();

        let err = engine.render("greeting", &Context::new()).unwrap_err();
        assert!(matches!(err, PromptError::Render(_)));
        assert!(err.to_string().contains("teacher"));
    }

    #[test]
    fn values_are_not_escaped() {
        let mut engine = TeraEngine::new();
        engine.add_template("brief", "{{ brief }}").unwrap();

        let mut ctx = Context::new();
        ctx.insert("brief", "Newton's laws <intro> & {{ recap }}");
        assert_eq!(
            engine.render("brief", &ctx).unwrap(),
            "Newton's laws <intro> & {{ recap }}"
        );
    }

    #[test]
    fn malformed_template_rejected() {
        let mut engine = TeraEngine::new();
        assert!(engine.add_template("bad", "{% if %}").is_err());
    }

    #[test]
    fn add_template_replaces_existing() {
        let mut engine = TeraEngine::new();
        engine.add_template("t", "version 1").unwrap();
        engine.add_template("t", "version 2").unwrap();
        assert_eq!(engine.render("t", &Context::new()).unwrap(), "version 2");
    }

    #[test]
    fn override_from_dir_only_when_file_exists() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("no_slides.tera"), "custom block").unwrap();

        let mut engine = TeraEngine::new();
        engine.add_template("no_slides", "builtin block").unwrap();
        engine.add_template("slides_attached", "builtin slides").unwrap();

        assert!(engine.override_from_dir(tmp.path(), "no_slides").unwrap());
        assert!(!engine.override_from_dir(tmp.path(), "slides_attached").unwrap());

        let ctx = Context::new();
        assert_eq!(engine.render("no_slides", &ctx).unwrap(), "custom block");
        assert_eq!(engine.render("slides_attached", &ctx).unwrap(), "builtin slides");
    }
}
