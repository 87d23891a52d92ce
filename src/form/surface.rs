use super::fields::{FieldKind, FieldSchema};
use std::collections::BTreeMap;

pub const PROMPT_OUTPUT: &str = "promptOutput";
pub const GENERATE_BUTTON: &str = "generateBtn";
pub const COPY_BUTTON: &str = "copyBtn";
pub const RESET_BUTTON: &str = "resetBtn";

pub const COPY_IDLE_LABEL: &str = "Copy prompt";
pub const COPY_DONE_LABEL: &str = "Copied!";

/// The visible form, addressed by element name.
///
/// Elements that do not exist degrade gracefully: getters return `None` and
/// setters do nothing.
pub trait FormSurface: Send {
    fn value(&self, name: &str) -> Option<String>;
    fn set_value(&mut self, name: &str, value: &str);
    fn checked(&self, name: &str) -> Option<bool>;
    fn set_checked(&mut self, name: &str, checked: bool);
    fn set_visible(&mut self, name: &str, visible: bool);
    fn set_label(&mut self, name: &str, label: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Input(String),
    Checkbox(bool),
    Panel { visible: bool },
    Button { label: String },
}

/// In-process form surface.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    elements: BTreeMap<String, Element>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out one element per declared field plus the output, the three
    /// controls and every toggle's dependent panel.
    pub fn for_schema(schema: &FieldSchema) -> Self {
        let mut form = Self::new()
            .with_element(PROMPT_OUTPUT, Element::Input(String::new()))
            .with_element(GENERATE_BUTTON, button("Generate prompt"))
            .with_element(COPY_BUTTON, button(COPY_IDLE_LABEL))
            .with_element(RESET_BUTTON, button("Reset"));

        for field in schema.fields() {
            form = match field.kind {
                FieldKind::Text { .. } => {
                    form.with_element(field.name, Element::Input(String::new()))
                }
                FieldKind::Toggle { reveals } => {
                    let form = form.with_element(field.name, Element::Checkbox(false));
                    match reveals {
                        Some(panel) => form.with_element(panel, Element::Panel { visible: true }),
                        None => form,
                    }
                }
            };
        }
        form
    }

    pub fn with_element(mut self, name: &str, element: Element) -> Self {
        self.elements.insert(name.to_string(), element);
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.elements.remove(name);
        self
    }

    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements.get(name)
    }

    pub fn is_visible(&self, name: &str) -> Option<bool> {
        match self.elements.get(name)? {
            Element::Panel { visible } => Some(*visible),
            _ => None,
        }
    }

    pub fn label(&self, name: &str) -> Option<&str> {
        match self.elements.get(name)? {
            Element::Button { label } => Some(label),
            _ => None,
        }
    }
}

fn button(label: &str) -> Element {
    Element::Button {
        label: label.to_string(),
    }
}

impl FormSurface for MemoryForm {
    fn value(&self, name: &str) -> Option<String> {
        match self.elements.get(name)? {
            Element::Input(value) => Some(value.clone()),
            _ => None,
        }
    }

    fn set_value(&mut self, name: &str, value: &str) {
        if let Some(Element::Input(current)) = self.elements.get_mut(name) {
            value.clone_into(current);
        }
    }

    fn checked(&self, name: &str) -> Option<bool> {
        match self.elements.get(name)? {
            Element::Checkbox(checked) => Some(*checked),
            _ => None,
        }
    }

    fn set_checked(&mut self, name: &str, checked: bool) {
        if let Some(Element::Checkbox(current)) = self.elements.get_mut(name) {
            *current = checked;
        }
    }

    fn set_visible(&mut self, name: &str, visible: bool) {
        if let Some(Element::Panel { visible: current }) = self.elements.get_mut(name) {
            *current = visible;
        }
    }

    fn set_label(&mut self, name: &str, label: &str) {
        if let Some(Element::Button { label: current }) = self.elements.get_mut(name) {
            label.clone_into(current);
        }
    }
}
