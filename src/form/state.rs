use super::fields::{FieldKind, FieldSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A single field value as it appears in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Toggle(bool),
    Text(String),
}

/// Complete value of every field at one point in time.
///
/// Reads are tolerant: an absent key yields the empty string or `false`.
/// States are replaced wholesale; the `with_*` helpers consume and return a
/// new value rather than editing a shared one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
}

impl FormState {
    /// All-defaults state for `schema`: every declared key present.
    pub fn defaults(schema: &FieldSchema) -> Self {
        schema
            .fields()
            .iter()
            .map(|field| {
                let value = match field.kind {
                    FieldKind::Text { .. } => FieldValue::Text(String::new()),
                    FieldKind::Toggle { .. } => FieldValue::Toggle(false),
                };
                (field.name.to_string(), value)
            })
            .collect()
    }

    /// Read each declared field out of a snapshot object on its own.
    ///
    /// Missing keys, `null` and values of the wrong JSON type become that
    /// field's default; the remaining fields are kept. Undeclared keys are
    /// dropped.
    pub fn from_snapshot(schema: &FieldSchema, object: &Map<String, Value>) -> Self {
        schema
            .fields()
            .iter()
            .map(|field| {
                let stored = object.get(field.name);
                let value = match field.kind {
                    FieldKind::Text { .. } => FieldValue::Text(
                        stored.and_then(Value::as_str).unwrap_or_default().to_string(),
                    ),
                    FieldKind::Toggle { .. } => {
                        FieldValue::Toggle(stored.and_then(Value::as_bool).unwrap_or(false))
                    }
                };
                (field.name.to_string(), value)
            })
            .collect()
    }

    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    pub fn toggle(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(FieldValue::Toggle(true)))
    }

    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.values.insert(name.to_string(), FieldValue::Text(value.into()));
        self
    }

    pub fn with_toggle(mut self, name: &str, checked: bool) -> Self {
        self.values.insert(name.to_string(), FieldValue::Toggle(checked));
        self
    }

    /// Reshape to `schema`: declared keys only, text trimmed, toggles coerced.
    pub fn normalized(&self, schema: &FieldSchema) -> Self {
        schema
            .fields()
            .iter()
            .map(|field| {
                let value = match field.kind {
                    FieldKind::Text { .. } => {
                        FieldValue::Text(self.text(field.name).trim().to_string())
                    }
                    FieldKind::Toggle { .. } => FieldValue::Toggle(self.toggle(field.name)),
                };
                (field.name.to_string(), value)
            })
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, FieldValue)> for FormState {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
