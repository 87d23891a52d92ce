use crate::error::ConfigError;
use std::collections::HashSet;

pub const TEACHER: &str = "teacher";
pub const DATE: &str = "date";
pub const GROUP: &str = "group";
pub const DURATION: &str = "duration";
pub const TITLE: &str = "title";
pub const BRIEF: &str = "brief";
pub const CONSTRAINTS: &str = "constraints";
pub const SLIDES_NOTES: &str = "slidesNotes";
pub const USE_SLIDES: &str = "useSlides";

/// Panel holding the slide notes input; shown only while `useSlides` is checked.
pub const SLIDES_NOTES_PANEL: &str = "slidesNotesWrap";

/// Generic marker for information the downstream model must ask for.
pub const ADD_HERE: &str = "[ADD HERE]";
/// Duration is never left open: the plan assumes a default length instead.
pub const ASSUMED_DURATION: &str = "[ASSUMED: 50 mins]";
pub const NONE_PROVIDED: &str = "None provided.";

/// What kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, replaced by `fallback` in the prompt when left empty.
    Text { fallback: &'static str },
    /// Checkbox; `reveals` names the panel whose visibility follows it.
    Toggle { reveals: Option<&'static str> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Human-readable label shown next to the input
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str, fallback: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text { fallback },
        }
    }

    pub const fn toggle(
        name: &'static str,
        label: &'static str,
        reveals: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Toggle { reveals },
        }
    }

    pub const fn is_text(&self) -> bool {
        matches!(self.kind, FieldKind::Text { .. })
    }
}

/// Ordered declaration of the fields a form carries.
///
/// The schema also owns the storage key, so two schema shapes never read each
/// other's snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    variant: &'static str,
    storage_key: &'static str,
    fields: Vec<FieldSpec>,
}

impl FieldSchema {
    /// Build a custom schema. Field names must be unique.
    pub fn new(
        variant: &'static str,
        storage_key: &'static str,
        fields: Vec<FieldSpec>,
    ) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name) {
                return Err(ConfigError::Validation(format!(
                    "duplicate field `{}` in schema {variant}",
                    field.name
                )));
            }
        }
        Ok(Self {
            variant,
            storage_key,
            fields,
        })
    }

    /// The earlier revision: lesson details only.
    pub fn streamlined_v1() -> Self {
        Self {
            variant: "v1",
            storage_key: "lessonPlanPromptBuilder.streamlined.v1",
            fields: Self::lesson_fields().to_vec(),
        }
    }

    /// The later revision: adds optional slide notes and the slides toggle.
    pub fn streamlined_v2() -> Self {
        let mut fields = Self::lesson_fields().to_vec();
        fields.push(FieldSpec::text(
            SLIDES_NOTES,
            "Optional notes about the slides",
            NONE_PROVIDED,
        ));
        fields.push(FieldSpec::toggle(
            USE_SLIDES,
            "I will attach slides",
            Some(SLIDES_NOTES_PANEL),
        ));
        Self {
            variant: "v2",
            storage_key: "lessonPlanPromptBuilder.streamlined.v2",
            fields,
        }
    }

    /// Look up a built-in schema by its variant name.
    pub fn by_variant(variant: &str) -> Option<Self> {
        match variant {
            "v1" => Some(Self::streamlined_v1()),
            "v2" => Some(Self::streamlined_v2()),
            _ => None,
        }
    }

    const fn lesson_fields() -> [FieldSpec; 7] {
        [
            FieldSpec::text(TEACHER, "Teacher", ADD_HERE),
            FieldSpec::text(DATE, "Date", ADD_HERE),
            FieldSpec::text(GROUP, "Teaching group", ADD_HERE),
            FieldSpec::text(DURATION, "Duration", ASSUMED_DURATION),
            FieldSpec::text(TITLE, "Lesson title/topic", ADD_HERE),
            FieldSpec::text(BRIEF, "Brief lesson description", ADD_HERE),
            FieldSpec::text(CONSTRAINTS, "Context / constraints", NONE_PROVIDED),
        ]
    }

    pub fn variant(&self) -> &'static str {
        self.variant
    }

    pub fn storage_key(&self) -> &'static str {
        self.storage_key
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn text_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|field| field.is_text())
            .map(|field| field.name)
    }

    /// Toggle names paired with the panel each one reveals, if any.
    pub fn toggles(&self) -> impl Iterator<Item = (&'static str, Option<&'static str>)> + '_ {
        self.fields.iter().filter_map(|field| match field.kind {
            FieldKind::Toggle { reveals } => Some((field.name, reveals)),
            FieldKind::Text { .. } => None,
        })
    }

    pub fn has_toggle(&self, name: &str) -> bool {
        self.toggles().any(|(toggle, _)| toggle == name)
    }

    /// Fallback marker for an empty text field. `None` for toggles and unknown names.
    pub fn fallback(&self, name: &str) -> Option<&'static str> {
        match self.field(name)?.kind {
            FieldKind::Text { fallback } => Some(fallback),
            FieldKind::Toggle { .. } => None,
        }
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::streamlined_v2()
    }
}
