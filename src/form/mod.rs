pub mod accessor;
pub mod fields;
pub mod state;
pub mod surface;

pub use accessor::StateAccessor;
pub use fields::{FieldKind, FieldSchema, FieldSpec};
pub use state::{FieldValue, FormState};
pub use surface::{Element, FormSurface, MemoryForm};
