use serde::{Deserialize, Serialize};

use crate::core::types::FieldValue;

/// Scalar kind of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Boolean,
}

/// Ordered field descriptor for one record shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(name: &str, kind: FieldKind) -> Self {
        FieldSpec {
            name: name.to_string(),
            kind,
        }
    }

    pub fn text(name: &str) -> Self {
        FieldSpec::new(name, FieldKind::Text)
    }

    pub fn integer(name: &str) -> Self {
        FieldSpec::new(name, FieldKind::Integer)
    }

    pub fn float(name: &str) -> Self {
        FieldSpec::new(name, FieldKind::Float)
    }

    pub fn boolean(name: &str) -> Self {
        FieldSpec::new(name, FieldKind::Boolean)
    }
}

/// A record shape: nominal name plus ordered field descriptors.
#[derive(Debug, Clone)]
pub struct Shape {
    pub name: &'static str,
    pub fields: Vec<FieldSpec>,
}

/// The introspection seam between caller-defined values and the store.
///
/// Implementations describe their fields in a deterministic order and read
/// them out as scalars. Query values are records too; a throwaway query
/// shape can return an empty `type_name` to stay out of the shape cache.
pub trait Record {
    /// Nominal shape name. Must be stable per shape; an empty name bypasses
    /// the shape cache so the fields are re-described on every use.
    fn type_name(&self) -> &'static str;

    /// Ordered field descriptors for this shape.
    fn describe(&self) -> Vec<FieldSpec>;

    /// Read one field by name. `None` means the record does not carry the
    /// field.
    fn read_field(&self, name: &str) -> Option<FieldValue>;

    /// Write one field by name, coercing numeric kinds as needed. Targets
    /// of `Document::unmarshal` override this; query shapes can keep the
    /// default no-op.
    fn write_field(&mut self, name: &str, value: &FieldValue) {
        let _ = (name, value);
    }
}
