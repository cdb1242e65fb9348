use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::schema::extract::shape_of;
use crate::schema::record::Record;

/// Opaque 16-byte document identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub [u8; 16]);

impl ObjectId {
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ObjectId(")?;
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

/// A typed scalar projected from a record field.
///
/// `Text` and `Integer` are the indexable kinds; `Float` and `Boolean`
/// participate in linear-scan equality but contribute nothing to index
/// fingerprints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

/// The canonical stored record: identifier plus field map.
///
/// Immutable once inserted. Ownership is shared between the store's
/// document vector and every index leaf holding it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: ObjectId,
    pub fields: HashMap<String, FieldValue>,
}

impl Document {
    pub fn new(id: ObjectId, fields: HashMap<String, FieldValue>) -> Self {
        Document { id, fields }
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Populate `target` from this document's field map, matching by field
    /// name. Numeric coercion is the target's business inside `write_field`;
    /// fields the document does not carry are left untouched.
    pub fn unmarshal(&self, target: &mut dyn Record) {
        let shape = shape_of(target);
        for spec in &shape.fields {
            if let Some(value) = self.fields.get(&spec.name) {
                target.write_field(&spec.name, value);
            }
        }
    }
}
