use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::core::types::FieldValue;
use crate::schema::record::{Record, Shape};

/// Process-wide shape cache keyed by nominal type name. Initialized entries
/// are never invalidated, so concurrent read-after-first-write is safe.
static SHAPE_CACHE: OnceLock<RwLock<HashMap<&'static str, Arc<Shape>>>> = OnceLock::new();

fn cache() -> &'static RwLock<HashMap<&'static str, Arc<Shape>>> {
    SHAPE_CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Resolve the shape of a record, caching by `type_name`. An empty type
/// name bypasses the cache and re-describes the value each call.
pub fn shape_of(value: &dyn Record) -> Arc<Shape> {
    let name = value.type_name();
    if name.is_empty() {
        return Arc::new(Shape {
            name: "",
            fields: value.describe(),
        });
    }

    if let Some(shape) = cache().read().get(name) {
        return Arc::clone(shape);
    }

    // first use of this shape; a racing thread inserting the same name wins
    let mut shapes = cache().write();
    let shape = shapes.entry(name).or_insert_with(|| {
        Arc::new(Shape {
            name,
            fields: value.describe(),
        })
    });
    Arc::clone(shape)
}

/// Project a record through its shape into a field map. Total: fields the
/// value does not carry are simply absent from the result.
pub fn extract(value: &dyn Record) -> HashMap<String, FieldValue> {
    let shape = shape_of(value);
    let mut fields = HashMap::with_capacity(shape.fields.len());
    for spec in &shape.fields {
        if let Some(v) = value.read_field(&spec.name) {
            fields.insert(spec.name.clone(), v);
        }
    }
    fields
}
