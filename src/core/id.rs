use uuid::Uuid;

use crate::core::types::ObjectId;

/// Source of fresh document identifiers.
///
/// Identifiers are opaque; no uniqueness check is performed anywhere.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> ObjectId;
}

/// Default id source backed by random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&self) -> ObjectId {
        ObjectId(Uuid::new_v4().into_bytes())
    }
}
