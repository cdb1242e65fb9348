use std::collections::HashMap;
use std::sync::Arc;

use crate::core::types::FieldValue;
use crate::index::index::Index;

/// Pick the index able to serve an equality query: its field list must
/// equal the query's field set exactly (subsets and supersets never
/// match). The first registered index with that field set wins, which is
/// unique as long as index names are unique.
pub fn select_index(
    indexes: &[Arc<Index>],
    query_values: &HashMap<String, FieldValue>,
) -> Option<Arc<Index>> {
    if query_values.is_empty() {
        return None;
    }
    indexes
        .iter()
        .find(|index| {
            index.fields.len() == query_values.len()
                && index.fields.iter().all(|f| query_values.contains_key(f))
        })
        .cloned()
}
