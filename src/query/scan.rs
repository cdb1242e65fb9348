use std::collections::HashMap;
use std::sync::Arc;

use crate::core::types::{Document, FieldValue};

/// Exact-equality match of every queried field against a document. An
/// empty query matches everything.
pub fn matches(doc: &Document, query_values: &HashMap<String, FieldValue>) -> bool {
    query_values
        .iter()
        .all(|(name, want)| doc.fields.get(name) == Some(want))
}

/// Linear scan over the document vector with closed-open pagination: the
/// page covers match ordinals in `[start, start + limit)`.
pub fn scan(
    documents: &[Arc<Document>],
    query_values: &HashMap<String, FieldValue>,
    start: usize,
    limit: usize,
) -> (usize, Vec<Arc<Document>>) {
    let mut total = 0;
    let mut page = Vec::new();
    for doc in documents {
        if matches(doc, query_values) {
            if total >= start && page.len() < limit {
                page.push(Arc::clone(doc));
            }
            total += 1;
        }
    }
    (total, page)
}

/// Page `[start, start + limit)` out of a leaf's document list.
pub fn paginate(documents: &[Arc<Document>], start: usize, limit: usize) -> Vec<Arc<Document>> {
    if start >= documents.len() {
        return Vec::new();
    }
    let end = documents.len().min(start.saturating_add(limit));
    documents[start..end].to_vec()
}
