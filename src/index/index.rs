use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::core::error::{Error, Result};
use crate::core::types::{Document, FieldValue};
use crate::index::fingerprint::{fingerprint, FINGERPRINT_LEN};
use crate::index::leaf::Leaf;

/// Derive the index name: field names joined by `-` in declaration order.
pub fn index_name<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| f.as_ref())
        .collect::<Vec<_>>()
        .join("-")
}

/// A named secondary index: an ordered field list plus a byte trie keyed
/// by SHA-1 fingerprints of the indexed field tuple.
///
/// Field order is significant: it feeds the fingerprint, so `[Name, Age]`
/// and `[Age, Name]` are distinct indexes.
#[derive(Debug)]
pub struct Index {
    pub name: String,
    pub fields: Vec<String>,
    root: Arc<Leaf>,
    count: AtomicUsize,
}

impl Index {
    pub(crate) fn new(fields: Vec<String>) -> Result<Self> {
        if fields.is_empty() {
            return Err(Error::empty_field_list());
        }
        Ok(Index {
            name: index_name(&fields),
            fields,
            root: Leaf::new(Vec::new()),
            count: AtomicUsize::new(0),
        })
    }

    /// Total number of leaf installs performed on this index.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Fingerprint a value map under this index's field order.
    pub fn fingerprint(&self, values: &HashMap<String, FieldValue>) -> [u8; FINGERPRINT_LEN] {
        fingerprint(&self.fields, values)
    }

    /// Install one document into the trie.
    pub fn index_document(&self, doc: &Arc<Document>) {
        let key = self.fingerprint(&doc.fields);
        let leaf = self.root.get_or_create(&key, 0);
        leaf.add_document(Arc::clone(doc), &key);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Bulk-build over an existing document set, chunked across the rayon
    /// pool. Per-leaf locking keeps concurrent installs into one trie safe;
    /// the caller pins the document vector for the duration.
    pub(crate) fn build(&self, documents: &[Arc<Document>], batch_size: usize) {
        documents
            .par_chunks(batch_size.max(1))
            .for_each(|batch| {
                for doc in batch {
                    self.index_document(doc);
                }
            });
        log::debug!(
            "index {} built over {} documents",
            self.name,
            self.count()
        );
    }

    /// Locate the leaf for a query's field values without creating paths.
    /// `None` means the fingerprint is absent from the index.
    pub fn find_leaf(&self, values: &HashMap<String, FieldValue>) -> Option<Arc<Leaf>> {
        let key = self.fingerprint(values);
        self.root.find(&key, 0)
    }
}
