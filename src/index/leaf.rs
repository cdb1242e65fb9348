use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::types::Document;

/// One byte-trie node.
///
/// A leaf is in one of three states: empty (no children, no documents),
/// unsplit (holding documents that all share the fingerprint recorded in
/// `pending`), or split (children only). Transitions are monotonic:
/// empty -> unsplit -> split. A split leaf never re-acquires documents;
/// later arrivals descend into a child.
#[derive(Debug)]
pub struct Leaf {
    /// Byte prefix from the root to this node. The root has an empty path.
    pub path: Vec<u8>,
    inner: Mutex<LeafInner>,
}

#[derive(Debug, Default)]
struct LeafInner {
    children: HashMap<u8, Arc<Leaf>>,
    documents: Vec<Arc<Document>>,
    pending: Option<Vec<u8>>,
}

impl Leaf {
    pub fn new(path: Vec<u8>) -> Arc<Self> {
        Arc::new(Leaf {
            path,
            inner: Mutex::new(LeafInner::default()),
        })
    }

    /// Snapshot of the documents currently held by this leaf.
    pub fn documents(&self) -> Vec<Arc<Document>> {
        self.inner.lock().documents.clone()
    }

    pub fn document_count(&self) -> usize {
        self.inner.lock().documents.len()
    }

    pub fn child_count(&self) -> usize {
        self.inner.lock().children.len()
    }

    /// Descend one byte of `key` per level starting at `offset`, creating
    /// missing children on the way. A childless leaf absorbs the key (it is
    /// either empty or unsplit and may still accommodate it). The lock is
    /// held for a single child lookup, never across recursion.
    pub fn get_or_create(self: &Arc<Self>, key: &[u8], offset: usize) -> Arc<Leaf> {
        let mut inner = self.inner.lock();
        if inner.children.is_empty() || offset >= key.len() {
            return Arc::clone(self);
        }
        let child = match inner.children.get(&key[offset]) {
            Some(child) => Arc::clone(child),
            None => {
                let child = Leaf::new(key[..offset + 1].to_vec());
                inner.children.insert(key[offset], Arc::clone(&child));
                child
            }
        };
        drop(inner);
        child.get_or_create(key, offset + 1)
    }

    /// Pure-read descent: never creates leaves. Returns the leaf holding
    /// exactly `key`, or `None` when the key is absent from this subtree.
    pub fn find(self: &Arc<Self>, key: &[u8], offset: usize) -> Option<Arc<Leaf>> {
        let inner = self.inner.lock();
        if inner.children.is_empty() || offset >= key.len() {
            if inner.pending.as_deref() == Some(key) {
                return Some(Arc::clone(self));
            }
            return None;
        }
        let child = Arc::clone(inner.children.get(&key[offset])?);
        drop(inner);
        child.find(key, offset + 1)
    }

    /// Install a document whose full fingerprint is `key`.
    ///
    /// An unsplit leaf holding a different fingerprint splits lazily, one
    /// byte of specialization per call: the held documents move into a
    /// child keyed by the next byte of their fingerprint, and the install
    /// recurses. When both fingerprints agree on that byte the recursion
    /// re-enters the moved child and the split continues there.
    pub fn add_document(self: &Arc<Self>, doc: Arc<Document>, key: &[u8]) -> Arc<Leaf> {
        let mut inner = self.inner.lock();

        // reuse: same fingerprint accumulates on this leaf
        if inner.pending.as_deref() == Some(key) {
            inner.documents.push(doc);
            return Arc::clone(self);
        }

        if let Some(pending) = inner.pending.take() {
            let at = self.path.len();
            if at >= pending.len() || at >= key.len() {
                log::error!(
                    "cannot split leaf at depth {}: keys exhausted ({} vs {} bytes)",
                    at,
                    pending.len(),
                    key.len(),
                );
                inner.pending = Some(pending);
                return Arc::clone(self);
            }

            let moved = Leaf::new(pending[..at + 1].to_vec());
            {
                let mut m = moved.inner.lock();
                m.documents = std::mem::take(&mut inner.documents);
                m.pending = Some(pending.clone());
            }
            inner.children.insert(pending[at], Arc::clone(&moved));

            let target = if key[at] == pending[at] {
                moved
            } else {
                let fresh = Leaf::new(key[..at + 1].to_vec());
                inner.children.insert(key[at], Arc::clone(&fresh));
                fresh
            };
            drop(inner);
            return target.add_document(doc, key);
        }

        // claim: first arrival on an empty leaf
        if inner.children.is_empty() && inner.documents.is_empty() {
            inner.pending = Some(key.to_vec());
            inner.documents.push(doc);
            return Arc::clone(self);
        }

        // a concurrent builder split this leaf between the caller's descent
        // and the install; re-descend and retry
        if inner.documents.is_empty() && self.path.len() < key.len() {
            drop(inner);
            let target = self.get_or_create(key, self.path.len());
            return target.add_document(doc, key);
        }

        log::error!(
            "document does not fit leaf at depth {}: {} documents, {} children, no pending key",
            self.path.len(),
            inner.documents.len(),
            inner.children.len(),
        );
        Arc::clone(self)
    }
}
