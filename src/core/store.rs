use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::SystemTime;

use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::core::id::{IdSource, UuidSource};
use crate::core::stats::{IndexStats, StoreStats};
use crate::core::types::Document;
use crate::index::index::{index_name, Index};
use crate::query::planner::select_index;
use crate::query::scan::{paginate, scan};
use crate::schema::extract::extract;
use crate::schema::record::Record;

/// The top-level container: an append-only document vector, the by-name
/// index table, and the locks that sequence writers against index builders.
///
/// Two locks with distinct duties:
/// - `write_lock` serializes `insert` against itself and against bulk
///   index builds, so an index build sees an unchanging document vector
///   and no insert can miss a freshly built index.
/// - `db_lock` serializes index creation and installation.
///
/// Reads take no store-level lock beyond brief RwLock read guards.
pub struct Store {
    documents: RwLock<Vec<Arc<Document>>>,
    indexes: RwLock<Vec<Arc<Index>>>,
    db_lock: Mutex<()>,
    write_lock: Mutex<()>,
    id_source: Box<dyn IdSource>,
    config: Config,
    start_time: SystemTime,
}

impl Store {
    pub fn new() -> Self {
        Store::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Store::with_id_source(config, Box::new(UuidSource))
    }

    pub fn with_id_source(config: Config, id_source: Box<dyn IdSource>) -> Self {
        if let Some(threads) = config.build_threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .ok();
        }

        Store {
            documents: RwLock::new(Vec::with_capacity(config.initial_capacity)),
            indexes: RwLock::new(Vec::new()),
            db_lock: Mutex::new(()),
            write_lock: Mutex::new(()),
            id_source,
            config,
            start_time: SystemTime::now(),
        }
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    /// Positional access; positions are stable for the store's lifetime.
    pub fn document(&self, pos: usize) -> Option<Arc<Document>> {
        self.documents.read().get(pos).cloned()
    }

    /// Create a secondary index over `fields` and build it over every
    /// document already stored. The whole rebuild runs under the write
    /// lock, so it sees the document vector as of the moment the lock was
    /// taken, and the index is installed before the lock is released.
    pub fn new_index(&self, fields: &[&str]) -> Result<()> {
        let _install = self.db_lock.lock();

        let fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
        let index = Index::new(fields)?;
        if self.indexes.read().iter().any(|i| i.name == index.name) {
            return Err(Error::index_already_exists(&index.name));
        }
        let index = Arc::new(index);

        let _write = self.write_lock.lock();
        {
            let documents = self.documents.read();
            index.build(&documents, self.config.build_batch_size);
        }
        self.indexes.write().push(index);

        Ok(())
    }

    /// Create several indexes; the first failure is returned and earlier
    /// indexes stay installed.
    pub fn new_indexes(&self, field_lists: &[&[&str]]) -> Result<()> {
        for fields in field_lists {
            self.new_index(fields)?;
        }
        Ok(())
    }

    /// Name lookup only; never creates.
    pub fn get_index(&self, fields: &[&str]) -> Option<Arc<Index>> {
        let name = index_name(fields);
        self.indexes.read().iter().find(|i| i.name == name).cloned()
    }

    /// Append the given values as documents and dispatch each to every
    /// live index. Serialized by the write lock for the whole call: every
    /// document is installed in the vector before any index sees it, and
    /// all index dispatch completes before the lock is released.
    ///
    /// Returns the number of documents written and a stable window over
    /// them.
    pub fn insert(&self, values: &[&dyn Record]) -> (usize, Vec<Arc<Document>>) {
        let _write = self.write_lock.lock();

        let mut batch = Vec::with_capacity(values.len());
        for value in values {
            let fields = extract(*value);
            batch.push(Arc::new(Document::new(self.id_source.next_id(), fields)));
        }

        {
            let mut documents = self.documents.write();
            documents.extend(batch.iter().cloned());
        }

        let indexes = self.indexes.read();
        for doc in &batch {
            for index in indexes.iter() {
                index.index_document(doc);
            }
        }

        (batch.len(), batch)
    }

    /// Single-value convenience over [`Store::insert`].
    pub fn insert_one(&self, value: &dyn Record) -> (usize, Vec<Arc<Document>>) {
        self.insert(&[value])
    }

    /// Equality query with closed-open pagination.
    ///
    /// The query's extracted field set decides the path: an index whose
    /// field list equals the set exactly serves the lookup through its
    /// trie; otherwise (or for an empty query) the document vector is
    /// scanned. Returns the total match count and the page covering match
    /// ordinals `[start, start + limit)`.
    pub fn find(&self, query: &dyn Record, start: usize, limit: usize) -> (usize, Vec<Arc<Document>>) {
        let query_values = extract(query);

        if !query_values.is_empty() {
            if let Some(index) = select_index(&self.indexes.read(), &query_values) {
                log::trace!("query served by index {}", index.name);
                return match index.find_leaf(&query_values) {
                    None => (0, Vec::new()),
                    Some(leaf) => {
                        let docs = leaf.documents();
                        if docs.is_empty() {
                            return (0, Vec::new());
                        }
                        (docs.len(), paginate(&docs, start, limit))
                    }
                };
            }
        }

        log::trace!("query scanning the full document vector");
        let documents = self.documents.read();
        scan(&documents, &query_values, start, limit)
    }

    /// First match at or after `start`, if any.
    pub fn find_one(&self, query: &dyn Record, start: usize) -> Option<Arc<Document>> {
        let (_, page) = self.find(query, start, 1);
        page.into_iter().next()
    }

    pub fn stats(&self) -> StoreStats {
        let indexes = self.indexes.read();
        StoreStats {
            uptime_secs: self
                .start_time
                .elapsed()
                .map(|d| d.as_secs())
                .unwrap_or(0),
            start_time: self.start_time,
            total_documents: self.len(),
            index_count: indexes.len(),
            indexes: indexes
                .iter()
                .map(|i| IndexStats {
                    name: i.name.clone(),
                    fields: i.fields.clone(),
                    count: i.count(),
                })
                .collect(),
        }
    }
}
