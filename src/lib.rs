//! In-memory document store with secondary indexes keyed by exact
//! equality on one or more fields.
//!
//! Callers insert values implementing [`schema::record::Record`], define
//! indexes over named field sets, and issue equality queries returning a
//! page of matching documents. Every index is a byte trie over a SHA-1
//! fingerprint of the indexed field tuple, built lazily: paths are created
//! on first descent and leaves split one byte at a time as colliding
//! fingerprints arrive.
//!
//! The store is append-only for documents and safe to share across
//! threads; inserts and bulk index builds serialize on a single write
//! lock while trie installs synchronize per leaf.

pub mod core;
pub mod index;
pub mod query;
pub mod schema;
