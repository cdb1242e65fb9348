use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Store statistics for monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    pub uptime_secs: u64,
    pub start_time: SystemTime,

    pub total_documents: usize,
    pub index_count: usize,
    pub indexes: Vec<IndexStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    pub name: String,
    pub fields: Vec<String>,
    pub count: usize,
}
