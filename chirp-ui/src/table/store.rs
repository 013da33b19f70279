//! Record sources for table queries

use super::query::{export, query, TableQueryResult, TableQuerySpec};
use super::record::Record;
use std::collections::HashSet;
use std::sync::Arc;

/// Source of table records
///
/// Queries always run over a full snapshot returned by [`RecordStore::list_all`];
/// implementations backed by a real database should push filtering down
/// instead of relying on the provided methods.
pub trait RecordStore: Send + Sync {
    /// Every record, in storage order
    fn list_all(&self) -> Vec<Record>;

    /// Run a paginated query over [`RecordStore::list_all`]
    fn query(&self, spec: &TableQuerySpec) -> TableQueryResult {
        query(&self.list_all(), spec)
    }

    /// Export matching records, optionally restricted to selected emails
    fn export(&self, spec: &TableQuerySpec, selected: &HashSet<String>) -> Vec<Record> {
        export(&self.list_all(), spec, selected)
    }
}

/// Immutable in-memory record store
///
/// Cloning is cheap; clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<[Record]>,
}

impl InMemoryRecordStore {
    /// Create a store over `records`
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for InMemoryRecordStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn list_all(&self) -> Vec<Record> {
        self.records.to_vec()
    }

    fn query(&self, spec: &TableQuerySpec) -> TableQueryResult {
        query(&self.records, spec)
    }

    fn export(&self, spec: &TableQuerySpec, selected: &HashSet<String>) -> Vec<Record> {
        export(&self.records, spec, selected)
    }
}
