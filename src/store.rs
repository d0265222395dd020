//! Read-only sample data served by the `/api/data` endpoints.

use serde::Serialize;

/// A single sample item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub value: i64,
}

impl Record {
    fn new(id: u64, name: &str, value: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            value,
        }
    }
}

/// Immutable, ordered collection of records.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards, so readers never need a lock.
#[derive(Debug, Clone)]
pub struct DataStore {
    records: Vec<Record>,
}

impl DataStore {
    /// The canonical three-item data set.
    pub fn new() -> Self {
        Self {
            records: vec![
                Record::new(1, "Item 1", 100),
                Record::new(2, "Item 2", 200),
                Record::new(3, "Item 3", 300),
            ],
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Look up a record by id. `None` means no such item.
    pub fn get(&self, id: u64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
