//! # Storage Layer
//!
//! This module defines the document store abstraction for cards. The [`DocumentStore`]
//! trait keeps the command layer independent of how records are persisted.
//!
//! ## Documents
//!
//! A record is an untyped JSON object ([`Record`]). The store knows nothing about cards:
//! it assigns ids, merges partial updates and hands records back in insertion order.
//! Typing happens one layer up, in [`crate::model::Card::from_record`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file holding every record
//! - [`memory::InMemoryStore`]: No persistence, used by tests
//!
//! Both share [`table::RecordTable`], so id assignment and merge rules are identical.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "next_id": 3,
//!   "records": {
//!     "1": { "summary": "one", "owner": "brian", "state": "todo" },
//!     "2": { "summary": "two", "owner": null, "state": "done" }
//!   }
//! }
//! ```
//!
//! `next_id` is persisted so an id is never handed out twice for the same file,
//! including after `delete_all` and across reopening.
//!
//! Every mutation rewrites the whole file. That is fine for a personal task list and
//! nothing more.

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod table;

/// Identifier assigned by the store on insert.
pub type DocId = u64;

/// A stored document: a JSON object keyed by field name.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Abstract interface for a collection of JSON documents.
pub trait DocumentStore {
    /// Store a new record under the next unused id and return that id
    fn insert(&mut self, record: Record) -> Result<DocId>;

    /// Get a record by id, `None` if it was never inserted or has been deleted
    fn get(&self, id: DocId) -> Result<Option<Record>>;

    /// Merge the non-null fields of `partial` into an existing record.
    /// Returns `false` (and changes nothing) if the id does not exist.
    fn update(&mut self, id: DocId, partial: Record) -> Result<bool>;

    /// Remove a record. Returns `false` if the id does not exist.
    fn delete(&mut self, id: DocId) -> Result<bool>;

    /// Remove every record, returning how many were removed
    fn delete_all(&mut self) -> Result<usize>;

    /// Number of live records
    fn count(&self) -> Result<usize>;

    /// All live records in insertion order
    fn records(&self) -> Result<Vec<(DocId, Record)>>;

    /// Flush and release the store
    fn close(self) -> Result<()>
    where
        Self: Sized;
}
