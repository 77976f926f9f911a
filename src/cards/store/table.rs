use super::{DocId, Record};
use crate::error::{CardsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const FIRST_ID: DocId = 1;

fn first_id() -> DocId {
    FIRST_ID
}

/// The in-memory shape of a document collection, and its on-disk JSON format.
///
/// Records are keyed by id in a `BTreeMap`. Ids only ever grow, so key order
/// is insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordTable {
    #[serde(default = "first_id")]
    next_id: DocId,
    #[serde(default)]
    records: BTreeMap<DocId, Record>,
}

impl Default for RecordTable {
    fn default() -> Self {
        Self {
            next_id: FIRST_ID,
            records: BTreeMap::new(),
        }
    }
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repairs a counter that lags behind the stored ids (e.g. a hand-edited file).
    ///
    /// Fails when the largest stored id leaves no room for another one.
    pub fn normalize(&mut self) -> Result<()> {
        let floor = match self.records.keys().next_back() {
            Some(&max) => max.checked_add(1).ok_or_else(|| exhausted(max))?,
            None => FIRST_ID,
        };
        if self.next_id < floor {
            self.next_id = floor;
        }
        Ok(())
    }

    pub fn next_id(&self) -> DocId {
        self.next_id
    }

    pub fn insert(&mut self, record: Record) -> Result<DocId> {
        let id = self.next_id;
        let following = id.checked_add(1).ok_or_else(|| exhausted(id))?;
        self.records.insert(id, record);
        self.next_id = following;
        Ok(id)
    }

    pub fn get(&self, id: DocId) -> Option<&Record> {
        self.records.get(&id)
    }

    /// Null values in `partial` mean "not supplied" and are skipped.
    pub fn merge(&mut self, id: DocId, partial: Record) -> bool {
        match self.records.get_mut(&id) {
            Some(existing) => {
                for (key, value) in partial {
                    if !value.is_null() {
                        existing.insert(key, value);
                    }
                }
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: DocId) -> bool {
        self.records.remove(&id).is_some()
    }

    /// Drops every record. The id counter keeps going.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, &Record)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }
}

fn exhausted(id: DocId) -> CardsError {
    CardsError::Storage(format!("record id {} leaves no room for new ids", id))
}
