use super::table::RecordTable;
use super::{DocId, DocumentStore, Record};
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    table: RecordTable,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for InMemoryStore {
    fn insert(&mut self, record: Record) -> Result<DocId> {
        self.table.insert(record)
    }

    fn get(&self, id: DocId) -> Result<Option<Record>> {
        Ok(self.table.get(id).cloned())
    }

    fn update(&mut self, id: DocId, partial: Record) -> Result<bool> {
        Ok(self.table.merge(id, partial))
    }

    fn delete(&mut self, id: DocId) -> Result<bool> {
        Ok(self.table.remove(id))
    }

    fn delete_all(&mut self) -> Result<usize> {
        Ok(self.table.clear())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.table.len())
    }

    fn records(&self) -> Result<Vec<(DocId, Record)>> {
        Ok(self
            .table
            .iter()
            .map(|(id, record)| (id, record.clone()))
            .collect())
    }

    fn close(self) -> Result<()> {
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{CardState, NewCard};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_card(mut self, card: NewCard) -> Self {
            let record = card.into_record().unwrap();
            self.store.insert(record).unwrap();
            self
        }

        pub fn with_cards(self, count: usize) -> Self {
            (0..count).fold(self, |fixture, i| {
                fixture.with_card(NewCard::new(format!("Test card {}", i + 1)))
            })
        }

        /// Five cards with mixed owners and states:
        ///
        /// 1. brian, todo
        /// 2. brian, done
        /// 3. okken, done
        /// 4. (no owner), in prog
        /// 5. brian, in prog
        pub fn with_mix_of_cards(self) -> Self {
            self.with_card(NewCard::new("one").with_owner("brian"))
                .with_card(
                    NewCard::new("two")
                        .with_owner("brian")
                        .with_state(CardState::Done),
                )
                .with_card(
                    NewCard::new("three")
                        .with_owner("okken")
                        .with_state(CardState::Done),
                )
                .with_card(NewCard::new("four").with_state(CardState::InProgress))
                .with_card(
                    NewCard::new("five")
                        .with_owner("brian")
                        .with_state(CardState::InProgress),
                )
        }
    }
}
