use crate::error::Result;
use crate::model::{Card, CardId};
use crate::store::DocumentStore;

pub fn load_card<S: DocumentStore>(store: &S, id: CardId) -> Result<Option<Card>> {
    store
        .get(id)?
        .map(|record| Card::from_record(id, &record))
        .transpose()
}

/// Every card in the store, in insertion order.
pub fn load_cards<S: DocumentStore>(store: &S) -> Result<Vec<Card>> {
    store
        .records()?
        .into_iter()
        .map(|(id, record)| Card::from_record(id, &record))
        .collect()
}
