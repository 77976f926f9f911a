use crate::error::Result;
use crate::model::{Card, CardId};
use crate::store::DocumentStore;

use super::helpers::load_card;

/// Missing ids are not an error; they simply yield `None`.
pub fn run<S: DocumentStore>(store: &S, id: CardId) -> Result<Option<Card>> {
    load_card(store, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn gets_existing_card() {
        let fixture = StoreFixture::new().with_mix_of_cards();
        let card = run(&fixture.store, 3).unwrap().unwrap();
        assert_eq!(card.summary.as_deref(), Some("three"));
        assert_eq!(card.owner.as_deref(), Some("okken"));
    }

    #[test]
    fn missing_card_is_none() {
        let fixture = StoreFixture::new().with_cards(2);
        assert_eq!(run(&fixture.store, 99).unwrap(), None);
    }
}
