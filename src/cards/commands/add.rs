use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewCard;
use crate::store::DocumentStore;
use log::debug;

use super::helpers::load_card;

pub fn run<S: DocumentStore>(store: &mut S, card: NewCard) -> Result<CmdResult> {
    let id = store.insert(card.into_record()?)?;
    debug!("event=card_add module=commands status=ok id={}", id);

    let mut result = CmdResult::default();
    if let Some(card) = load_card(store, id)? {
        result.add_message(CmdMessage::success(format!(
            "Card added ({}): {}",
            id,
            card.summary.as_deref().unwrap_or_default()
        )));
        result.affected_cards.push(card);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::get;
    use crate::model::CardState;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_returns_the_stored_card() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, NewCard::new("something").with_owner("okken")).unwrap();

        assert_eq!(result.affected_cards.len(), 1);
        let card = &result.affected_cards[0];
        assert_eq!(card.id, 1);
        assert_eq!(card.owner.as_deref(), Some("okken"));
        assert_eq!(card.state, CardState::Todo);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn round_trip_preserves_all_fields() {
        let mut store = InMemoryStore::new();
        let inputs = [
            NewCard::default(),
            NewCard::new("summary only"),
            NewCard::new("empty owner").with_owner(""),
            NewCard::new("waiting").with_state(CardState::Waiting),
            NewCard::new("full")
                .with_owner("brian")
                .with_state(CardState::InProgress),
        ];

        for input in inputs {
            let id = run(&mut store, input.clone()).unwrap().affected_cards[0].id;
            let back = get::run(&store, id).unwrap().unwrap();
            assert_eq!(back.fields(), input);
            assert_eq!(back.id, id);
        }
    }

    #[test]
    fn ids_strictly_increase() {
        let mut store = InMemoryStore::new();
        let a = run(&mut store, NewCard::new("a")).unwrap().affected_cards[0].id;
        let b = run(&mut store, NewCard::new("b")).unwrap().affected_cards[0].id;
        store.delete(b).unwrap();
        let c = run(&mut store, NewCard::new("c")).unwrap().affected_cards[0].id;
        assert!(a < b && b < c);
    }
}
