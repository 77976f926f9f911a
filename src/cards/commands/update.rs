use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CardId, CardPatch};
use crate::store::DocumentStore;
use log::debug;

use super::helpers::load_card;

/// Applies `patch` to a card. Only the fields set in the patch change.
///
/// An unknown id is not an error: nothing is written and an info message says so.
pub fn run<S: DocumentStore>(store: &mut S, id: CardId, patch: CardPatch) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if patch.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Nothing to update for card {}",
            id
        )));
        return Ok(result);
    }

    if !store.update(id, patch.into_record()?)? {
        debug!("event=card_update module=commands status=missing id={}", id);
        result.add_message(CmdMessage::info(format!("No card with id {}", id)));
        return Ok(result);
    }

    if let Some(card) = load_card(store, id)? {
        result.add_message(CmdMessage::success(format!("Card updated ({})", id)));
        result.affected_cards.push(card);
    }
    Ok(result)
}
