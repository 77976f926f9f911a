use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CardId;
use crate::store::DocumentStore;
use log::debug;

use super::helpers::load_card;

/// Removes a card. An unknown id is a no-op, reported as an info message.
pub fn run<S: DocumentStore>(store: &mut S, id: CardId) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    // A record that no longer parses as a card can still be deleted.
    let existing = load_card(store, id).ok().flatten();

    if !store.delete(id)? {
        debug!("event=card_delete module=commands status=missing id={}", id);
        result.add_message(CmdMessage::info(format!("No card with id {}", id)));
        return Ok(result);
    }

    result.add_message(CmdMessage::success(format!("Card deleted ({})", id)));
    result.affected_cards.extend(existing);
    Ok(result)
}

/// Removes every card. Ids handed out later keep counting up from where they were.
pub fn run_all<S: DocumentStore>(store: &mut S) -> Result<CmdResult> {
    let removed = store.delete_all()?;
    debug!(
        "event=card_delete_all module=commands status=ok removed={}",
        removed
    );

    let mut result = CmdResult::default().with_count(removed);
    result.add_message(CmdMessage::success(format!("Deleted {} cards", removed)));
    Ok(result)
}
