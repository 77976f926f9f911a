use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::CardFilter;
use crate::store::DocumentStore;

use super::helpers::load_cards;

pub fn run<S: DocumentStore>(store: &S, filter: &CardFilter) -> Result<CmdResult> {
    let cards = load_cards(store)?;
    Ok(CmdResult::default().with_listed_cards(filter.apply(cards)))
}
