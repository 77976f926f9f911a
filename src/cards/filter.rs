//! Card filtering for `list`.
//!
//! A [`CardFilter`] is applied in two stages: an owner branch picks which owners
//! match, then an optional state refinement narrows the result. The owner branch
//! is resolved once into an [`OwnerMatch`] so the precedence rules live in one place.

use crate::model::{Card, CardState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFilter {
    /// Match cards with exactly this owner. An empty string means "no owner".
    pub owner: Option<String>,
    /// Match cards without an owner (unset or empty). Combines with `owner` as OR.
    pub no_owner: bool,
    /// Keep only cards in this state.
    pub state: Option<CardState>,
}

impl CardFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn no_owner(mut self) -> Self {
        self.no_owner = true;
        self
    }

    pub fn state(mut self, state: CardState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn owner_match(&self) -> OwnerMatch<'_> {
        match self.owner.as_deref() {
            Some(owner) if self.no_owner && !owner.is_empty() => {
                OwnerMatch::OwnerOrUnowned(owner)
            }
            _ if self.no_owner => OwnerMatch::Unowned,
            Some("") => OwnerMatch::Unowned,
            Some(owner) => OwnerMatch::Owner(owner),
            None => OwnerMatch::Any,
        }
    }

    pub fn matches(&self, card: &Card) -> bool {
        self.owner_match().matches(card) && self.state.map_or(true, |state| card.state == state)
    }

    /// Filters cards, keeping their order.
    pub fn apply<I>(&self, cards: I) -> Vec<Card>
    where
        I: IntoIterator<Item = Card>,
    {
        let owners = self.owner_match();
        cards
            .into_iter()
            .filter(|card| owners.matches(card))
            .filter(|card| self.state.map_or(true, |state| card.state == state))
            .collect()
    }
}

/// The owner branch of a [`CardFilter`], after precedence is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerMatch<'a> {
    Any,
    Owner(&'a str),
    Unowned,
    OwnerOrUnowned(&'a str),
}

impl OwnerMatch<'_> {
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            OwnerMatch::Any => true,
            OwnerMatch::Owner(owner) => card.owner.as_deref() == Some(*owner),
            OwnerMatch::Unowned => card.is_unowned(),
            OwnerMatch::OwnerOrUnowned(owner) => {
                card.is_unowned() || card.owner.as_deref() == Some(*owner)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u64, owner: Option<&str>, state: CardState) -> Card {
        Card {
            id,
            summary: None,
            owner: owner.map(str::to_string),
            state,
        }
    }

    fn mix() -> Vec<Card> {
        vec![
            card(1, Some("brian"), CardState::Todo),
            card(2, Some("brian"), CardState::Done),
            card(3, Some("okken"), CardState::Done),
            card(4, None, CardState::InProgress),
            card(5, Some("brian"), CardState::InProgress),
            card(6, Some(""), CardState::Waiting),
        ]
    }

    fn ids(filter: &CardFilter) -> Vec<u64> {
        filter.apply(mix()).iter().map(|c| c.id).collect()
    }

    #[test]
    fn owner_branch_precedence() {
        assert_eq!(CardFilter::all().owner_match(), OwnerMatch::Any);
        assert_eq!(
            CardFilter::all().owner("brian").owner_match(),
            OwnerMatch::Owner("brian")
        );
        assert_eq!(CardFilter::all().owner("").owner_match(), OwnerMatch::Unowned);
        assert_eq!(CardFilter::all().no_owner().owner_match(), OwnerMatch::Unowned);
        assert_eq!(
            CardFilter::all().owner("okken").no_owner().owner_match(),
            OwnerMatch::OwnerOrUnowned("okken")
        );
        assert_eq!(
            CardFilter::all().owner("").no_owner().owner_match(),
            OwnerMatch::Unowned
        );
    }

    #[test]
    fn no_filter_matches_everything_in_order() {
        assert_eq!(ids(&CardFilter::all()), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn exact_owner() {
        assert_eq!(ids(&CardFilter::all().owner("brian")), vec![1, 2, 5]);
        assert_eq!(ids(&CardFilter::all().owner("nobody")), Vec::<u64>::new());
    }

    #[test]
    fn no_owner_matches_unset_and_empty() {
        assert_eq!(ids(&CardFilter::all().no_owner()), vec![4, 6]);
        assert_eq!(ids(&CardFilter::all().owner("")), vec![4, 6]);
    }

    #[test]
    fn owner_or_unowned() {
        assert_eq!(
            ids(&CardFilter::all().owner("okken").no_owner()),
            vec![3, 4, 6]
        );
    }

    #[test]
    fn state_refines_every_owner_branch() {
        let done = CardState::Done;
        let in_prog = CardState::InProgress;

        assert_eq!(ids(&CardFilter::all().state(done)), vec![2, 3]);
        assert_eq!(ids(&CardFilter::all().owner("brian").state(done)), vec![2]);
        assert_eq!(ids(&CardFilter::all().no_owner().state(in_prog)), vec![4]);
        assert_eq!(
            ids(&CardFilter::all().owner("okken").no_owner().state(done)),
            vec![3]
        );
        assert_eq!(
            ids(&CardFilter::all().owner("").state(CardState::Waiting)),
            vec![6]
        );
    }

    #[test]
    fn matches_agrees_with_apply() {
        let filters = [
            CardFilter::all(),
            CardFilter::all().owner("brian"),
            CardFilter::all().owner(""),
            CardFilter::all().no_owner(),
            CardFilter::all().owner("okken").no_owner(),
        ];
        for base in filters {
            for state in [None, Some(CardState::Done), Some(CardState::InProgress)] {
                let filter = CardFilter {
                    state,
                    ..base.clone()
                };
                let by_matches: Vec<u64> = mix()
                    .into_iter()
                    .filter(|c| filter.matches(c))
                    .map(|c| c.id)
                    .collect();
                assert_eq!(by_matches, ids(&filter), "{filter:?}");
            }
        }
    }
}
