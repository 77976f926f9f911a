use crate::error::{CardsError, Result};
use crate::store::{DocId, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub type CardId = DocId;

/// Lifecycle state of a card.
///
/// Stored and displayed by its wire name (`todo`, `in prog`, `waiting`, `done`).
/// Anything else is rejected, both from the command line and from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CardState {
    #[default]
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in prog", alias = "in_progress")]
    InProgress,
    #[serde(rename = "waiting")]
    Waiting,
    #[serde(rename = "done")]
    Done,
}

impl CardState {
    pub const ALL: [CardState; 4] = [
        CardState::Todo,
        CardState::InProgress,
        CardState::Waiting,
        CardState::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CardState::Todo => "todo",
            CardState::InProgress => "in prog",
            CardState::Waiting => "waiting",
            CardState::Done => "done",
        }
    }
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardState {
    type Err = CardsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "todo" => Ok(CardState::Todo),
            "in prog" | "in_progress" => Ok(CardState::InProgress),
            "waiting" => Ok(CardState::Waiting),
            "done" => Ok(CardState::Done),
            other => Err(CardsError::Validation(format!(
                "unknown card state '{}' (expected one of: todo, in prog, waiting, done)",
                other
            ))),
        }
    }
}

/// The fields of a card that is about to be inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCard {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub state: CardState,
}

impl NewCard {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..Self::default()
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_state(mut self, state: CardState) -> Self {
        self.state = state;
        self
    }

    pub fn into_record(self) -> Result<Record> {
        to_record(&self)
    }
}

/// A card as stored, with the id the store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: CardId,
    pub summary: Option<String>,
    pub owner: Option<String>,
    pub state: CardState,
}

impl Card {
    /// Builds a card from a raw store record.
    ///
    /// Missing fields fall back to their defaults; a field of the wrong shape or
    /// an unknown state is a validation error.
    pub fn from_record(id: CardId, record: &Record) -> Result<Self> {
        let fields: NewCard = serde_json::from_value(Value::Object(record.clone()))
            .map_err(|e| CardsError::Validation(format!("card {}: {}", id, e)))?;
        Ok(Self {
            id,
            summary: fields.summary,
            owner: fields.owner,
            state: fields.state,
        })
    }

    /// The card without its id, comparable with the `NewCard` it was created from.
    pub fn fields(&self) -> NewCard {
        NewCard {
            summary: self.summary.clone(),
            owner: self.owner.clone(),
            state: self.state,
        }
    }

    /// Unset and empty owners are both "no owner".
    pub fn is_unowned(&self) -> bool {
        self.owner.as_deref().map_or(true, str::is_empty)
    }
}

/// A partial modification of a card.
///
/// `None` means "leave as is". `Some("")` is a real value and overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CardState>,
}

impl CardPatch {
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn state(mut self, state: CardState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.owner.is_none() && self.state.is_none()
    }

    pub fn into_record(self) -> Result<Record> {
        to_record(&self)
    }
}

fn to_record<T: Serialize>(value: &T) -> Result<Record> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(CardsError::Storage(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn state_parses_wire_names_and_alias() {
        assert_eq!("todo".parse::<CardState>().unwrap(), CardState::Todo);
        assert_eq!("in prog".parse::<CardState>().unwrap(), CardState::InProgress);
        assert_eq!(
            "in_progress".parse::<CardState>().unwrap(),
            CardState::InProgress
        );
        assert_eq!("waiting".parse::<CardState>().unwrap(), CardState::Waiting);
        assert_eq!("done".parse::<CardState>().unwrap(), CardState::Done);
    }

    #[test]
    fn state_rejects_unknown_values() {
        for bad in ["", "Done", "finished", "in-prog"] {
            let err = bad.parse::<CardState>().unwrap_err();
            assert!(matches!(err, CardsError::Validation(_)), "{bad}");
        }
    }

    #[test]
    fn state_display_matches_wire_name() {
        for state in CardState::ALL {
            let json = serde_json::to_value(state).unwrap();
            assert_eq!(json, Value::String(state.to_string()));
        }
    }

    #[test]
    fn new_card_defaults_to_todo() {
        let card = NewCard::new("write tests");
        assert_eq!(card.state, CardState::Todo);
        assert_eq!(card.owner, None);
    }

    #[test]
    fn card_from_record_fills_defaults() {
        let card = Card::from_record(7, &record(json!({ "summary": "bare" }))).unwrap();
        assert_eq!(card.id, 7);
        assert_eq!(card.summary.as_deref(), Some("bare"));
        assert_eq!(card.owner, None);
        assert_eq!(card.state, CardState::Todo);
    }

    #[test]
    fn card_from_record_rejects_unknown_state() {
        let err = Card::from_record(3, &record(json!({ "state": "someday" }))).unwrap_err();
        match err {
            CardsError::Validation(msg) => assert!(msg.contains("card 3")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_owner_and_unset_owner_are_distinct_but_both_unowned() {
        let unset = Card::from_record(1, &record(json!({ "owner": null }))).unwrap();
        let empty = Card::from_record(2, &record(json!({ "owner": "" }))).unwrap();
        assert_ne!(unset.owner, empty.owner);
        assert!(unset.is_unowned());
        assert!(empty.is_unowned());
    }

    #[test]
    fn patch_record_only_carries_supplied_fields() {
        let rec = CardPatch::default()
            .owner("")
            .state(CardState::Done)
            .into_record()
            .unwrap();
        assert_eq!(rec.len(), 2);
        assert_eq!(rec["owner"], json!(""));
        assert_eq!(rec["state"], json!("done"));
        assert!(!rec.contains_key("summary"));
    }
}
