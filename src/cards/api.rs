//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all cards operations, whichever UI drives them.
//!
//! The facade dispatches to `commands/*.rs` and returns structured types. It holds no
//! business logic and does no I/O of its own beyond what the store does.
//!
//! ## Generic Over DocumentStore
//!
//! `CardsApi<S: DocumentStore>` is generic over the storage backend:
//! - Production: `CardsApi<FileStore>`
//! - Testing: `CardsApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Card, CardId, CardPatch, NewCard};
use crate::store::DocumentStore;
use std::path::{Path, PathBuf};

/// The main API facade for cards operations.
pub struct CardsApi<S: DocumentStore> {
    store: S,
    db_dir: PathBuf,
}

impl<S: DocumentStore> CardsApi<S> {
    pub fn new(store: S, db_dir: PathBuf) -> Self {
        Self { store, db_dir }
    }

    pub fn add_card(&mut self, card: NewCard) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, card)
    }

    pub fn get_card(&self, id: CardId) -> Result<Option<Card>> {
        commands::get::run(&self.store, id)
    }

    pub fn list_cards(&self, filter: &CardFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn count(&self) -> Result<usize> {
        commands::count::run(&self.store)
    }

    pub fn update_card(&mut self, id: CardId, patch: CardPatch) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_card(&mut self, id: CardId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn delete_all(&mut self) -> Result<commands::CmdResult> {
        commands::delete::run_all(&mut self.store)
    }

    /// Directory the database lives in.
    pub fn path(&self) -> &Path {
        &self.db_dir
    }

    pub fn close(self) -> Result<()> {
        self.store.close()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::filter::CardFilter;
