//! # API Facade
//!
//! `SynzApi` is a thin facade over the command layer and the single entry
//! point for all dictionary operations, regardless of the UI in front of
//! it. It owns the in-memory store; loading it from disk and saving it
//! back are the caller's concern (see `store::fs`), which keeps every
//! operation here free of I/O and trivially testable.
//!
//! The facade does no business logic of its own: it dispatches to
//! `commands/*` and returns structured `CmdResult` values. Nothing in
//! here writes to stdout or stderr.

use crate::commands;
use crate::error::Result;
use crate::store::SynonymStore;
use std::path::Path;

pub struct SynzApi {
    store: SynonymStore,
}

impl SynzApi {
    pub fn new(store: SynonymStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get(&self, word: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, word)
    }

    pub fn add_entry(&mut self, word: String, synonyms: Vec<String>) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, word, synonyms)
    }

    pub fn remove_entry(&mut self, word: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, word)
    }

    pub fn add_synonym(&mut self, word: &str, synonym: &str) -> Result<commands::CmdResult> {
        commands::synonyms::add(&mut self.store, word, synonym)
    }

    pub fn remove_synonym(&mut self, word: &str, synonym: &str) -> Result<commands::CmdResult> {
        commands::synonyms::remove(&mut self.store, word, synonym)
    }

    pub fn sort(&mut self) -> Result<commands::CmdResult> {
        commands::sort::run(&mut self.store)
    }

    pub fn config(&self, config_dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(config_dir, action)
    }

    pub fn store(&self) -> &SynonymStore {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
