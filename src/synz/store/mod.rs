//! # Store Layer
//!
//! [`SynonymStore`] is the in-memory representation of a synonym file: an
//! ordered sequence of [`Entry`] values, insertion order significant until
//! an explicit [`SynonymStore::sort`].
//!
//! The store is a plain value owned by the caller. Loading and saving are
//! boundary operations in [`fs`] — the collection logic here never touches
//! the filesystem, which keeps every operation unit-testable without
//! temp files.
//!
//! ## Invariants
//!
//! - Word lookup is case-insensitive everywhere, via the single
//!   [`fold`](crate::model::fold) key.
//! - Synonym removal compares synonyms with exact, case-sensitive equality.
//!   This asymmetry is deliberate and pinned by tests below.
//! - No entry ever ends up with an empty synonym list: removing the last
//!   synonym fails with [`SynzError::SingleSynonym`] before mutating.
//! - A failed mutation leaves the store exactly as it was.
//!
//! Duplicate words are not rejected on insert; with duplicates present,
//! lookups resolve to the first match.

use crate::error::{Result, SynzError};
use crate::model::{fold, Entry};

pub mod fs;

/// The full ordered collection of synonym entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymStore {
    entries: Vec<Entry>,
}

impl SynonymStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the first entry matching `word`, ignoring case.
    fn position(&self, word: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.matches(word))
    }

    /// The first entry matching `word`, ignoring case.
    pub fn get(&self, word: &str) -> Result<&Entry> {
        self.position(word)
            .map(|i| &self.entries[i])
            .ok_or_else(|| SynzError::NotFound(word.to_string()))
    }

    /// Whether an entry for `word` exists, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    /// Append an entry. No uniqueness check: callers that care about
    /// duplicate words must check [`contains`](Self::contains) first.
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove the entry matching `word` and return it.
    pub fn remove(&mut self, word: &str) -> Result<Entry> {
        let i = self
            .position(word)
            .ok_or_else(|| SynzError::NotFound(word.to_string()))?;
        Ok(self.entries.remove(i))
    }

    /// Append `synonym` to the entry for `word`. No duplicate check.
    pub fn add_synonym(&mut self, word: &str, synonym: &str) -> Result<()> {
        let i = self
            .position(word)
            .ok_or_else(|| SynzError::NotFound(word.to_string()))?;
        self.entries[i].synonyms.push(synonym.to_string());
        Ok(())
    }

    /// Remove the first occurrence of `synonym` (exact, case-sensitive
    /// match) from the entry for `word`.
    ///
    /// The single-synonym guard runs before the membership scan, so an
    /// entry holding exactly one synonym always fails with
    /// `SingleSynonym`, even when the named synonym is not the one
    /// stored.
    pub fn remove_synonym(&mut self, word: &str, synonym: &str) -> Result<()> {
        let i = self
            .position(word)
            .ok_or_else(|| SynzError::NotFound(word.to_string()))?;
        let entry = &mut self.entries[i];

        if entry.synonyms.len() <= 1 {
            return Err(SynzError::SingleSynonym(entry.word.clone()));
        }

        let j = entry
            .synonyms
            .iter()
            .position(|s| s == synonym)
            .ok_or_else(|| SynzError::NotFound(synonym.to_string()))?;
        entry.synonyms.remove(j);
        Ok(())
    }

    /// Sort the synonyms within every entry, then the entries by word,
    /// case-insensitively ascending. Stable, hence idempotent.
    pub fn sort(&mut self) {
        for entry in &mut self.entries {
            entry.sort_synonyms();
        }
        self.entries.sort_by_key(|e| fold(&e.word));
    }
}
