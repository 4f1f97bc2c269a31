//! Synonym-level mutation: adding or removing a single synonym within an
//! existing entry. Word lookup folds case; the synonym itself is matched
//! exactly on removal (see `store` module docs).

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SynonymStore;

pub fn add(store: &mut SynonymStore, word: &str, synonym: &str) -> Result<CmdResult> {
    store.add_synonym(word, synonym)?;
    let mut result = CmdResult::default().mutated();
    result.add_message(CmdMessage::success(format!(
        "Added {} to: {}",
        synonym,
        store.get(word)?
    )));
    Ok(result)
}

pub fn remove(store: &mut SynonymStore, word: &str, synonym: &str) -> Result<CmdResult> {
    store.remove_synonym(word, synonym)?;
    let mut result = CmdResult::default().mutated();
    result.add_message(CmdMessage::success(format!(
        "Removed {} from: {}",
        synonym,
        store.get(word)?
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynzError;
    use crate::model::Entry;

    fn store() -> SynonymStore {
        SynonymStore::from_entries(vec![
            Entry::parse("cat | kitten, feline, tomcat").unwrap(),
            Entry::parse("big | large").unwrap(),
        ])
    }

    #[test]
    fn add_appends_to_the_synonym_list() {
        let mut s = store();
        add(&mut s, "cat", "mouser").unwrap();
        assert_eq!(
            s.get("cat").unwrap().to_string(),
            "cat | kitten, feline, tomcat, mouser"
        );
    }

    #[test]
    fn add_to_missing_word_fails() {
        let mut s = store();
        assert!(matches!(
            add(&mut s, "mouse", "rodent"),
            Err(SynzError::NotFound(w)) if w == "mouse"
        ));
    }

    #[test]
    fn remove_drops_the_synonym() {
        let mut s = store();
        remove(&mut s, "cat", "feline").unwrap();
        assert_eq!(s.get("cat").unwrap().to_string(), "cat | kitten, tomcat");
    }

    #[test]
    fn remove_last_synonym_fails_with_single_synonym() {
        let mut s = store();
        assert!(matches!(
            remove(&mut s, "big", "large"),
            Err(SynzError::SingleSynonym(w)) if w == "big"
        ));
        // Store untouched by the failed call.
        assert_eq!(s.get("big").unwrap().synonyms, vec!["large"]);
    }

    #[test]
    fn remove_unknown_synonym_fails_with_not_found() {
        let mut s = store();
        assert!(matches!(
            remove(&mut s, "cat", "lion"),
            Err(SynzError::NotFound(syn)) if syn == "lion"
        ));
    }
}
