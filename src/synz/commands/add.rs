use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entry;
use crate::store::SynonymStore;

/// Append a new entry. Duplicate words are not rejected (lookups resolve
/// to the first match), but the user gets a warning when one exists.
pub fn run(store: &mut SynonymStore, word: String, synonyms: Vec<String>) -> Result<CmdResult> {
    let mut result = CmdResult::default().mutated();

    if store.contains(&word) {
        result.add_message(CmdMessage::warning(format!(
            "{} already present; the earlier entry shadows the new one",
            word
        )));
    }

    let entry = Entry::new(word, synonyms);
    result.add_message(CmdMessage::success(format!("Added: {}", entry)));
    store.add(entry);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn appends_at_the_end() {
        let mut store = SynonymStore::from_entries(vec![Entry::parse("a | b").unwrap()]);
        run(&mut store, "cat".into(), vec!["kitten".into()]).unwrap();
        assert_eq!(store.entries()[1].to_string(), "cat | kitten");
    }

    #[test]
    fn duplicate_word_warns_but_still_appends() {
        let mut store = SynonymStore::from_entries(vec![Entry::parse("cat | kitten").unwrap()]);
        let res = run(&mut store, "CAT".into(), vec!["moggy".into()]).unwrap();
        assert_eq!(store.len(), 2);
        assert!(res
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn marks_result_as_mutated() {
        let mut store = SynonymStore::new();
        let res = run(&mut store, "cat".into(), vec!["kitten".into()]).unwrap();
        assert!(res.mutated);
    }
}
