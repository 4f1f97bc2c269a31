use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::SynonymStore;

pub fn run(store: &SynonymStore, word: &str) -> Result<CmdResult> {
    let entry = store.get(word)?;
    Ok(CmdResult::default().with_listed_entries(vec![entry.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynzError;
    use crate::model::Entry;

    #[test]
    fn returns_the_matching_entry() {
        let store = SynonymStore::from_entries(vec![
            Entry::parse("cat | kitten, feline").unwrap(),
        ]);
        let res = run(&store, "CAT").unwrap();
        assert_eq!(res.listed_entries[0].to_string(), "cat | kitten, feline");
    }

    #[test]
    fn missing_word_propagates_not_found() {
        let store = SynonymStore::new();
        assert!(matches!(
            run(&store, "cat"),
            Err(SynzError::NotFound(w)) if w == "cat"
        ));
    }
}
