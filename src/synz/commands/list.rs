use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::SynonymStore;

pub fn run(store: &SynonymStore) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_entries(store.entries().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;

    #[test]
    fn lists_entries_in_store_order() {
        let store = SynonymStore::from_entries(vec![
            Entry::parse("dog | wolf").unwrap(),
            Entry::parse("cat | kitten").unwrap(),
        ]);
        let res = run(&store).unwrap();
        assert_eq!(res.listed_entries.len(), 2);
        assert_eq!(res.listed_entries[0].word, "dog");
        assert!(!res.mutated);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let res = run(&SynonymStore::new()).unwrap();
        assert!(res.listed_entries.is_empty());
    }
}
