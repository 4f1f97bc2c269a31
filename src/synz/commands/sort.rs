use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SynonymStore;

pub fn run(store: &mut SynonymStore) -> Result<CmdResult> {
    store.sort();
    let mut result = CmdResult::default()
        .with_listed_entries(store.entries().to_vec())
        .mutated();
    result.add_message(CmdMessage::info(format!("Sorted {} entries", store.len())));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;

    #[test]
    fn sorts_entries_and_their_synonyms() {
        let mut store = SynonymStore::from_entries(vec![
            Entry::parse("dog | Wolf, ant, Bee").unwrap(),
            Entry::parse("cat | tomcat, kitten").unwrap(),
        ]);
        let res = run(&mut store).unwrap();
        let lines: Vec<String> = res.listed_entries.iter().map(|e| e.to_string()).collect();
        assert_eq!(lines, vec!["cat | kitten, tomcat", "dog | ant, Bee, Wolf"]);
        assert!(res.mutated);
    }
}
