use std::fmt;

/// Case-folding key used for every case-insensitive word comparison.
///
/// Lookup, removal and sorting must all agree on what "equal ignoring
/// case" means, so they all go through this one function. Plain
/// `to_lowercase` gives locale-independent Unicode folding.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// One dictionary record: a word and its ordered synonyms.
///
/// A valid entry always carries at least one synonym; operations that
/// would leave it empty fail instead (see `SynonymStore::remove_synonym`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub synonyms: Vec<String>,
}

impl Entry {
    pub fn new(word: impl Into<String>, synonyms: Vec<String>) -> Self {
        Self {
            word: word.into(),
            synonyms,
        }
    }

    /// Parse one synonym line of the form `word | syn1, syn2, ...`.
    ///
    /// The word is everything before the first `|`, with surrounding
    /// whitespace trimmed. The remainder is split on the literal `", "`
    /// separator. Returns `None` when the line has no `|` delimiter.
    /// There is no escaping: words or synonyms containing `|` or `", "`
    /// are outside the format.
    pub fn parse(line: &str) -> Option<Self> {
        let (word, rest) = line.split_once('|')?;
        let synonyms = rest
            .trim_start()
            .split(", ")
            .map(str::to_string)
            .collect();
        Some(Self {
            word: word.trim().to_string(),
            synonyms,
        })
    }

    /// Whether this entry's word matches `word`, ignoring case.
    pub fn matches(&self, word: &str) -> bool {
        fold(&self.word) == fold(word)
    }

    /// Sort the synonyms case-insensitively, ascending.
    ///
    /// `sort_by_key` is stable, so synonyms that differ only in case
    /// keep their relative order.
    pub fn sort_synonyms(&mut self) {
        self.synonyms.sort_by_key(|s| fold(s));
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.word, self.synonyms.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_well_formed_line() {
        let entry = Entry::parse("cat | kitten, feline, tomcat").unwrap();
        assert_eq!(entry.word, "cat");
        assert_eq!(entry.synonyms, vec!["kitten", "feline", "tomcat"]);
    }

    #[test]
    fn parse_trims_word_whitespace() {
        let entry = Entry::parse("  cat  | kitten").unwrap();
        assert_eq!(entry.word, "cat");
        assert_eq!(entry.synonyms, vec!["kitten"]);
    }

    #[test]
    fn parse_splits_on_first_pipe_only() {
        let entry = Entry::parse("a | b, c | d").unwrap();
        assert_eq!(entry.word, "a");
        assert_eq!(entry.synonyms, vec!["b", "c | d"]);
    }

    #[test]
    fn parse_rejects_line_without_delimiter() {
        assert!(Entry::parse("no delimiter here").is_none());
    }

    #[test]
    fn display_round_trips_parse() {
        let line = "cat | kitten, feline, tomcat";
        let entry = Entry::parse(line).unwrap();
        assert_eq!(entry.to_string(), line);
    }

    #[test]
    fn matches_ignores_case() {
        let entry = Entry::parse("Cat | kitten").unwrap();
        assert!(entry.matches("cat"));
        assert!(entry.matches("CAT"));
        assert!(!entry.matches("dog"));
    }

    #[test]
    fn sort_synonyms_is_case_insensitive() {
        let mut entry = Entry::parse("dog | Wolf, ant, Bee").unwrap();
        entry.sort_synonyms();
        assert_eq!(entry.to_string(), "dog | ant, Bee, Wolf");
    }

    #[test]
    fn sort_synonyms_is_stable_for_case_ties() {
        let mut entry = Entry::new("x", vec!["Bee".into(), "ant".into(), "bee".into()]);
        entry.sort_synonyms();
        assert_eq!(entry.synonyms, vec!["ant", "Bee", "bee"]);
    }

    #[test]
    fn sort_synonyms_preserves_multiset() {
        let mut entry = Entry::new("x", vec!["b".into(), "a".into(), "b".into()]);
        entry.sort_synonyms();
        assert_eq!(entry.synonyms, vec!["a", "b", "b"]);
    }
}
