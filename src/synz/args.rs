use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "synz")]
#[command(about = "Flat-file synonym dictionary for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dictionary file to operate on (overrides the configured data-file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all entries
    #[command(alias = "ls")]
    List,

    /// Print the synonym line for a word
    #[command(alias = "g")]
    Get {
        /// Word to look up (case-insensitive)
        word: String,
    },

    /// Add a new entry
    #[command(alias = "a")]
    Add {
        /// The word the entry is keyed by
        word: String,

        /// Its synonyms (at least one)
        #[arg(required = true, num_args = 1..)]
        synonyms: Vec<String>,
    },

    /// Remove an entry
    #[command(alias = "rm")]
    Remove {
        /// Word whose entry to remove (case-insensitive)
        word: String,
    },

    /// Add a synonym to an existing entry
    AddSyn {
        /// Word to add the synonym to (case-insensitive)
        word: String,

        /// Synonym to append
        synonym: String,
    },

    /// Remove a synonym from an entry
    RemoveSyn {
        /// Word to remove the synonym from (case-insensitive)
        word: String,

        /// Synonym to remove (exact match)
        synonym: String,
    },

    /// Sort entries and the synonyms within them, case-insensitively
    Sort,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
