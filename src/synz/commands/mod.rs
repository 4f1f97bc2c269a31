use crate::config::SynzConfig;
use crate::model::Entry;

pub mod add;
pub mod config;
pub mod get;
pub mod list;
pub mod remove;
pub mod sort;
pub mod synonyms;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command: entries to display plus user-facing
/// messages. Commands never print; the CLI layer renders this.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_entries: Vec<Entry>,
    pub config: Option<SynzConfig>,
    pub messages: Vec<CmdMessage>,
    /// True when the command changed the store and it should be saved.
    pub mutated: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_entries(mut self, entries: Vec<Entry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_config(mut self, config: SynzConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn mutated(mut self) -> Self {
        self.mutated = true;
        self
    }
}
