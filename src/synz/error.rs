use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynzError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed synonym line {line_no} in {}: missing '|' delimiter", .path.display())]
    MalformedLine { path: PathBuf, line_no: usize },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not present: {0}")]
    NotFound(String),

    #[error("cannot remove the only synonym for {0}")]
    SingleSynonym(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SynzError>;
