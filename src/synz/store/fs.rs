use super::SynonymStore;
use crate::error::{Result, SynzError};
use crate::model::Entry;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Read a synonym file into a store.
///
/// One entry per non-empty line. A non-empty line without a `|`
/// delimiter is a read error; the line number in the error is 1-based.
pub fn load<P: AsRef<Path>>(path: P) -> Result<SynonymStore> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SynzError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| SynzError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let entry = Entry::parse(&line).ok_or_else(|| SynzError::MalformedLine {
            path: path.to_path_buf(),
            line_no: i + 1,
        })?;
        entries.push(entry);
    }

    Ok(SynonymStore::from_entries(entries))
}

/// Write the store back to `path`, one line per entry.
///
/// This is a full-file overwrite, not an atomic replace: a failure
/// mid-write can leave a truncated file. The file and its parent
/// directory are created if absent, so a first `add` on a fresh
/// install bootstraps the dictionary.
pub fn save<P: AsRef<Path>>(store: &SynonymStore, path: P) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| SynzError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for entry in store.entries() {
        writeln!(writer, "{}", entry).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;
    Ok(())
}
