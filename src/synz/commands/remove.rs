use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SynonymStore;

pub fn run(store: &mut SynonymStore, word: &str) -> Result<CmdResult> {
    let removed = store.remove(word)?;
    let mut result = CmdResult::default().mutated();
    result.add_message(CmdMessage::success(format!("Removed: {}", removed)));
    Ok(result)
}
