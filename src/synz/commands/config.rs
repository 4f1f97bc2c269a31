use crate::commands::{CmdMessage, CmdResult};
use crate::config::SynzConfig;
use crate::error::{Result, SynzError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetDataFile(String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = SynzConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            if key != "data-file" {
                return Err(SynzError::Config(format!("unknown config key: {}", key)));
            }
        }
        ConfigAction::SetDataFile(value) => {
            config.data_file = value;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "data-file set to {}",
                config.data_file
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_all_returns_current_config() {
        let dir = tempfile::tempdir().unwrap();
        let res = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(res.config.unwrap(), SynzConfig::default());
    }

    #[test]
    fn set_data_file_persists() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), ConfigAction::SetDataFile("words.txt".into())).unwrap();

        let res = run(dir.path(), ConfigAction::ShowKey("data-file".into())).unwrap();
        assert_eq!(res.config.unwrap().data_file, "words.txt");
    }

    #[test]
    fn unknown_key_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            run(dir.path(), ConfigAction::ShowKey("nope".into())),
            Err(SynzError::Config(_))
        ));
    }
}
