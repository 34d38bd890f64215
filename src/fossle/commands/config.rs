use crate::commands::{CmdMessage, CmdResult, FosslePaths};
use crate::config::FossleConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &FosslePaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = FossleConfig::load(&paths.data)?;
    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
            config.save(&paths.data)?;
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            if key == "epoch" {
                result.add_message(CmdMessage::warning(
                    "Changing the epoch changes which project each day selects.",
                ));
            }
            Ok(result.with_config(config))
        }
    }
}
