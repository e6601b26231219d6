use std::path::Path;

use crate::commands::raise::format_amount;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::PayrollConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, f64),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = PayrollConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = PayrollConfig::load(dir)?;
            let mut result = CmdResult::default();
            result.add_line(format_amount(config.get(&key)?));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = PayrollConfig::load(dir)?;
            config.set(&key, value)?;
            config.save(dir)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                format_amount(value)
            )));
            Ok(result)
        }
    }
}
