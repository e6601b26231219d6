//! # Configuration
//!
//! Payroll reads `config.json` from its config directory:
//! 1. `PAYROLL_HOME`, when set.
//! 2. Otherwise the OS-appropriate config directory (via `directories`).
//!
//! A missing file means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `minimum_wage` | `1000` | Floor every salary write is checked against |
//! | `wage_ceiling` | `3000` | Highest floor `change_minimum_wage` accepts |

use crate::error::{PayrollError, Result};
use crate::policy::{DEFAULT_MINIMUM_WAGE, DEFAULT_WAGE_CEILING};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const HOME_ENV: &str = "PAYROLL_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayrollConfig {
    #[serde(default = "default_minimum_wage")]
    pub minimum_wage: f64,

    #[serde(default = "default_wage_ceiling")]
    pub wage_ceiling: f64,
}

fn default_minimum_wage() -> f64 {
    DEFAULT_MINIMUM_WAGE
}

fn default_wage_ceiling() -> f64 {
    DEFAULT_WAGE_CEILING
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            minimum_wage: DEFAULT_MINIMUM_WAGE,
            wage_ceiling: DEFAULT_WAGE_CEILING,
        }
    }
}

impl PayrollConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PayrollConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        self.validate()?;
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.minimum_wage.is_finite() || self.minimum_wage < 0.0 {
            return Err(PayrollError::Config(format!(
                "minimum_wage must be a non-negative amount, got {}",
                self.minimum_wage
            )));
        }
        if !self.wage_ceiling.is_finite() || self.minimum_wage > self.wage_ceiling {
            return Err(PayrollError::Config(format!(
                "minimum_wage {} exceeds wage_ceiling {}",
                self.minimum_wage, self.wage_ceiling
            )));
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<f64> {
        match key {
            "minimum_wage" | "minimum-wage" => Ok(self.minimum_wage),
            "wage_ceiling" | "wage-ceiling" => Ok(self.wage_ceiling),
            other => Err(PayrollError::Config(format!("unknown key: {}", other))),
        }
    }

    /// Set a key, leaving the config untouched if the result would be invalid.
    pub fn set(&mut self, key: &str, value: f64) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "minimum_wage" | "minimum-wage" => updated.minimum_wage = value,
            "wage_ceiling" | "wage-ceiling" => updated.wage_ceiling = value,
            other => return Err(PayrollError::Config(format!("unknown key: {}", other))),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

/// Directory holding `config.json`.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "payroll", "payroll")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PayrollError::Config("could not determine config dir".to_string()))
}
