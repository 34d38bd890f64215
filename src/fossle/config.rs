use crate::error::{FossleError, Result};
use crate::puzzle::DEFAULT_EPOCH;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SNIPPETS_DIR: &str = "code_snippets";

/// Configuration for fossle, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FossleConfig {
    /// Date of puzzle #1; changing it shifts every day's answer.
    #[serde(default = "default_epoch")]
    pub epoch: NaiveDate,

    /// Directory holding code snippets, named by each project's snippet key.
    /// Relative to the data dir when not absolute.
    #[serde(default)]
    pub snippets_dir: Option<PathBuf>,
}

fn default_epoch() -> NaiveDate {
    DEFAULT_EPOCH
}

impl Default for FossleConfig {
    fn default() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            snippets_dir: None,
        }
    }
}

impl FossleConfig {
    pub const KEYS: &'static [&'static str] = &["epoch", "snippets-dir"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FossleError::Io)?;
        let config: FossleConfig =
            serde_json::from_str(&content).map_err(FossleError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FossleError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FossleError::Serialization)?;
        fs::write(config_path, content).map_err(FossleError::Io)?;
        Ok(())
    }

    /// Snippet directory resolved against `data_dir`.
    pub fn snippets_path(&self, data_dir: &Path) -> PathBuf {
        match &self.snippets_dir {
            Some(dir) => data_dir.join(dir),
            None => data_dir.join(DEFAULT_SNIPPETS_DIR),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "epoch" => Some(self.epoch.format("%Y-%m-%d").to_string()),
            "snippets-dir" => Some(
                self.snippets_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| DEFAULT_SNIPPETS_DIR.to_string()),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "epoch" => {
                self.epoch = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
                    FossleError::Config(format!("epoch must be a YYYY-MM-DD date, got {}", value))
                })?;
            }
            "snippets-dir" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(FossleError::Config("snippets-dir cannot be empty".to_string()));
                }
                self.snippets_dir = Some(PathBuf::from(value));
            }
            _ => {
                return Err(FossleError::Config(format!(
                    "Unknown config key: {} (known: {})",
                    key,
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
