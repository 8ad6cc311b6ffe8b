use crate::error::{Result, StickiesError};
use crate::export::xlsx::validate_sheet_name;
use crate::export::{ExportFormat, DEFAULT_EXPORT_FILE, DEFAULT_SHEET_NAME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: [&str; 3] = ["export-file", "export-format", "sheet-name"];

/// Configuration for the board, stored in `<config dir>/config.json`.
///
/// Only export defaults live here; notes themselves are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardConfig {
    /// Target used by `export` when no path is given
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// Format used when the target's extension does not name one
    #[serde(default)]
    pub export_format: ExportFormat,

    /// Worksheet name for spreadsheet exports
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

fn default_sheet_name() -> String {
    DEFAULT_SHEET_NAME.to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            export_file: default_export_file(),
            export_format: ExportFormat::default(),
            sheet_name: default_sheet_name(),
        }
    }
}

impl BoardConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BoardConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "export-file" => Some(self.export_file.clone()),
            "export-format" => Some(self.export_format.to_string()),
            "sheet-name" => Some(self.sheet_name.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "export-file" => {
                if value.trim().is_empty() {
                    return Err(StickiesError::Config("export-file cannot be empty".into()));
                }
                self.export_file = value.to_string();
            }
            "export-format" => self.export_format = value.parse()?,
            "sheet-name" => {
                validate_sheet_name(value)?;
                self.sheet_name = value.to_string();
            }
            other => {
                return Err(StickiesError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
