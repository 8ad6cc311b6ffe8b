//! # Export
//!
//! Exporting turns the board into flat [`ExportRecord`]s, one per note in list order, and
//! hands them to an [`ExportSink`] together with a target path.
//!
//! Column names are fixed and shared by every sink:
//!
//! | Column                          | Value          |
//! |---------------------------------|----------------|
//! | `Notes`                         | note text      |
//! | `Distance from Top`             | row            |
//! | `Distance from Left`            | col            |
//! | `Distance from Top Left Corner` | row + col      |
//!
//! ## Sinks
//!
//! - [`xlsx::XlsxSink`]: a spreadsheet with a single worksheet (default `notes.xlsx`)
//! - [`json::JsonSink`]: a pretty-printed JSON array using the column names as keys

use crate::error::{Result, StickiesError};
use crate::model::Note;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod json;
pub mod xlsx;

pub const COLUMNS: [&str; 4] = [
    "Notes",
    "Distance from Top",
    "Distance from Left",
    "Distance from Top Left Corner",
];

pub const DEFAULT_EXPORT_FILE: &str = "notes.xlsx";
pub const DEFAULT_SHEET_NAME: &str = "Notes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "Distance from Top")]
    pub distance_from_top: usize,
    #[serde(rename = "Distance from Left")]
    pub distance_from_left: usize,
    #[serde(rename = "Distance from Top Left Corner")]
    pub distance_from_corner: usize,
}

impl From<&Note> for ExportRecord {
    fn from(note: &Note) -> Self {
        Self {
            notes: note.text.clone(),
            distance_from_top: note.row,
            distance_from_left: note.col,
            distance_from_corner: note.cell().distance_from_corner(),
        }
    }
}

/// Consumes export records and writes them to `target`.
pub trait ExportSink {
    fn write(&self, records: &[ExportRecord], target: &Path) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
        }
    }

    /// Picks a format from a target's extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    pub fn sink(&self, sheet_name: &str) -> Box<dyn ExportSink> {
        match self {
            ExportFormat::Xlsx => Box::new(xlsx::XlsxSink::new(sheet_name)),
            ExportFormat::Json => Box::new(json::JsonSink),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = StickiesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "xlsx" => Ok(ExportFormat::Xlsx),
            "json" => Ok(ExportFormat::Json),
            other => Err(StickiesError::Config(format!(
                "Unknown export format: {} (expected xlsx or json)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn single_note_at_origin() {
        let note = Note::new(1, "x".into(), 0);
        let record = ExportRecord::from(&note);
        assert_eq!(
            record,
            ExportRecord {
                notes: "x".into(),
                distance_from_top: 0,
                distance_from_left: 0,
                distance_from_corner: 0,
            }
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "Notes": "x",
                "Distance from Top": 0,
                "Distance from Left": 0,
                "Distance from Top Left Corner": 0
            })
        );
    }

    #[test]
    fn corner_distance_sums_row_and_col() {
        let note = Note::new(3, "y".into(), 5);
        let record = ExportRecord::from(&note);
        assert_eq!(record.distance_from_top, 1);
        assert_eq!(record.distance_from_left, 2);
        assert_eq!(record.distance_from_corner, 3);
    }

    #[test]
    fn format_from_path() {
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("out/notes.JSON")),
            Some(ExportFormat::Json)
        );
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("notes.xlsx")),
            Some(ExportFormat::Xlsx)
        );
        assert_eq!(ExportFormat::from_path(&PathBuf::from("notes.csv")), None);
        assert_eq!(ExportFormat::from_path(&PathBuf::from("notes")), None);
    }

    #[test]
    fn format_parse_rejects_unknown() {
        assert!("csv".parse::<ExportFormat>().is_err());
        assert_eq!("Xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
    }
}
