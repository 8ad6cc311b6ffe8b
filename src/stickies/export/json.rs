use super::{ExportRecord, ExportSink};
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Writes records as a JSON array keyed by the export column names.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSink;

impl ExportSink for JsonSink {
    fn write(&self, records: &[ExportRecord], target: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(records)?;
        fs::write(target, content)?;
        Ok(())
    }
}
