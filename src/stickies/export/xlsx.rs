use super::{ExportRecord, ExportSink, COLUMNS, DEFAULT_SHEET_NAME};
use crate::error::{Result, StickiesError};
use log::debug;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::fs;
use std::path::Path;

/// Checks `name` against the spreadsheet's worksheet naming rules: 1 to 31 characters,
/// none of `[ ] : * ? / \`, no leading or trailing apostrophe.
pub fn validate_sheet_name(name: &str) -> Result<()> {
    Worksheet::new()
        .set_name(name)
        .map(|_| ())
        .map_err(|e| StickiesError::Config(format!("invalid sheet-name {:?}: {}", name, e)))
}

/// Writes records to a single-sheet spreadsheet with a bold header row.
#[derive(Debug, Clone)]
pub struct XlsxSink {
    sheet_name: String,
}

impl Default for XlsxSink {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_NAME)
    }
}

impl XlsxSink {
    pub fn new(sheet_name: &str) -> Self {
        Self {
            sheet_name: sheet_name.to_string(),
        }
    }

    fn build(&self, records: &[ExportRecord]) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();
        let sheet = workbook.add_worksheet();
        sheet.set_name(&self.sheet_name)?;

        for (col, name) in COLUMNS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *name, &header)?;
        }

        for (i, record) in records.iter().enumerate() {
            let row = i as u32 + 1;
            sheet.write_string(row, 0, &record.notes)?;
            sheet.write_number(row, 1, record.distance_from_top as f64)?;
            sheet.write_number(row, 2, record.distance_from_left as f64)?;
            sheet.write_number(row, 3, record.distance_from_corner as f64)?;
        }

        Ok(workbook)
    }

    /// Renders the workbook in memory.
    pub fn to_buffer(&self, records: &[ExportRecord]) -> Result<Vec<u8>> {
        let mut workbook = self.build(records)?;
        Ok(workbook.save_to_buffer()?)
    }
}

impl ExportSink for XlsxSink {
    fn write(&self, records: &[ExportRecord], target: &Path) -> Result<()> {
        let buf = self.to_buffer(records)?;
        fs::write(target, buf)?;
        debug!("wrote {} rows to {}", records.len(), target.display());
        Ok(())
    }
}
