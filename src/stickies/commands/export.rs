use crate::board::NoteBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::BoardConfig;
use crate::error::Result;
use crate::export::ExportFormat;
use log::info;
use std::path::{Path, PathBuf};

/// Exports the board to `target`, or to the configured export file.
///
/// An explicit target's extension picks the format when it names one; otherwise the
/// configured format applies and its extension is added. The configured export file always
/// takes the configured format's extension.
pub fn run(board: &NoteBoard, config: &BoardConfig, target: Option<&Path>) -> Result<CmdResult> {
    let (path, format) = resolve_target(config, target);
    let records = board.export_all();

    let sink = format.sink(&config.sheet_name);
    sink.write(&records, &path)?;
    info!("exported {} notes as {} to {}", records.len(), format, path.display());

    let mut result = CmdResult::default().with_export_path(path.clone());
    if records.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No notes on the board; wrote an empty export to {}",
            path.display()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Exported {} notes to {}",
            records.len(),
            path.display()
        )));
    }
    Ok(result)
}

fn resolve_target(config: &BoardConfig, target: Option<&Path>) -> (PathBuf, ExportFormat) {
    let Some(target) = target else {
        let path =
            PathBuf::from(&config.export_file).with_extension(config.export_format.extension());
        return (path, config.export_format);
    };

    let mut path = target.to_path_buf();
    match ExportFormat::from_path(&path) {
        Some(format) => (path, format),
        None => {
            if path.extension().is_none() {
                path.set_extension(config.export_format.extension());
            }
            (path, config.export_format)
        }
    }
}
