//! # API Facade
//!
//! [`BoardApi`] is the single entry point for UI clients. It owns the in-memory
//! [`NoteBoard`] and the [`BoardConfig`], dispatches to the command layer, and normalizes
//! user input on the way in: positions arrive 1-based, the way the board is shown to
//! people, and leave as list indexes.
//!
//! The facade does no formatting and no terminal I/O. Every method returns a
//! [`CmdResult`] with the affected notes and leveled messages for the client to present.

use crate::board::NoteBoard;
use crate::commands::{self, helpers::position_to_index};
use crate::config::BoardConfig;
use crate::error::Result;
use crate::model::Note;
use std::path::{Path, PathBuf};

pub struct BoardApi {
    board: NoteBoard,
    config: BoardConfig,
    config_dir: Option<PathBuf>,
}

impl BoardApi {
    /// An empty board with the given configuration.
    pub fn new(config: BoardConfig, config_dir: Option<PathBuf>) -> Self {
        Self {
            board: NoteBoard::new(),
            config,
            config_dir,
        }
    }

    /// An empty board configured from `config_dir`, falling back to defaults.
    pub fn open(config_dir: PathBuf) -> Result<Self> {
        let config = BoardConfig::load(&config_dir)?;
        Ok(Self::new(config, Some(config_dir)))
    }

    pub fn add_note(&mut self, text: Option<String>) -> Result<CmdResult> {
        commands::add::run(&mut self.board, text)
    }

    pub fn update_text(&mut self, id: u32, text: String) -> Result<CmdResult> {
        commands::update::run(&mut self.board, id, text)
    }

    pub fn append_text(&mut self, id: u32, dropped: &str) -> Result<CmdResult> {
        commands::update::append(&mut self.board, id, dropped)
    }

    pub fn move_note(&mut self, from: usize, to: usize) -> Result<CmdResult> {
        let from = position_to_index(&self.board, from)?;
        let to = position_to_index(&self.board, to)?;
        commands::move_notes::run(&mut self.board, from, to)
    }

    pub fn drag_note(&mut self, from: usize, to: usize) -> Result<CmdResult> {
        let from = position_to_index(&self.board, from)?;
        let to = position_to_index(&self.board, to)?;
        commands::move_notes::drag(&mut self.board, from, to)
    }

    pub fn delete_notes(&mut self, ids: &[u32]) -> Result<CmdResult> {
        commands::delete::run(&mut self.board, ids)
    }

    pub fn list_notes(&self) -> Result<CmdResult> {
        commands::list::run(&self.board)
    }

    pub fn export_notes(&self, target: Option<&Path>) -> Result<CmdResult> {
        commands::export::run(&self.board, &self.config, target)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(self.config_dir.as_deref(), &mut self.config, action)
    }

    pub fn notes(&self) -> &[Note] {
        self.board.notes()
    }

    pub fn board(&self) -> &NoteBoard {
        &self.board
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFormat;

    fn api() -> BoardApi {
        BoardApi::new(BoardConfig::default(), None)
    }

    #[test]
    fn positions_are_converted_for_moves() {
        let mut api = api();
        for _ in 0..4 {
            api.add_note(None).unwrap();
        }
        api.move_note(1, 4).unwrap();
        let ids: Vec<u32> = api.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 1]);

        api.drag_note(4, 1).unwrap();
        let ids: Vec<u32> = api.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn position_zero_is_rejected() {
        let mut api = api();
        api.add_note(None).unwrap();
        assert!(api.move_note(0, 1).is_err());
        assert!(api.drag_note(1, 2).is_err());
    }

    #[test]
    fn text_edits_go_through() {
        let mut api = api();
        api.add_note(Some("a".into())).unwrap();
        api.update_text(1, "b".into()).unwrap();
        api.append_text(1, "c").unwrap();
        assert_eq!(api.board().get(1).unwrap().text, "bc");
    }

    #[test]
    fn open_reads_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = BoardConfig::default();
        config.export_format = ExportFormat::Json;
        config.save(dir.path()).unwrap();

        let mut api = BoardApi::open(dir.path().to_path_buf()).unwrap();
        let result = api.config(ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().export_format, ExportFormat::Json);
    }

    #[test]
    fn delete_and_list() {
        let mut api = api();
        api.add_note(None).unwrap();
        api.add_note(None).unwrap();
        api.delete_notes(&[1]).unwrap();
        let listed = api.list_notes().unwrap().listed_notes;
        assert_eq!(listed.len(), 1);
        assert_eq!((listed[0].id, listed[0].row, listed[0].col), (2, 0, 0));
    }
}
