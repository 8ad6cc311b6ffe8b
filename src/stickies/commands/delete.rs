use crate::board::NoteBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::preview;

pub fn run(board: &mut NoteBoard, ids: &[u32]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        match board.delete_note(id) {
            Some(note) => {
                result.add_message(CmdMessage::success(format!(
                    "{} deleted: {}",
                    note.title(),
                    preview(&note.text)
                )));
                result.affected_notes.push(note);
            }
            None => result.add_message(CmdMessage::warning(format!("No note with id {}", id))),
        }
    }

    Ok(result)
}
