use crate::board::NoteBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(board: &NoteBoard) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_notes(board.notes().to_vec());
    if board.is_empty() {
        result.add_message(CmdMessage::info(
            "The board is empty. Type `add` or press enter to add a note.",
        ));
    }
    Ok(result)
}
