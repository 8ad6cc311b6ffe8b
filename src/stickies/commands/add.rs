use crate::board::NoteBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::preview;

pub fn run(board: &mut NoteBoard, text: Option<String>) -> Result<CmdResult> {
    let note = board.add_note_with_text(text.unwrap_or_default()).clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} added at row {}, column {}: {}",
        note.title(),
        note.row + 1,
        note.col + 1,
        preview(&note.text)
    )));
    Ok(result.with_affected_notes(vec![note]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_empty_note() {
        let mut board = NoteBoard::new();
        let result = run(&mut board, None).unwrap();
        assert_eq!(result.affected_notes.len(), 1);
        assert_eq!(result.affected_notes[0].id, 1);
        assert_eq!(result.affected_notes[0].text, "");
        assert!(result.messages[0].content.contains("(empty)"));
    }

    #[test]
    fn adds_note_with_text() {
        let mut board = NoteBoard::new();
        run(&mut board, None).unwrap();
        let result = run(&mut board, Some("call mom".into())).unwrap();
        assert_eq!(result.affected_notes[0].id, 2);
        assert_eq!(board.get(2).unwrap().text, "call mom");
        assert!(result.messages[0].content.contains("row 1, column 2"));
    }
}
