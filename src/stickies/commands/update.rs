use crate::board::NoteBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::preview;

/// Replaces the text of note `id`.
pub fn run(board: &mut NoteBoard, id: u32, text: String) -> Result<CmdResult> {
    let changed = board.update_text(id, text);
    Ok(report(board, id, changed, "updated"))
}

/// Appends dropped text to note `id`.
pub fn append(board: &mut NoteBoard, id: u32, dropped: &str) -> Result<CmdResult> {
    let changed = board.append_text(id, dropped);
    Ok(report(board, id, changed, "appended to"))
}

fn report(board: &NoteBoard, id: u32, changed: bool, verb: &str) -> CmdResult {
    let mut result = CmdResult::default();
    match board.get(id).filter(|_| changed) {
        Some(note) => {
            result.add_message(CmdMessage::success(format!(
                "{} {}: {}",
                note.title(),
                verb,
                preview(&note.text)
            )));
            result.affected_notes.push(note.clone());
        }
        None => result.add_message(CmdMessage::warning(format!("No note with id {}", id))),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fixtures::BoardFixture;
    use crate::commands::MessageLevel;

    #[test]
    fn updates_note_text() {
        let mut fx = BoardFixture::new().with_notes(2);
        let result = run(&mut fx.board, 2, "fresh".into()).unwrap();
        assert_eq!(result.affected_notes[0].text, "fresh");
        assert_eq!(fx.board.get(2).unwrap().text, "fresh");
    }

    #[test]
    fn missing_id_warns_without_changes() {
        let mut fx = BoardFixture::new().with_notes(2);
        let before = fx.board.clone();
        let result = run(&mut fx.board, 9, "x".into()).unwrap();
        assert!(result.affected_notes.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(fx.board, before);
    }

    #[test]
    fn append_keeps_existing_text() {
        let mut fx = BoardFixture::new().with_note("todo:");
        let result = append(&mut fx.board, 1, " water plants").unwrap();
        assert_eq!(result.affected_notes[0].text, "todo: water plants");
    }
}
