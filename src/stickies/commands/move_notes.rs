use crate::board::NoteBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::drag::drag_across;
use crate::error::Result;

/// Moves the note at list index `from` to `to` in one step.
pub fn run(board: &mut NoteBoard, from: usize, to: usize) -> Result<CmdResult> {
    board.move_note(from, to)?;
    Ok(report(board, to, 1))
}

/// Drags the note at `from` to `to`, reordering once per hovered cell.
pub fn drag(board: &mut NoteBoard, from: usize, to: usize) -> Result<CmdResult> {
    let moves = drag_across(board, from, to)?;
    Ok(report(board, to, moves.len()))
}

fn report(board: &NoteBoard, index: usize, steps: usize) -> CmdResult {
    let mut result = CmdResult::default();
    let note = board.notes()[index].clone();
    if steps == 0 {
        result.add_message(CmdMessage::info(format!("{} did not move", note.title())));
    } else {
        result.add_message(CmdMessage::success(format!(
            "{} moved to row {}, column {}",
            note.title(),
            note.row + 1,
            note.col + 1
        )));
    }
    result.with_affected_notes(vec![note])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fixtures::BoardFixture;

    #[test]
    fn move_reports_new_cell() {
        let mut fx = BoardFixture::new().with_notes(4);
        let result = run(&mut fx.board, 0, 3).unwrap();
        assert_eq!(result.affected_notes[0].id, 1);
        assert!(result.messages[0].content.contains("row 2, column 1"));
        assert_eq!(fx.ids(), vec![2, 3, 4, 1]);
    }

    #[test]
    fn move_out_of_range_is_error() {
        let mut fx = BoardFixture::new().with_notes(2);
        assert!(run(&mut fx.board, 0, 2).is_err());
    }

    #[test]
    fn drag_ends_where_move_would() {
        let mut dragged = BoardFixture::new().with_notes(6);
        let mut moved = BoardFixture::new().with_notes(6);
        drag(&mut dragged.board, 5, 1).unwrap();
        run(&mut moved.board, 5, 1).unwrap();
        assert_eq!(dragged.board, moved.board);
    }

    #[test]
    fn drag_in_place_is_info() {
        let mut fx = BoardFixture::new().with_notes(2);
        let result = drag(&mut fx.board, 1, 1).unwrap();
        assert!(result.messages[0].content.contains("did not move"));
    }
}
