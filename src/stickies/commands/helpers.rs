use crate::board::NoteBoard;
use crate::error::{Result, StickiesError};

/// Converts a 1-based board position into a list index.
pub fn position_to_index(board: &NoteBoard, position: usize) -> Result<usize> {
    if position == 0 || position > board.len() {
        return Err(StickiesError::Api(format!(
            "Position {} not on the board (1-{})",
            position,
            board.len()
        )));
    }
    Ok(position - 1)
}

/// Text to show for a note in one-line messages.
pub fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 30;
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if flat.is_empty() {
        return "(empty)".to_string();
    }
    if flat.chars().count() > MAX_CHARS {
        let cut: String = flat.chars().take(MAX_CHARS - 1).collect();
        format!("{}…", cut)
    } else {
        flat
    }
}
