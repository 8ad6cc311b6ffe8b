use serde::{Deserialize, Serialize};

/// Number of columns in the board grid.
pub const GRID_COLUMNS: usize = 3;

/// A cell in the board grid, derived from a note's position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    pub fn for_index(index: usize) -> Self {
        Self {
            row: index / GRID_COLUMNS,
            col: index % GRID_COLUMNS,
        }
    }

    /// Manhattan distance from the top-left cell.
    pub fn distance_from_corner(&self) -> usize {
        self.row + self.col
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub text: String,
    // Cached from the list position; only the board writes these
    pub row: usize,
    pub col: usize,
}

impl Note {
    pub fn new(id: u32, text: String, index: usize) -> Self {
        let cell = GridCell::for_index(index);
        Self {
            id,
            text,
            row: cell.row,
            col: cell.col,
        }
    }

    pub fn cell(&self) -> GridCell {
        GridCell {
            row: self.row,
            col: self.col,
        }
    }

    pub(crate) fn place_at(&mut self, index: usize) {
        let cell = GridCell::for_index(index);
        self.row = cell.row;
        self.col = cell.col;
    }

    pub fn title(&self) -> String {
        format!("Note {}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_follows_three_column_layout() {
        for i in 0..20 {
            let cell = GridCell::for_index(i);
            assert_eq!(cell.row, i / 3);
            assert_eq!(cell.col, i % 3);
            assert!(cell.col < GRID_COLUMNS);
        }
    }

    #[test]
    fn corner_distance_is_row_plus_col() {
        assert_eq!(GridCell::for_index(0).distance_from_corner(), 0);
        assert_eq!(GridCell::for_index(5).distance_from_corner(), 3);
        assert_eq!(GridCell::for_index(7).distance_from_corner(), 3);
    }

    #[test]
    fn new_note_is_placed_by_index() {
        let note = Note::new(9, "hello".into(), 4);
        assert_eq!(note.cell(), GridCell { row: 1, col: 1 });
        assert_eq!(note.title(), "Note 9");
    }
}
