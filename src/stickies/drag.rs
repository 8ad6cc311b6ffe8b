//! Drag sessions and the hover threshold.
//!
//! A drag gesture reports the hovered item continuously. To avoid flicker, a hover only
//! turns into a reorder once the pointer has crossed the vertical middle of the hovered
//! item: dragging downward the pointer must be at or below the middle, dragging upward at
//! or above it. Every move that passes the threshold is a full reorder instruction for the
//! board, after which the dragged item lives at the hovered index.

use crate::board::NoteBoard;
use crate::error::{Result, StickiesError};
use log::{debug, trace};

/// Vertical extent of the hovered item, in the same coordinates as the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverRect {
    pub top: f64,
    pub bottom: f64,
}

impl HoverRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    fn half_height(&self) -> f64 {
        (self.bottom - self.top) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragMove {
    pub from: usize,
    pub to: usize,
}

/// State of one drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    note_id: u32,
    index: usize,
}

impl DragSession {
    /// Starts dragging note `id`.
    pub fn begin(board: &NoteBoard, id: u32) -> Result<Self> {
        let index = board
            .position_of(id)
            .ok_or_else(|| StickiesError::Api(format!("Note {} is not on the board", id)))?;
        Ok(Self { note_id: id, index })
    }

    pub fn note_id(&self) -> u32 {
        self.note_id
    }

    /// Current list index of the dragged note.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Decides whether hovering `hover_index` at `pointer_y` should move the dragged note.
    ///
    /// Does not touch the board; see [`DragSession::hover`].
    pub fn hover_target(
        &self,
        hover_index: usize,
        pointer_y: f64,
        rect: HoverRect,
    ) -> Option<DragMove> {
        let drag_index = self.index;
        if drag_index == hover_index {
            return None;
        }

        let middle = rect.half_height();
        let offset = pointer_y - rect.top;
        if drag_index < hover_index && offset < middle {
            return None;
        }
        if drag_index > hover_index && offset > middle {
            return None;
        }

        Some(DragMove {
            from: drag_index,
            to: hover_index,
        })
    }

    /// Handles one hover report, reordering the board when the threshold is crossed.
    pub fn hover(
        &mut self,
        board: &mut NoteBoard,
        hover_index: usize,
        pointer_y: f64,
        rect: HoverRect,
    ) -> Result<Option<DragMove>> {
        if hover_index >= board.len() {
            return Err(StickiesError::IndexOutOfRange {
                index: hover_index,
                len: board.len(),
            });
        }

        let Some(step) = self.hover_target(hover_index, pointer_y, rect) else {
            trace!("hover over {} below threshold", hover_index);
            return Ok(None);
        };

        board.move_note(step.from, step.to)?;
        self.index = step.to;
        Ok(Some(step))
    }

    /// Ends the gesture, returning the final index of the dragged note.
    pub fn finish(self) -> usize {
        self.index
    }
}

/// Simulates a whole gesture from the note at `from` to index `to`, hovering over each
/// cell in between with the pointer past the middle.
pub fn drag_across(board: &mut NoteBoard, from: usize, to: usize) -> Result<Vec<DragMove>> {
    let len = board.len();
    for index in [from, to] {
        if index >= len {
            return Err(StickiesError::IndexOutOfRange { index, len });
        }
    }

    let id = board.notes()[from].id;
    let mut session = DragSession::begin(board, id)?;
    let rect = HoverRect::new(0.0, 1.0);
    let mut moves = Vec::new();

    let path: Vec<usize> = if from <= to {
        (from..=to).collect()
    } else {
        (to..=from).rev().collect()
    };
    for hover_index in path {
        let pointer_y = if hover_index > session.index() { 1.0 } else { 0.0 };
        if let Some(step) = session.hover(board, hover_index, pointer_y, rect)? {
            moves.push(step);
        }
    }

    let note_id = session.note_id();
    let end = session.finish();
    debug!(
        "dragged note {} from {} to {} in {} step(s)",
        note_id,
        from,
        end,
        moves.len()
    );
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fixtures::BoardFixture;

    fn rect() -> HoverRect {
        HoverRect::new(100.0, 200.0)
    }

    #[test]
    fn hovering_self_does_nothing() {
        let mut fx = BoardFixture::new().with_notes(3);
        let mut session = DragSession::begin(&fx.board, 2).unwrap();
        let res = session.hover(&mut fx.board, 1, 190.0, rect()).unwrap();
        assert_eq!(res, None);
    }

    #[test]
    fn downward_drag_waits_for_middle() {
        let mut fx = BoardFixture::new().with_notes(3);
        let mut session = DragSession::begin(&fx.board, 1).unwrap();

        // offset 30 < middle 50
        assert_eq!(session.hover(&mut fx.board, 1, 130.0, rect()).unwrap(), None);
        assert_eq!(fx.ids(), vec![1, 2, 3]);

        let step = session.hover(&mut fx.board, 1, 160.0, rect()).unwrap();
        assert_eq!(step, Some(DragMove { from: 0, to: 1 }));
        assert_eq!(fx.ids(), vec![2, 1, 3]);
        assert_eq!(session.index(), 1);
    }

    #[test]
    fn upward_drag_waits_for_middle() {
        let mut fx = BoardFixture::new().with_notes(3);
        let mut session = DragSession::begin(&fx.board, 3).unwrap();

        assert_eq!(session.hover(&mut fx.board, 1, 170.0, rect()).unwrap(), None);
        let step = session.hover(&mut fx.board, 1, 120.0, rect()).unwrap();
        assert_eq!(step, Some(DragMove { from: 2, to: 1 }));
        assert_eq!(fx.ids(), vec![1, 3, 2]);
    }

    #[test]
    fn pointer_exactly_at_middle_moves() {
        let fx = BoardFixture::new().with_notes(2);
        let session = DragSession::begin(&fx.board, 1).unwrap();
        assert!(session.hover_target(1, 150.0, rect()).is_some());
    }

    #[test]
    fn hover_out_of_range_is_rejected() {
        let mut fx = BoardFixture::new().with_notes(2);
        let mut session = DragSession::begin(&fx.board, 1).unwrap();
        assert!(matches!(
            session.hover(&mut fx.board, 5, 150.0, rect()),
            Err(StickiesError::IndexOutOfRange { index: 5, len: 2 })
        ));
    }

    #[test]
    fn begin_unknown_note_fails() {
        let fx = BoardFixture::new().with_notes(1);
        assert!(DragSession::begin(&fx.board, 4).is_err());
    }

    #[test]
    fn drag_across_moves_one_cell_at_a_time() {
        let mut fx = BoardFixture::new().with_notes(5);
        let moves = drag_across(&mut fx.board, 0, 3).unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(fx.ids(), vec![2, 3, 4, 1, 5]);

        let moves = drag_across(&mut fx.board, 3, 0).unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(fx.ids(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn drag_across_same_index_is_noop() {
        let mut fx = BoardFixture::new().with_notes(3);
        assert!(drag_across(&mut fx.board, 1, 1).unwrap().is_empty());
        assert_eq!(fx.ids(), vec![1, 2, 3]);
    }
}
