//! # Note Board
//!
//! [`NoteBoard`] is the note-list manager: an ordered list of [`Note`]s where the order is
//! the only source of truth for placement. Each note caches its grid cell (`row`, `col`),
//! and every structural change calls [`NoteBoard::reflow`] to re-derive the cells of the
//! whole list from scratch.
//!
//! ## Ids
//!
//! Ids are small positive integers. A new note gets `max(existing ids) + 1`, or `1` on an
//! empty board, so ids of deleted notes at the end of the id range are reused.
//!
//! ## Missing ids
//!
//! Text updates and deletes for an id that is not on the board are no-ops. The methods
//! report whether anything matched so callers can tell the user, but absence is never an
//! error.
//!
//! ## Events
//!
//! UI clients that work in terms of discrete events (click, keystroke, drop) can build a
//! [`BoardEvent`] and hand it to [`NoteBoard::apply`]. Each event runs to completion before
//! the next one is applied.

use crate::error::{Result, StickiesError};
use crate::export::ExportRecord;
use crate::model::{Note, GRID_COLUMNS};
use log::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBoard {
    notes: Vec<Note>,
}

impl NoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from existing notes, re-deriving their cells.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        let mut board = Self { notes };
        board.reflow();
        board
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    /// `max + 1`, or `1` on an empty board. Once `u32::MAX` is taken, the lowest free id.
    pub fn next_id(&self) -> u32 {
        match self.notes.iter().map(|n| n.id).max() {
            None => 1,
            Some(max) => max.checked_add(1).unwrap_or_else(|| self.lowest_free_id()),
        }
    }

    fn lowest_free_id(&self) -> u32 {
        (1..u32::MAX)
            .find(|id| self.get(*id).is_none())
            .unwrap_or(u32::MAX)
    }

    pub fn add_note(&mut self) -> &Note {
        self.add_note_with_text(String::new())
    }

    pub fn add_note_with_text(&mut self, text: impl Into<String>) -> &Note {
        let note = Note::new(self.next_id(), text.into(), self.notes.len());
        debug!("adding note {} at {:?}", note.id, note.cell());
        self.notes.push(note);
        &self.notes[self.notes.len() - 1]
    }

    /// Replaces the text of note `id`. Returns `false` when no note matched.
    pub fn update_text(&mut self, id: u32, text: impl Into<String>) -> bool {
        match self.notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                note.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Appends dropped text to the end of note `id`. Returns `false` when no note matched.
    pub fn append_text(&mut self, id: u32, dropped: &str) -> bool {
        match self.notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                note.text.push_str(dropped);
                true
            }
            None => false,
        }
    }

    /// Removes the note at `from` and reinserts it at `to`.
    pub fn move_note(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.notes.len();
        for index in [from, to] {
            if index >= len {
                return Err(StickiesError::IndexOutOfRange { index, len });
            }
        }

        let note = self.notes.remove(from);
        debug!("moving note {} from {} to {}", note.id, from, to);
        self.notes.insert(to, note);
        self.reflow();
        Ok(())
    }

    /// Removes note `id` and closes the gap. Returns the removed note, if any.
    pub fn delete_note(&mut self, id: u32) -> Option<Note> {
        let index = self.position_of(id)?;
        let removed = self.notes.remove(index);
        self.reflow();
        debug!("deleted note {} ({} remaining)", id, self.notes.len());
        Some(removed)
    }

    /// Export records in current list order.
    pub fn export_all(&self) -> Vec<ExportRecord> {
        self.notes.iter().map(ExportRecord::from).collect()
    }

    /// Notes grouped by grid row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Note]> {
        self.notes.chunks(GRID_COLUMNS)
    }

    /// Applies one discrete user event.
    pub fn apply(&mut self, event: BoardEvent) -> Result<EventOutcome> {
        let outcome = match event {
            BoardEvent::Add { text } => {
                let id = self.add_note_with_text(text.unwrap_or_default()).id;
                EventOutcome::Added(id)
            }
            BoardEvent::Edit { id, text } => {
                EventOutcome::from_match(id, self.update_text(id, text))
            }
            BoardEvent::DropText { id, text } => {
                EventOutcome::from_match(id, self.append_text(id, &text))
            }
            BoardEvent::Move { from, to } => {
                self.move_note(from, to)?;
                EventOutcome::Moved { from, to }
            }
            BoardEvent::Delete { id } => {
                EventOutcome::from_match(id, self.delete_note(id).is_some())
            }
        };
        Ok(outcome)
    }

    fn reflow(&mut self) {
        for (index, note) in self.notes.iter_mut().enumerate() {
            note.place_at(index);
        }
    }
}

/// A discrete user action on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    Add { text: Option<String> },
    Edit { id: u32, text: String },
    DropText { id: u32, text: String },
    Move { from: usize, to: usize },
    Delete { id: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Added(u32),
    Changed(u32),
    Moved { from: usize, to: usize },
    Missing(u32),
}

impl EventOutcome {
    fn from_match(id: u32, matched: bool) -> Self {
        if matched {
            EventOutcome::Changed(id)
        } else {
            EventOutcome::Missing(id)
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::GridCell;

    pub struct BoardFixture {
        pub board: NoteBoard,
    }

    impl Default for BoardFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BoardFixture {
        pub fn new() -> Self {
            Self {
                board: NoteBoard::new(),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for _ in 0..count {
                let id = self.board.next_id();
                self.board.add_note_with_text(format!("note {}", id));
            }
            self
        }

        pub fn with_note(mut self, text: &str) -> Self {
            self.board.add_note_with_text(text);
            self
        }

        /// Replaces the board with notes carrying the given ids, in order.
        pub fn with_ids(mut self, ids: &[u32]) -> Self {
            let notes = ids
                .iter()
                .map(|&id| Note::new(id, format!("note {}", id), 0))
                .collect();
            self.board = NoteBoard::from_notes(notes);
            self
        }

        pub fn ids(&self) -> Vec<u32> {
            self.board.notes().iter().map(|n| n.id).collect()
        }
    }

    /// Returns `true` when every note's cell matches its list position.
    pub fn is_contiguous(notes: &[Note]) -> bool {
        notes
            .iter()
            .enumerate()
            .all(|(i, n)| n.cell() == GridCell::for_index(i))
    }
}
