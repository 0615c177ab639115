//! Rewindable move timeline with branch-overwrite semantics.

use board_engine::Board;
use thiserror::Error;

/// Error type for rewind requests.
///
/// A bad index is a caller bug and is surfaced as an error rather than
/// clamped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RewindError {
    #[error("rewind index {index} out of range: timeline has {len} entries")]
    OutOfRange { index: usize, len: usize },
}

/// One recorded ply: the move's notation and the snapshot after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Algebraic notation for the move.
    pub notation: String,
    /// The position after the move.
    pub board: Board,
}

/// An ordered sequence of played moves plus a display cursor.
///
/// The cursor is `None` before any entry (the start position) or `Some(i)`
/// when entry `i` is the ply currently displayed. Rewinding only moves the
/// cursor; the next [`append`](Timeline::append) is what discards the old
/// future.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    cursor: Option<usize>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a move at the cursor.
    ///
    /// If the cursor is behind the last entry, every entry after it is
    /// discarded first (branch overwrite; the old future is unrecoverable).
    /// The cursor advances to the new entry.
    pub fn append(&mut self, notation: impl Into<String>, board: Board) {
        let keep = match self.cursor {
            Some(i) => i + 1,
            None => 0,
        };
        self.entries.truncate(keep);
        self.entries.push(TimelineEntry {
            notation: notation.into(),
            board,
        });
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Moves the cursor to `index` and returns that entry's snapshot.
    ///
    /// Does not truncate anything.
    pub fn rewind(&mut self, index: usize) -> Result<&Board, RewindError> {
        if index >= self.entries.len() {
            return Err(RewindError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.cursor = Some(index);
        Ok(&self.entries[index].board)
    }

    /// Moves the cursor before the first entry (the start position).
    pub fn rewind_to_start(&mut self) {
        self.cursor = None;
    }

    /// Returns the cursor, if any entry is displayed.
    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Returns the number of recorded entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all recorded entries in order.
    #[inline]
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Returns true if the entry at `index` is at or before the cursor
    /// (used to highlight which plies are "active").
    pub fn is_active(&self, index: usize) -> bool {
        match self.cursor {
            Some(c) => index <= c,
            None => false,
        }
    }

    /// Returns the notations of the plies up to and including the cursor.
    pub fn active_notations(&self) -> Vec<String> {
        match self.cursor {
            Some(c) => self.entries[..=c]
                .iter()
                .map(|e| e.notation.clone())
                .collect(),
            None => Vec::new(),
        }
    }
}
