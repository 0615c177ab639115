//! Interactive study session: two-phase square selection over a board,
//! a recorded timeline, and a per-side line book.

use board_core::{Color, FenError, Square};
use board_engine::{attempt_move, Board};

use crate::{LineBook, RewindError, Timeline};

/// The result of forwarding one square click to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The square held a piece of the side to move; it is now selected.
    Selected(Square),
    /// A move was made. Emitted exactly once per successful move.
    Moved {
        /// Algebraic notation for the move.
        notation: String,
        /// The resulting position string.
        fen: String,
    },
    /// A destination was supplied but the move was illegal. The selection
    /// is cleared; the position is unchanged.
    Rejected,
    /// Nothing to do: no selection and the square holds no piece of the
    /// side to move. A normal idle condition, not an error.
    Idle,
}

/// A study session over one board.
///
/// All operations are synchronous and run to completion; a concurrent host
/// must serialize calls per session.
#[derive(Debug, Clone)]
pub struct StudySession {
    start: Board,
    board: Board,
    selected: Option<Square>,
    timeline: Timeline,
    lines: LineBook,
}

impl StudySession {
    /// Creates a session from the standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::startpos())
    }

    /// Creates a session from a position string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_board(Board::from_fen(fen)?))
    }

    fn from_board(board: Board) -> Self {
        StudySession {
            start: board.clone(),
            board,
            selected: None,
            timeline: Timeline::new(),
            lines: LineBook::new(),
        }
    }

    /// Forwards one square click.
    ///
    /// The first click selects a square holding a piece of the side to move;
    /// the next click supplies the destination and attempts the move. Any
    /// attempt, legal or not, clears the selection.
    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        let from = match self.selected.take() {
            Some(from) => from,
            None => {
                return match self.board.piece_at(sq) {
                    Some((_, color)) if color == self.board.side_to_move => {
                        self.selected = Some(sq);
                        ClickOutcome::Selected(sq)
                    }
                    _ => ClickOutcome::Idle,
                };
            }
        };

        match attempt_move(&self.board, from, sq) {
            Some(record) => {
                self.board = record.board.clone();
                self.timeline.append(record.notation.clone(), record.board);
                ClickOutcome::Moved {
                    notation: record.notation,
                    fen: self.board.to_fen(),
                }
            }
            None => ClickOutcome::Rejected,
        }
    }

    /// Rewinds the timeline to `index` and adopts that snapshot as the
    /// current position, so play can diverge from there. Returns the
    /// position string for display.
    pub fn rewind(&mut self, index: usize) -> Result<String, RewindError> {
        let board = self.timeline.rewind(index)?.clone();
        self.board = board;
        self.selected = None;
        Ok(self.board.to_fen())
    }

    /// Rewinds to the position the session started from.
    pub fn rewind_to_start(&mut self) -> String {
        self.timeline.rewind_to_start();
        self.board = self.start.clone();
        self.selected = None;
        self.board.to_fen()
    }

    /// Merges the current move prefix (plies up to and including the
    /// cursor) into the line book for `side`.
    pub fn save_line(&mut self, side: Color) {
        self.lines.insert_line(side, self.timeline.active_notations());
    }

    /// Returns the current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current position as a string.
    pub fn fen(&self) -> String {
        self.board.to_fen()
    }

    /// Returns the currently selected origin square, if any.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Returns the recorded timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Returns the studied lines.
    pub fn line_book(&self) -> &LineBook {
        &self.lines
    }
}

impl Default for StudySession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn make_move(session: &mut StudySession, from: &str, to: &str) -> ClickOutcome {
        session.click(sq(from));
        session.click(sq(to))
    }

    #[test]
    fn first_click_selects_own_piece() {
        let mut session = StudySession::new();
        assert_eq!(session.click(sq("e2")), ClickOutcome::Selected(sq("e2")));
        assert_eq!(session.selected(), Some(sq("e2")));
    }

    #[test]
    fn first_click_on_empty_or_enemy_square_is_idle() {
        let mut session = StudySession::new();
        assert_eq!(session.click(sq("e4")), ClickOutcome::Idle);
        assert_eq!(session.click(sq("e7")), ClickOutcome::Idle);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn second_click_makes_the_move() {
        let mut session = StudySession::new();
        let outcome = make_move(&mut session, "e2", "e4");
        match outcome {
            ClickOutcome::Moved { notation, fen } => {
                assert_eq!(notation, "e4");
                assert_eq!(fen, session.fen());
                assert!(fen.contains(" b "));
            }
            other => panic!("expected a move, got {:?}", other),
        }
        assert_eq!(session.selected(), None);
        assert_eq!(session.timeline().len(), 1);
    }

    #[test]
    fn illegal_destination_clears_selection_and_keeps_position() {
        let mut session = StudySession::new();
        let before = session.fen();
        assert_eq!(make_move(&mut session, "e2", "e5"), ClickOutcome::Rejected);
        assert_eq!(session.selected(), None);
        assert_eq!(session.fen(), before);
        assert_eq!(session.timeline().len(), 0);
    }

    #[test]
    fn clicking_another_own_piece_as_destination_clears_selection() {
        let mut session = StudySession::new();
        assert_eq!(make_move(&mut session, "e2", "d2"), ClickOutcome::Rejected);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn rewind_adopts_the_earlier_position() {
        let mut session = StudySession::new();
        make_move(&mut session, "e2", "e4");
        make_move(&mut session, "e7", "e5");
        make_move(&mut session, "g1", "f3");

        let fen = session.rewind(0).unwrap();
        assert_eq!(fen, session.fen());
        assert!(fen.starts_with("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"));
        // Nothing was truncated yet.
        assert_eq!(session.timeline().len(), 3);
    }

    #[test]
    fn moving_after_rewind_diverges() {
        let mut session = StudySession::new();
        make_move(&mut session, "e2", "e4");
        make_move(&mut session, "e7", "e5");
        make_move(&mut session, "g1", "f3");
        make_move(&mut session, "b8", "c6");

        session.rewind(1).unwrap();
        make_move(&mut session, "f1", "c4");

        let notations: Vec<_> = session
            .timeline()
            .entries()
            .iter()
            .map(|e| e.notation.as_str())
            .collect();
        assert_eq!(notations, ["e4", "e5", "Bc4"]);
    }

    #[test]
    fn rewind_bad_index_is_an_error() {
        let mut session = StudySession::new();
        make_move(&mut session, "e2", "e4");
        assert!(session.rewind(1).is_err());
    }

    #[test]
    fn rewind_to_start_restores_the_initial_position() {
        let custom = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
        let mut session = StudySession::from_fen(custom).unwrap();
        make_move(&mut session, "f1", "c4");
        assert_ne!(session.fen(), custom);
        assert_eq!(session.rewind_to_start(), custom);
        assert_eq!(session.fen(), custom);
    }

    #[test]
    fn save_line_records_the_active_prefix() {
        let mut session = StudySession::new();
        make_move(&mut session, "e2", "e4");
        make_move(&mut session, "e7", "e5");
        session.save_line(Color::White);

        session.rewind(0).unwrap();
        make_move(&mut session, "c7", "c5");
        session.save_line(Color::White);

        let trie = session.line_book().trie(Color::White);
        assert_eq!(trie.root().children().len(), 1);
        let e4 = trie.root().child("e4").unwrap();
        assert!(e4.child("e5").is_some());
        assert!(e4.child("c5").is_some());
        assert_eq!(trie.line_count(), 2);
    }

    #[test]
    fn from_fen_rejects_malformed_input() {
        assert!(StudySession::from_fen("garbage").is_err());
    }
}
