//! Move legality and application.
//!
//! [`attempt_move`] is the single entry point: it re-validates everything
//! (the two-phase selection caller is not trusted), builds a fresh successor
//! snapshot on success, and answers `None` for any illegal request. A `None`
//! is a normal negative result, not an error; the input board is untouched
//! either way.
//!
//! King safety is deliberately out of scope: a move that leaves or places
//! the mover's king in check is accepted. There is no promotion step either;
//! a pawn reaching the last rank relocates and stays a pawn.

use board_core::{Color, Piece, Square};

use crate::Board;

/// Classification of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Ordinary relocation or capture.
    Normal,
    /// Pawn double push from its home rank.
    DoublePush,
    /// Kingside castling (O-O).
    CastleKingside,
    /// Queenside castling (O-O-O).
    CastleQueenside,
    /// En passant capture.
    EnPassant,
}

impl MoveKind {
    /// Returns true if this is a castling move.
    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }
}

/// The outcome of a successful [`attempt_move`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// The successor snapshot. The input board is never aliased or mutated.
    pub board: Board,
    /// Algebraic notation for the move (e.g. "e4", "Nf3", "exd5", "O-O").
    pub notation: String,
    /// What kind of move this was.
    pub kind: MoveKind,
    /// True if a piece was captured (including en passant).
    pub capture: bool,
}

/// Attempts the move `from` → `to` for the side to move.
///
/// Legality is checked in order, short-circuiting on the first failure:
/// ownership of the origin and destination, an empty path for any move that
/// spans more than one square in a straight line, then per-piece geometry
/// (with castling and en passant as king/pawn special cases).
pub fn attempt_move(board: &Board, from: Square, to: Square) -> Option<MoveRecord> {
    let mover = board.side_to_move;
    let (piece, color) = board.piece_at(from)?;
    if color != mover {
        return None;
    }
    if let Some((_, occupant)) = board.piece_at(to) {
        // Also rejects the no-op self-click (from == to).
        if occupant == mover {
            return None;
        }
    }

    let dr = to.rank().index() as i8 - from.rank().index() as i8;
    let df = to.file().index() as i8 - from.file().index() as i8;

    let straight = dr == 0 || df == 0 || dr.abs() == df.abs();
    if straight && dr.abs().max(df.abs()) > 1 && !path_clear(board, from, dr, df) {
        return None;
    }

    let kind = match piece {
        Piece::Pawn => pawn_move_kind(board, from, to, mover, dr, df)?,
        Piece::Knight => {
            if !matches!((dr.abs(), df.abs()), (1, 2) | (2, 1)) {
                return None;
            }
            MoveKind::Normal
        }
        Piece::Bishop => {
            if dr.abs() != df.abs() {
                return None;
            }
            MoveKind::Normal
        }
        Piece::Rook => {
            if (dr == 0) == (df == 0) {
                return None;
            }
            MoveKind::Normal
        }
        Piece::Queen => {
            if dr.abs() != df.abs() && (dr == 0) == (df == 0) {
                return None;
            }
            MoveKind::Normal
        }
        Piece::King => king_move_kind(board, mover, dr, df)?,
    };

    let capture = board.piece_at(to).is_some() || kind == MoveKind::EnPassant;

    let mut next = board.clone();
    next.clear_square(from);
    next.set_piece(to, piece, mover);

    match kind {
        MoveKind::CastleKingside => {
            let (corner, rook_to) = match mover {
                Color::White => (Square::H1, Square::F1),
                Color::Black => (Square::H8, Square::F8),
            };
            next.clear_square(corner);
            next.set_piece(rook_to, Piece::Rook, mover);
        }
        MoveKind::CastleQueenside => {
            let (corner, rook_to) = match mover {
                Color::White => (Square::A1, Square::D1),
                Color::Black => (Square::A8, Square::D8),
            };
            next.clear_square(corner);
            next.set_piece(rook_to, Piece::Rook, mover);
        }
        MoveKind::EnPassant => {
            // The captured pawn sits one rank behind the destination, which
            // is the destination's file on the origin's rank.
            next.clear_square(Square::new(to.file(), from.rank()));
        }
        MoveKind::Normal | MoveKind::DoublePush => {}
    }

    match piece {
        Piece::King => next.castling.clear_color(mover),
        Piece::Rook => {
            let (kingside_corner, queenside_corner) = match mover {
                Color::White => (Square::H1, Square::A1),
                Color::Black => (Square::H8, Square::A8),
            };
            if from == kingside_corner {
                next.castling.clear_kingside(mover);
            } else if from == queenside_corner {
                next.castling.clear_queenside(mover);
            }
        }
        _ => {}
    }

    next.en_passant = if kind == MoveKind::DoublePush {
        // The skipped square, one rank behind the destination.
        from.offset(mover.pawn_direction(), 0)
    } else {
        None
    };

    next.halfmove_clock = if capture || piece == Piece::Pawn {
        0
    } else {
        board.halfmove_clock + 1
    };
    if mover == Color::Black {
        next.fullmove_number += 1;
    }
    next.side_to_move = mover.opposite();

    let notation = notation_for(piece, from, to, kind, capture);

    Some(MoveRecord {
        board: next,
        notation,
        kind,
        capture,
    })
}

/// Returns true if every square strictly between `from` and `from + (dr, df)`
/// is empty. The deltas must describe a rank, file, or diagonal line.
fn path_clear(board: &Board, from: Square, dr: i8, df: i8) -> bool {
    let (step_r, step_f) = (dr.signum(), df.signum());
    let mut sq = from;
    for _ in 1..dr.abs().max(df.abs()) {
        sq = match sq.offset(step_r, step_f) {
            Some(s) => s,
            None => return false,
        };
        if board.piece_at(sq).is_some() {
            return false;
        }
    }
    true
}

fn pawn_move_kind(
    board: &Board,
    from: Square,
    to: Square,
    mover: Color,
    dr: i8,
    df: i8,
) -> Option<MoveKind> {
    let dir = mover.pawn_direction();
    if df == 0 {
        // Straight pushes only land on empty squares; the double-push
        // intermediate was already covered by the path check.
        if board.piece_at(to).is_some() {
            return None;
        }
        if dr == dir {
            return Some(MoveKind::Normal);
        }
        if dr == 2 * dir && from.rank().index() == mover.home_rank() {
            return Some(MoveKind::DoublePush);
        }
        return None;
    }
    if df.abs() == 1 && dr == dir {
        if board.piece_at(to).is_some() {
            // Occupant is the opposing color; same-color was rejected earlier.
            return Some(MoveKind::Normal);
        }
        if board.en_passant == Some(to) {
            return Some(MoveKind::EnPassant);
        }
    }
    None
}

fn king_move_kind(board: &Board, mover: Color, dr: i8, df: i8) -> Option<MoveKind> {
    if dr.abs() <= 1 && df.abs() <= 1 {
        return Some(MoveKind::Normal);
    }
    // A right can outlive its rook: capturing an unmoved corner rook does
    // not clear the opponent's flag. Castling still needs the rook there.
    if dr == 0 && df == 2 && board.castling.can_kingside(mover) {
        let corner = match mover {
            Color::White => Square::H1,
            Color::Black => Square::H8,
        };
        if board.piece_at(corner) == Some((Piece::Rook, mover)) {
            return Some(MoveKind::CastleKingside);
        }
    }
    if dr == 0 && df == -2 && board.castling.can_queenside(mover) {
        let corner = match mover {
            Color::White => Square::A1,
            Color::Black => Square::A8,
        };
        if board.piece_at(corner) == Some((Piece::Rook, mover)) {
            return Some(MoveKind::CastleQueenside);
        }
    }
    None
}

fn notation_for(piece: Piece, from: Square, to: Square, kind: MoveKind, capture: bool) -> String {
    match kind {
        MoveKind::CastleKingside => "O-O".to_string(),
        MoveKind::CastleQueenside => "O-O-O".to_string(),
        _ => {
            let mut out = String::new();
            if let Some(letter) = piece.notation_letter() {
                out.push(letter);
            }
            if capture {
                if piece == Piece::Pawn {
                    out.push(from.file().to_char());
                }
                out.push('x');
            }
            out.push_str(&to.to_algebraic());
            out
        }
    }
}
