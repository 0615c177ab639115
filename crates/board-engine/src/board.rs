//! Board snapshot representation and the position codec.

use board_core::{Color, FenError, FenFields, Piece, Square};

use crate::CastleRights;

/// A complete position snapshot.
///
/// Snapshots have value semantics: the move engine never mutates a board in
/// place, it clones and mutates the clone. Derived state (side to move,
/// castle rights, en passant target, clocks) is stored as first-class fields
/// and updated incrementally by the engine, never re-derived from the piece
/// placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// One optional piece per square, indexed rank-major from the top row
    /// (a8 = 0, h1 = 63).
    pub squares: [Option<(Piece, Color)>; 64],

    /// The side to move.
    pub side_to_move: Color,

    /// Castle rights.
    pub castling: CastleRights,

    /// En passant target square, set only immediately after a double push.
    pub en_passant: Option<Square>,

    /// Halfmove clock.
    pub halfmove_clock: u32,

    /// Fullmove number (starts at 1, increments after Black's move).
    pub fullmove_number: u32,
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_fen(FenFields::STARTPOS).expect("STARTPOS is valid")
    }

    /// Decodes a position string into a board.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let fields = FenFields::parse(fen)?;
        let mut board = Board::empty();

        // The placement field is written top rank first, which is exactly
        // our rank index order.
        for (rank, rank_str) in fields.placement.split('/').enumerate() {
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    file += digit as u8;
                } else if let Some((piece, color)) = Piece::from_fen_char(c) {
                    let index = rank as u8 * 8 + file;
                    board.squares[index as usize] = Some((piece, color));
                    file += 1;
                }
            }
        }

        board.side_to_move = match fields.active_color {
            'w' => Color::White,
            'b' => Color::Black,
            _ => unreachable!("field parser validated this"),
        };

        let mut castling = 0u8;
        for c in fields.castling.chars() {
            match c {
                'K' => castling |= CastleRights::WHITE_KINGSIDE,
                'Q' => castling |= CastleRights::WHITE_QUEENSIDE,
                'k' => castling |= CastleRights::BLACK_KINGSIDE,
                'q' => castling |= CastleRights::BLACK_QUEENSIDE,
                _ => {}
            }
        }
        board.castling = CastleRights::new(castling);

        board.en_passant = if fields.en_passant == "-" {
            None
        } else {
            Square::from_algebraic(&fields.en_passant)
        };

        board.halfmove_clock = fields.halfmove_clock;
        board.fullmove_number = fields.fullmove_number;

        Ok(board)
    }

    /// Encodes the board as a canonical position string.
    ///
    /// Empty runs collapse to the largest digit, castle rights render in
    /// fixed `KQkq` order (or `-`), en passant as a square name or `-`.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in 0..8u8 {
            let mut empty_run = 0;
            for file in 0..8u8 {
                match self.squares[(rank * 8 + file) as usize] {
                    Some((piece, color)) => {
                        if empty_run > 0 {
                            fen.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                fen.push_str(&empty_run.to_string());
            }
            if rank < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        if self.castling.raw() == 0 {
            fen.push('-');
        } else {
            if self.castling.can_kingside(Color::White) {
                fen.push('K');
            }
            if self.castling.can_queenside(Color::White) {
                fen.push('Q');
            }
            if self.castling.can_kingside(Color::Black) {
                fen.push('k');
            }
            if self.castling.can_queenside(Color::Black) {
                fen.push('q');
            }
        }

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq.to_algebraic()),
            None => fen.push('-'),
        }

        fen.push(' ');
        fen.push_str(&self.halfmove_clock.to_string());
        fen.push(' ');
        fen.push_str(&self.fullmove_number.to_string());

        fen
    }

    /// Returns the piece and color at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        self.squares[sq.index() as usize]
    }

    /// Places a piece on a square, replacing any occupant.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Piece, color: Color) {
        self.squares[sq.index() as usize] = Some((piece, color));
    }

    /// Empties a square.
    #[inline]
    pub fn clear_square(&mut self, sq: Square) {
        self.squares[sq.index() as usize] = None;
    }

    /// Returns the number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}
