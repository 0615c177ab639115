//! Board snapshots and move legality for the study board.
//!
//! This crate provides:
//! - [`Board`] - a value-semantics position snapshot with FEN encode/decode
//! - [`CastleRights`] - per-color, per-side castling flags
//! - [`attempt_move`] - the legality pipeline and snapshot mutation
//! - [`MoveRecord`] and [`MoveKind`] - the outcome of a successful move
//!
//! # Design
//!
//! The board is a plain 64-entry array of optional pieces. Every successful
//! move clones the input snapshot and mutates the clone, so any snapshot a
//! caller holds (a displayed history entry, for instance) stays valid
//! forever. Illegal moves are not errors: [`attempt_move`] returns `None`
//! and the input snapshot is untouched.
//!
//! # Example
//!
//! ```
//! use board_core::Square;
//! use board_engine::{attempt_move, Board};
//!
//! let board = Board::startpos();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! let record = attempt_move(&board, e2, e4).unwrap();
//! assert_eq!(record.notation, "e4");
//! ```

mod board;
mod castling;
mod moves;

pub use board::Board;
pub use castling::CastleRights;
pub use moves::{attempt_move, MoveKind, MoveRecord};
