//! Core types for the study board.
//!
//! This crate provides the fundamental types shared by the move engine and
//! the study layer:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`FenFields`] for parsing and reassembling position strings

mod color;
mod fen;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenFields};
pub use piece::Piece;
pub use square::{File, Rank, Square};
