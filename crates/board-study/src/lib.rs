//! Move timeline and opening-line study on top of the board engine.
//!
//! This crate provides:
//! - [`Timeline`] - an ordered, rewindable sequence of played moves with
//!   branch-overwrite semantics
//! - [`LineTrie`] and [`LineBook`] - a prefix tree of studied opening lines,
//!   one trie per side
//! - [`StudySession`] - the interactive façade: two-phase square selection,
//!   move application, timeline recording, and line saving
//!
//! # Example
//!
//! ```
//! use board_core::Square;
//! use board_study::{ClickOutcome, StudySession};
//!
//! let mut session = StudySession::new();
//! session.click(Square::from_algebraic("e2").unwrap());
//! let outcome = session.click(Square::from_algebraic("e4").unwrap());
//! assert!(matches!(outcome, ClickOutcome::Moved { .. }));
//! ```

mod lines;
mod session;
mod timeline;

pub use lines::{LineBook, LineNode, LineTrie};
pub use session::{ClickOutcome, StudySession};
pub use timeline::{RewindError, Timeline, TimelineEntry};
