//! End-to-end test of a study session: playing a line through the click
//! protocol, rewinding, diverging, and saving lines into the book.

use board_core::{Color, Square};
use board_study::{ClickOutcome, StudySession};

fn click2(session: &mut StudySession, from: &str, to: &str) -> ClickOutcome {
    let from = Square::from_algebraic(from).expect("valid square");
    let to = Square::from_algebraic(to).expect("valid square");
    session.click(from);
    session.click(to)
}

fn expect_move(session: &mut StudySession, from: &str, to: &str) -> (String, String) {
    match click2(session, from, to) {
        ClickOutcome::Moved { notation, fen } => (notation, fen),
        other => panic!("expected {}-{} to be played, got {:?}", from, to, other),
    }
}

#[test]
fn italian_game_study_flow() {
    let mut session = StudySession::new();

    // 1. e4 e5 2. Nf3 Nc6 3. Bc4
    let (notation, fen) = expect_move(&mut session, "e2", "e4");
    assert_eq!(notation, "e4");
    assert_eq!(
        fen,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
    expect_move(&mut session, "e7", "e5");
    let (notation, _) = expect_move(&mut session, "g1", "f3");
    assert_eq!(notation, "Nf3");
    expect_move(&mut session, "b8", "c6");
    let (notation, _) = expect_move(&mut session, "f1", "c4");
    assert_eq!(notation, "Bc4");

    assert_eq!(session.timeline().len(), 5);
    session.save_line(Color::White);

    // Back to move two and study the Spanish instead.
    session.rewind(2).unwrap();
    expect_move(&mut session, "b8", "c6");
    let (notation, _) = expect_move(&mut session, "f1", "b5");
    assert_eq!(notation, "Bb5");
    session.save_line(Color::White);

    // The divergence overwrote the old branch.
    let notations: Vec<_> = session
        .timeline()
        .entries()
        .iter()
        .map(|e| e.notation.as_str())
        .collect();
    assert_eq!(notations, ["e4", "e5", "Nf3", "Nc6", "Bb5"]);

    // Both studied lines share their four-ply prefix in the book.
    let trie = session.line_book().trie(Color::White);
    assert_eq!(trie.line_count(), 2);
    let shared = trie
        .root()
        .child("e4")
        .and_then(|n| n.child("e5"))
        .and_then(|n| n.child("Nf3"))
        .and_then(|n| n.child("Nc6"))
        .expect("shared prefix is one path");
    assert!(shared.child("Bc4").is_some());
    assert!(shared.child("Bb5").is_some());
}

#[test]
fn illegal_attempts_leave_the_study_untouched() {
    let mut session = StudySession::new();
    expect_move(&mut session, "e2", "e4");
    let fen = session.fen();

    // Black tries a rook lift through its own pawn, then a self-capture.
    assert_eq!(click2(&mut session, "a8", "a4"), ClickOutcome::Rejected);
    assert_eq!(click2(&mut session, "d8", "d7"), ClickOutcome::Rejected);
    assert_eq!(session.fen(), fen);
    assert_eq!(session.timeline().len(), 1);

    // The protocol recovers: a fresh selection still works.
    expect_move(&mut session, "e7", "e5");
    assert_eq!(session.timeline().len(), 2);
}

#[test]
fn castling_over_the_click_protocol() {
    let mut session =
        StudySession::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();

    let (notation, fen) = expect_move(&mut session, "e1", "g1");
    assert_eq!(notation, "O-O");
    assert!(fen.starts_with("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R4RK1 b"));
    assert!(fen.contains(" kq "));

    let (notation, fen) = expect_move(&mut session, "e8", "c8");
    assert_eq!(notation, "O-O-O");
    assert!(fen.starts_with("2kr3r/pppppppp/8/8/8/8/PPPPPPPP/R4RK1 w"));
    assert!(fen.contains(" - "));
}

#[test]
fn en_passant_over_the_click_protocol() {
    let mut session = StudySession::new();
    expect_move(&mut session, "e2", "e4");
    expect_move(&mut session, "a7", "a6");
    expect_move(&mut session, "e4", "e5");
    let (_, fen) = expect_move(&mut session, "d7", "d5");
    assert!(fen.contains(" d6 "));

    let (notation, fen) = expect_move(&mut session, "e5", "d6");
    assert_eq!(notation, "exd6");
    // The d5 pawn is gone; the white pawn stands on d6.
    assert!(fen.starts_with("rnbqkbnr/1pp1pppp/p2P4/8/8/8/PPPP1PPP/RNBQKBNR b"));
}
