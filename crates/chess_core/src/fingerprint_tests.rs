use super::*;
use crate::notation::play_line;

#[test]
fn test_startpos_fingerprint() {
    let fp = Position::startpos().fingerprint();
    assert_eq!(
        fp.as_str(),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"
    );
}

#[test]
fn test_fingerprint_after_e4() {
    let mut pos = Position::startpos();
    play_line(&mut pos, "e2e4").unwrap();
    assert_eq!(
        pos.fingerprint().as_str(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"
    );
}

#[test]
fn test_fingerprint_ignores_move_history() {
    // Knights out and back reach the start placement again
    let mut pos = Position::startpos();
    play_line(&mut pos, "g1f3 g8f6 f3g1 f6g8").unwrap();
    assert_eq!(pos.fingerprint(), Position::startpos().fingerprint());
}

#[test]
fn test_fingerprint_ignores_castling_and_en_passant() {
    let a = Position::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w KQkq d6").unwrap();
    let b = Position::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w - -").unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn test_fingerprint_distinguishes_side_to_move() {
    let w = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
    let b = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - -").unwrap();
    assert_ne!(w.fingerprint(), b.fingerprint());
}

#[test]
fn test_fingerprint_serializes_as_plain_string() {
    let fp = Fingerprint::from("8/8/8/8/8/8/8/8 w");
    assert_eq!(serde_json::to_string(&fp).unwrap(), "\"8/8/8/8/8/8/8/8 w\"");
}
