use super::*;
use crate::notation::play_line;

fn sq(c: &str) -> Square {
    Square::from_coord(c).unwrap()
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos, Color::White);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
    assert_eq!(legal_moves(&pos, Color::Black).len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let moves = side_legal_moves(&pos);
    assert_eq!(moves.len(), 48);
    assert_eq!(moves.iter().filter(|m| m.is_castle).count(), 2);
}

#[test]
fn test_pinned_piece_cannot_move_off_line() {
    // Knight on e2 pinned by the rook on e8
    let pos = Position::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
    assert!(legal_moves_from(&pos, sq("e2")).is_empty());
}

#[test]
fn test_must_answer_check() {
    // Rook gives check on the e-file; only king moves and the block on e2 help
    let pos = Position::from_fen("4r1k1/8/8/8/8/8/3B4/4K3 w - - 0 1").unwrap();
    let moves = side_legal_moves(&pos);
    for mv in &moves {
        assert!(!pos.after(*mv).in_check(Color::White), "{mv} leaves king in check");
    }
    assert!(moves.iter().any(|m| m.from == sq("d2") && m.to == sq("e3")));
    assert!(!moves.iter().any(|m| m.from == sq("d2") && m.to == sq("c3")));
}

#[test]
fn test_checkmate_has_no_moves() {
    // Scholar's mate, black to move
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    assert!(side_legal_moves(&pos).is_empty());
    assert!(pos.in_check(Color::Black));
}

#[test]
fn test_stalemate_has_no_moves() {
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(side_legal_moves(&pos).is_empty());
    assert!(!pos.in_check(Color::Black));
}

#[test]
fn test_legal_moves_from_empty_square() {
    let pos = Position::startpos();
    assert!(legal_moves_from(&pos, sq("e4")).is_empty());
}

#[test]
fn test_legal_moves_from_ignores_side_not_to_move() {
    let mut pos = Position::startpos();
    assert!(legal_moves_from(&pos, sq("e7")).is_empty());
    assert_eq!(legal_moves_from(&pos, sq("e2")).len(), 2);

    play_line(&mut pos, "e2e4").unwrap();
    // White's d-pawn must not use black's en passant target on e3.
    assert!(legal_moves_from(&pos, sq("d2")).is_empty());
    assert_eq!(legal_moves_from(&pos, sq("e7")).len(), 2);
}

#[test]
fn test_generation_order_is_stable() {
    let pos = Position::startpos();
    assert_eq!(side_legal_moves(&pos), side_legal_moves(&pos));
}
