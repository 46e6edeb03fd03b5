use super::*;

fn sq(c: &str) -> Square {
    Square::from_coord(c).unwrap()
}

#[test]
fn test_pawn_attacks_diagonals_not_pushes() {
    // White pawn on e4 attacks d5 and f5 but not e5
    let pos = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").unwrap();
    assert!(is_square_attacked(&pos, sq("d5"), Color::White));
    assert!(is_square_attacked(&pos, sq("f5"), Color::White));
    assert!(!is_square_attacked(&pos, sq("e5"), Color::White));

    // Black pawn on d5 attacks c4 and e4
    let pos = Position::from_fen("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(is_square_attacked(&pos, sq("c4"), Color::Black));
    assert!(is_square_attacked(&pos, sq("e4"), Color::Black));
    assert!(!is_square_attacked(&pos, sq("d4"), Color::Black));
}

#[test]
fn test_knight_and_king_attacks() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").unwrap();
    assert!(is_square_attacked(&pos, sq("b3"), Color::White));
    assert!(is_square_attacked(&pos, sq("c2"), Color::White));
    assert!(!is_square_attacked(&pos, sq("c3"), Color::White));
    // King adjacency
    assert!(is_square_attacked(&pos, sq("d2"), Color::White));
    assert!(is_square_attacked(&pos, sq("f1"), Color::White));
    assert!(is_square_attacked(&pos, sq("d7"), Color::Black));
}

#[test]
fn test_slider_attacks_blocked() {
    // Rook a1, own pawn a3 blocks the file
    let pos = Position::from_fen("4k3/8/8/8/8/P7/8/R3K3 w - - 0 1").unwrap();
    assert!(is_square_attacked(&pos, sq("a2"), Color::White));
    assert!(is_square_attacked(&pos, sq("a3"), Color::White));
    assert!(!is_square_attacked(&pos, sq("a4"), Color::White));
    assert!(is_square_attacked(&pos, sq("d1"), Color::White));

    // Bishop c1 on the long diagonal
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1").unwrap();
    assert!(is_square_attacked(&pos, sq("h6"), Color::White));
    assert!(!is_square_attacked(&pos, sq("c2"), Color::White));
}

#[test]
fn test_in_check() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").unwrap();
    assert!(in_check(&pos, Color::Black));
    assert!(!in_check(&pos, Color::White));
    assert!(pos.in_check(Color::Black));
}

#[test]
fn test_missing_king_is_not_check() {
    let pos = Position::from_fen("8/8/8/8/8/8/8/4R1K1 b - - 0 1").unwrap();
    assert!(!in_check(&pos, Color::Black));
}

#[test]
fn test_startpos_nobody_in_check() {
    let pos = Position::startpos();
    assert!(!in_check(&pos, Color::White));
    assert!(!in_check(&pos, Color::Black));
}
