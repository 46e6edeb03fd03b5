use super::*;
use chess_core::{Color, Piece, Square};

fn mv(from: &str, to: &str, kind: PieceKind) -> Move {
    Move::new(
        Square::from_coord(from).unwrap(),
        Square::from_coord(to).unwrap(),
        Piece::new(Color::White, kind),
    )
}

fn castle() -> Move {
    let mut m = mv("e1", "g1", PieceKind::King);
    m.is_castle = true;
    m
}

#[test]
fn test_empty_profile_rates_are_zero() {
    let profile = PlayerProfile::in_memory();
    assert_eq!(profile.castling_rate(), 0.0);
    assert_eq!(profile.aggression_score(), 0.0);
    assert!(profile.opening_preferences().is_empty());
}

#[test]
fn test_update_counts_opening_castle_and_queen() {
    let mut profile = PlayerProfile::in_memory();
    let game = vec![
        mv("e2", "e4", PieceKind::Pawn),
        mv("d1", "h5", PieceKind::Queen),
        castle(),
    ];

    profile.update(&game);

    assert_eq!(profile.total_games, 1);
    assert_eq!(profile.openings.get("e2e4"), Some(&1));
    assert_eq!(profile.castling_count, 1);
    assert_eq!(profile.quick_queen_deploys, 1);
    assert!(profile.updated_at.is_some());
}

#[test]
fn test_late_queen_move_is_not_quick() {
    let mut profile = PlayerProfile::in_memory();
    let mut game: Vec<Move> = (0..QUICK_QUEEN_WINDOW)
        .map(|_| mv("g1", "f3", PieceKind::Knight))
        .collect();
    game.push(mv("d1", "d2", PieceKind::Queen));

    profile.update(&game);

    assert_eq!(profile.quick_queen_deploys, 0);
}

#[test]
fn test_empty_game_still_counts() {
    let mut profile = PlayerProfile::in_memory();
    profile.update(&[]);
    assert_eq!(profile.total_games, 1);
    assert!(profile.openings.is_empty());
}

#[test]
fn test_rates_and_preferences() {
    let mut profile = PlayerProfile::in_memory();
    profile.update(&[mv("d2", "d4", PieceKind::Pawn), castle()]);
    profile.update(&[mv("e2", "e4", PieceKind::Pawn)]);
    profile.update(&[mv("e2", "e4", PieceKind::Pawn), mv("d1", "f3", PieceKind::Queen)]);
    profile.update(&[mv("e2", "e4", PieceKind::Pawn)]);

    assert_eq!(profile.opening_preferences(), vec![("e2e4", 3), ("d2d4", 1)]);
    assert!((profile.castling_rate() - 0.25).abs() < 1e-9);
    assert!((profile.aggression_score() - 0.25).abs() < 1e-9);
}
