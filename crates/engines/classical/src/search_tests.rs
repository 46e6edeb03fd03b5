use super::*;
use chess_core::{legal_moves, Square};

fn sq(c: &str) -> Square {
    Square::from_coord(c).unwrap()
}

/// Reference minimax without pruning.
fn plain_minimax(pos: &Position, depth: u8, maximizing: bool) -> (i32, Option<Move>) {
    if depth == 0 {
        return (evaluate(pos), None);
    }
    let moves = legal_moves(pos, pos.side_to_move);
    if moves.is_empty() {
        return (evaluate(pos), None);
    }
    let mut best: Option<(i32, Move)> = None;
    for mv in moves {
        let (v, _) = plain_minimax(&pos.after(mv), depth - 1, !maximizing);
        let better = match best {
            None => true,
            Some((b, _)) => (maximizing && v > b) || (!maximizing && v < b),
        };
        if better {
            best = Some((v, mv));
        }
    }
    let (score, mv) = best.unwrap();
    (score, Some(mv))
}

#[test]
fn test_pick_best_move_start_position() {
    let pos = Position::startpos();
    let result = pick_best_move(&pos, SearchLimits::depth(2));
    let mv = result.best_move.expect("start position has moves");
    assert!(legal_moves(&pos, Color::White).contains(&mv));
    assert!(result.nodes > 0);
}

#[test]
fn test_white_takes_hanging_queen() {
    let pos = Position::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();
    let (score, mv) = search(&pos, 1, -INFINITY, INFINITY, true);
    let mv = mv.unwrap();
    assert_eq!((mv.from, mv.to), (sq("d2"), sq("d5")));
    assert!(score > 0);
}

#[test]
fn test_black_takes_hanging_queen() {
    let pos = Position::from_fen("4k3/3r4/8/8/3Q4/8/8/4K3 b - - 0 1").unwrap();
    let (score, mv) = search(&pos, 1, -INFINITY, INFINITY, false);
    let mv = mv.unwrap();
    assert_eq!((mv.from, mv.to), (sq("d7"), sq("d4")));
    assert!(score < 0);
}

#[test]
fn test_search_is_pure() {
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let snapshot = pos.clone();
    let a = search(&pos, 2, -INFINITY, INFINITY, true);
    let b = search(&pos, 2, -INFINITY, INFINITY, true);
    assert_eq!(a, b);
    assert_eq!(pos, snapshot);
}

#[test]
fn test_alpha_beta_matches_plain_minimax() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 b - - 0 1",
    ] {
        let pos = Position::from_fen(fen).unwrap();
        let maximizing = pos.side_to_move == Color::White;
        let pruned = search(&pos, 3, -INFINITY, INFINITY, maximizing);
        let plain = plain_minimax(&pos, 3, maximizing);
        assert_eq!(pruned, plain, "mismatch for {fen}");
    }
}

#[test]
fn test_terminal_root_returns_static_eval() {
    // Black is checkmated; no move, plain static score
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    let (score, mv) = search(&pos, 3, -INFINITY, INFINITY, false);
    assert!(mv.is_none());
    assert_eq!(score, evaluate(&pos));
}

#[test]
fn test_depth_zero_returns_static_eval() {
    let pos = Position::startpos();
    assert_eq!(search(&pos, 0, -INFINITY, INFINITY, true), (0, None));
}

#[test]
fn test_mate_aware_finds_back_rank_mate() {
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4R1K1 w - - 0 1").unwrap();
    let limits = SearchLimits::depth(2).with_terminal(TerminalScoring::MateAware);
    let outcome = pick_best_move(&pos, limits);
    let mv = outcome.best_move.unwrap();
    assert_eq!((mv.from, mv.to), (sq("e1"), sq("e8")));
    assert_eq!(outcome.score, MATE - 1);
}

#[test]
fn test_mate_aware_stalemate_scores_zero() {
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    let limits = SearchLimits::depth(2).with_terminal(TerminalScoring::MateAware);
    let outcome = pick_best_move(&pos, limits);
    assert!(outcome.best_move.is_none());
    assert_eq!(outcome.score, 0);
}

#[test]
fn test_generous_budget_changes_nothing() {
    let pos = Position::startpos();
    let full = pick_best_move(&pos, SearchLimits::depth(2));
    let budgeted = pick_best_move(&pos, SearchLimits::depth_and_nodes(2, 1_000_000));
    assert_eq!(full.best_move, budgeted.best_move);
    assert_eq!(full.score, budgeted.score);
    assert!(!budgeted.stopped);
}

#[test]
fn test_tiny_budget_stops_but_still_moves() {
    let pos = Position::startpos();
    let outcome = pick_best_move(&pos, SearchLimits::depth_and_nodes(3, 5));
    assert!(outcome.stopped);
    assert!(outcome.best_move.is_some());
    assert_eq!(outcome.nodes, 5);
}
