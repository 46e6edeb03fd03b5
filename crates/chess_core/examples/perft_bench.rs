//! Perft timing over the clone-per-move legality filter.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_core -- [depth] [fen]
//!   cargo flamegraph --profile profiling --example perft_bench -p chess_core -- 4

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use chess_core::{perft, Position};

const POSITIONS: &[(&str, &str)] = &[
    (
        "Start",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
];

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    let positions: Vec<(&str, &str)> = match args.get(2) {
        Some(fen) => vec![("Custom", fen.as_str())],
        None => POSITIONS.to_vec(),
    };

    let mut total_nodes = 0u64;
    let start = Instant::now();
    for (name, fen) in positions {
        let pos = match Position::from_fen(fen) {
            Ok(pos) => pos,
            Err(e) => {
                eprintln!("{name}: {e}");
                return ExitCode::FAILURE;
            }
        };
        let t = Instant::now();
        let nodes = perft(&pos, depth);
        let secs = t.elapsed().as_secs_f64();
        total_nodes += nodes;
        println!(
            "{name:<14} depth {depth}: {nodes:>10} nodes  {:>8.3}s  {:>10.0} nps",
            secs,
            nodes as f64 / secs.max(1e-9)
        );
    }
    println!(
        "Total: {total_nodes} nodes in {:.3}s",
        start.elapsed().as_secs_f64()
    );
    ExitCode::SUCCESS
}
