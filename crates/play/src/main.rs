//! chess_ai command line
//!
//! Play against the learning AI in the terminal, let it play itself to
//! build up experience, or inspect and prune the experience cache.

mod console;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_core::{find_legal_move, parse_move_text, Position};
use clap::{Parser, Subcommand};
use experience::{ExperienceStore, PlayerProfile};
use session::{Automated, Config, GameError, GameSession, GameStatus};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::console::{Announcer, MoveEcho, Preselected, StdinPrompt};
use crate::render::board_text;

#[derive(Parser, Debug)]
#[command(name = "chess_ai", author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file (defaults apply when missing)
    #[arg(short, long, default_value = "chess_ai.toml")]
    config: PathBuf,

    /// Override the configured search depth
    #[arg(short, long)]
    depth: Option<u8>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game in the terminal
    Play {
        /// Start from this FEN instead of the standard position
        #[arg(long)]
        fen: Option<String>,
    },
    /// Let the AI play both sides
    Selfplay {
        #[arg(short, long, default_value_t = 1)]
        games: u32,

        /// Abandon a game after this many plies
        #[arg(long, default_value_t = 200)]
        max_plies: u32,
    },
    /// Drop experience older than the given number of days
    Prune {
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// Show experience cache and player profile statistics
    Stats,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let mut config = Config::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }

    match cli.command {
        Command::Play { fen } => play(config, fen.as_deref()),
        Command::Selfplay { games, max_plies } => selfplay(config, games, max_plies),
        Command::Prune { days } => prune(&config, days),
        Command::Stats => stats(&config),
    }
}

fn open_session(config: Config) -> GameSession {
    let store = ExperienceStore::open(&config.experience.path);
    let profile = PlayerProfile::load_or_default(&config.profile.path);
    GameSession::new(config, store, profile)
}

fn play(config: Config, fen: Option<&str>) -> Result<()> {
    let mut session = open_session(config);
    if let Some(fen) = fen {
        session.set_position(Position::from_fen(fen).context("parsing --fen")?);
    }
    session.add_move_listener(Box::new(MoveEcho));
    session.add_game_end_notifier(Box::new(Announcer));

    println!("Enter moves like e2e4 (e7e8n to underpromote).");
    println!("Commands: moves <square>, restart, quit");

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        println!();
        print!("{}", board_text(session.position()));

        if let GameStatus::Over(_) = session.status() {
            println!("Type restart for a new game or quit.");
        } else if session.is_automated_turn() {
            let auto = session.automated_move()?;
            info!(mv = %auto.mv, source = ?auto.source, "computer moved");
            continue;
        } else {
            print!("{} to move> ", session.side_to_move());
        }
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            return Ok(());
        }
        let line = input.trim();

        match line.split_whitespace().collect::<Vec<_>>().as_slice() {
            [] => {}
            ["quit"] | ["exit"] => return Ok(()),
            ["restart"] => session.restart(),
            ["moves", square] => match chess_core::Square::from_coord(square) {
                Some(sq) => {
                    let dests: Vec<String> =
                        session.select(sq).iter().map(|d| d.to_string()).collect();
                    println!("{sq}: {}", dests.join(" "));
                }
                None => println!("not a square: {square}"),
            },
            [text] => match parse_move_text(text)
                .and_then(|parsed| find_legal_move(session.position(), text).map(|_| parsed))
            {
                Ok((from, to, promo)) => {
                    let played = match promo {
                        Some(kind) => session.play_move(from, to, &mut Preselected(kind)),
                        None => session.play_move(from, to, &mut StdinPrompt),
                    };
                    match played {
                        Ok(_) => {}
                        Err(GameError::GameOver) => println!("The game is over."),
                        Err(e) => println!("{e}"),
                    }
                }
                Err(e) => println!("{e}"),
            },
            _ => println!("unknown command: {line}"),
        }
    }
}

fn selfplay(mut config: Config, games: u32, max_plies: u32) -> Result<()> {
    config.game.automated = Automated::Both;
    let mut session = open_session(config);
    let (mut white, mut black, mut draws, mut abandoned) = (0u32, 0u32, 0u32, 0u32);

    for game in 1..=games {
        let mut plies = 0;
        let end = loop {
            if let GameStatus::Over(end) = session.status() {
                break Some(end);
            }
            if plies >= max_plies {
                break None;
            }
            match session.automated_move() {
                Ok(_) => plies += 1,
                Err(GameError::GameOver) => continue,
                Err(e) => return Err(e.into()),
            }
        };

        match end {
            Some(end) => {
                match end.winner {
                    Some(chess_core::Color::White) => white += 1,
                    Some(chess_core::Color::Black) => black += 1,
                    None => draws += 1,
                }
                println!("Game {game}/{games}: {end} after {plies} plies");
            }
            None => {
                abandoned += 1;
                println!("Game {game}/{games}: abandoned after {plies} plies");
            }
        }
        session.restart();
    }

    println!();
    println!("White {white}, Black {black}, Draws {draws}, Abandoned {abandoned}");
    Ok(())
}

fn prune(config: &Config, days: Option<u32>) -> Result<()> {
    let mut store = ExperienceStore::try_load(&config.experience.path)?;
    let days = days.unwrap_or(config.experience.prune_after_days);
    let removed = store.prune_older_than(chrono::Duration::days(i64::from(days)));
    store.persist()?;
    println!("Removed {removed} records older than {days} days");
    Ok(())
}

fn stats(config: &Config) -> Result<()> {
    let store = ExperienceStore::try_load(&config.experience.path)?;
    let s = store.stats();
    println!("Experience: {}", config.experience.path.display());
    println!("  positions: {}", s.fingerprints);
    println!("  records:   {} ({} won, {} drawn, {} lost)", s.records, s.wins, s.draws, s.losses);

    let profile = PlayerProfile::load_or_default(&config.profile.path);
    println!("Player: {} games", profile.total_games);
    println!("  castling rate:    {:.2}", profile.castling_rate());
    println!("  aggression score: {:.2}", profile.aggression_score());
    for (opening, count) in profile.opening_preferences().into_iter().take(5) {
        println!("  opening {opening}: {count}");
    }
    Ok(())
}
