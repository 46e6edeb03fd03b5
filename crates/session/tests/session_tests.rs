//! Sessions backed by real files: experience and profile survive a restart
//! of the process.

use std::fs;
use std::path::{Path, PathBuf};

use chess_core::{MoveKey, Position, Square};
use experience::{ExperienceStore, Outcome, PlayerProfile};
use session::{AlwaysQueen, Config, GameSession, GameStatus, MoveSource, RecordingPolicy};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chess_ai_session_{}_{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn sq(c: &str) -> Square {
    Square::from_coord(c).unwrap()
}

fn config_in(dir: &Path) -> Config {
    let mut config = Config::default();
    config.search.depth = 1;
    config.game.seed = Some(3);
    config.experience.path = dir.join("learning_cache.json");
    config.profile.path = dir.join("player_profile.json");
    config
}

fn open(config: &Config) -> GameSession {
    GameSession::new(
        config.clone(),
        ExperienceStore::open(&config.experience.path),
        PlayerProfile::load_or_default(&config.profile.path),
    )
}

#[test]
fn test_won_game_is_remembered_next_session() {
    let dir = scratch_dir("remember");
    let config = config_in(&dir);

    // Seed the cache so black plays fool's mate
    let mut store = ExperienceStore::open(&config.experience.path);
    let mut pos = Position::startpos();
    chess_core::play_line(&mut pos, "f2f3").unwrap();
    let after_f3 = pos.fingerprint();
    store.record_outcome(
        &after_f3,
        MoveKey {
            from: sq("e7"),
            to: sq("e5"),
            promotion: None,
        },
        Outcome::Win,
    );
    chess_core::play_line(&mut pos, "e7e5 g2g4").unwrap();
    store.record_outcome(
        &pos.fingerprint(),
        MoveKey {
            from: sq("d8"),
            to: sq("h4"),
            promotion: None,
        },
        Outcome::Win,
    );
    store.persist().unwrap();

    let mut s = open(&config);
    s.play_move(sq("f2"), sq("f3"), &mut AlwaysQueen).unwrap();
    s.automated_move().unwrap();
    s.play_move(sq("g2"), sq("g4"), &mut AlwaysQueen).unwrap();
    s.automated_move().unwrap();
    assert!(matches!(s.status(), GameStatus::Over(_)));

    let reloaded = ExperienceStore::try_load(&config.experience.path).unwrap();
    assert_eq!(reloaded.stats().records, 4);
    assert_eq!(reloaded.records(&after_f3).len(), 2);

    let profile = PlayerProfile::try_load(&config.profile.path).unwrap();
    assert_eq!(profile.total_games, 1);
    assert_eq!(profile.openings.get("f2f3"), Some(&1));

    // A new session picks the remembered reply straight away
    let mut next = open(&config);
    next.play_move(sq("f2"), sq("f3"), &mut AlwaysQueen).unwrap();
    let reply = next.automated_move().unwrap();
    assert_eq!(reply.source, MoveSource::Experience);
    assert_eq!(reply.mv.to, sq("e5"));
}

#[test]
fn test_immediate_policy_persists_each_move() {
    let dir = scratch_dir("immediate");
    let mut config = config_in(&dir);
    config.experience.recording = RecordingPolicy::Immediate;

    let mut s = open(&config);
    s.play_move(sq("d2"), sq("d4"), &mut AlwaysQueen).unwrap();
    s.automated_move().unwrap();

    let on_disk = ExperienceStore::try_load(&config.experience.path).unwrap();
    assert_eq!(on_disk.stats().records, 1);
    assert_eq!(on_disk.stats().wins, 1);
}

#[test]
fn test_corrupted_cache_does_not_stop_play() {
    let dir = scratch_dir("corrupted");
    let config = config_in(&dir);
    fs::write(&config.experience.path, "not json at all").unwrap();

    let mut s = open(&config);
    s.play_move(sq("e2"), sq("e4"), &mut AlwaysQueen).unwrap();
    assert_eq!(s.automated_move().unwrap().source, MoveSource::Search);
}

#[test]
fn test_stale_records_pruned_at_startup() {
    let dir = scratch_dir("prune");
    let config = config_in(&dir);

    let mut store = ExperienceStore::open(&config.experience.path);
    let old = chrono::Utc::now() - chrono::Duration::days(60);
    store.record_outcome_at(
        &Position::startpos().fingerprint(),
        MoveKey {
            from: sq("e2"),
            to: sq("e4"),
            promotion: None,
        },
        Outcome::Win,
        old,
    );
    store.persist().unwrap();

    let s = open(&config);
    assert!(s.store().is_empty());
    let on_disk = ExperienceStore::try_load(&config.experience.path).unwrap();
    assert!(on_disk.is_empty());
}
