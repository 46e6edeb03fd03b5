//! The owned game object: live position, experience store, profile and the
//! turn sequence around them.

use std::fmt;

use chess_core::{
    legal_moves_from, side_legal_moves, Color, Engine, Fingerprint, Move, MoveKey, PieceKind,
    Position, Square,
};
use classical_engine::ClassicalEngine;
use experience::{ExperienceStore, Outcome, PlayerProfile};
use random_engine::RandomEngine;
use tracing::{debug, info, warn};

use crate::config::{Config, RecordingPolicy};
use crate::error::GameError;
use crate::hooks::{GameEndNotifier, MoveListener, PromotionPrompt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Checkmate,
    Stalemate,
    KingCaptured,
}

/// How a game ended. `winner` is None for a stalemate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEnd {
    pub reason: EndReason,
    pub winner: Option<Color>,
}

impl GameEnd {
    /// Result for `side`, as stored in the experience cache.
    pub fn outcome_for(&self, side: Color) -> Outcome {
        match self.winner {
            Some(w) if w == side => Outcome::Win,
            Some(_) => Outcome::Loss,
            None => Outcome::Draw,
        }
    }
}

impl fmt::Display for GameEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.reason, self.winner) {
            (EndReason::Checkmate, Some(w)) => write!(f, "checkmate, {w} wins"),
            (EndReason::KingCaptured, Some(w)) => {
                write!(f, "{} king missing, {w} wins", w.other())
            }
            (EndReason::Stalemate, _) | (_, None) => write!(f, "stalemate, draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Over(GameEnd),
}

/// Where an automated move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    Experience,
    Search,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoMove {
    pub mv: Move,
    pub source: MoveSource,
}

/// An automated move waiting for the game result.
#[derive(Debug, Clone)]
struct Pending {
    fingerprint: Fingerprint,
    key: MoveKey,
    mover: Color,
}

pub struct GameSession {
    config: Config,
    position: Position,
    store: ExperienceStore,
    profile: PlayerProfile,
    searcher: Box<dyn Engine>,
    fallback: RandomEngine,
    history: Vec<Move>,
    human_moves: Vec<Move>,
    pending: Vec<Pending>,
    selected: Option<Square>,
    finished: Option<GameEnd>,
    listeners: Vec<Box<dyn MoveListener>>,
    notifiers: Vec<Box<dyn GameEndNotifier>>,
}

impl GameSession {
    /// Starts a game from the standard position with the classical search.
    pub fn new(config: Config, store: ExperienceStore, profile: PlayerProfile) -> Self {
        Self::with_engine(config, store, profile, Box::new(ClassicalEngine::new()))
    }

    /// Like [`new`](Self::new) with a custom search engine.
    pub fn with_engine(
        config: Config,
        store: ExperienceStore,
        profile: PlayerProfile,
        searcher: Box<dyn Engine>,
    ) -> Self {
        let fallback = match config.game.seed {
            Some(seed) => RandomEngine::with_seed(seed),
            None => RandomEngine::new(),
        };
        let mut session = Self {
            config,
            position: Position::startpos(),
            store,
            profile,
            searcher,
            fallback,
            history: Vec::new(),
            human_moves: Vec::new(),
            pending: Vec::new(),
            selected: None,
            finished: None,
            listeners: Vec::new(),
            notifiers: Vec::new(),
        };
        session.prune_store();
        session
    }

    /// Replaces the current position, e.g. to resume from a FEN.
    /// History and pending records are discarded.
    pub fn set_position(&mut self, position: Position) {
        self.reset_game_state();
        self.position = position;
    }

    /// Fresh start position; the unfinished game is abandoned unrecorded.
    pub fn restart(&mut self) {
        if !self.pending.is_empty() {
            debug!(pending = self.pending.len(), "abandoning unfinished game");
        }
        self.reset_game_state();
        self.position = Position::startpos();
        self.prune_store();
        info!("new game");
    }

    fn reset_game_state(&mut self) {
        self.history.clear();
        self.human_moves.clear();
        self.pending.clear();
        self.selected = None;
        self.finished = None;
        self.searcher.new_game();
    }

    fn prune_store(&mut self) {
        let window = self.config.experience.prune_window();
        if self.store.prune_older_than(window) > 0 {
            self.persist_store();
        }
    }

    pub fn add_move_listener(&mut self, listener: Box<dyn MoveListener>) {
        self.listeners.push(listener);
    }

    pub fn add_game_end_notifier(&mut self, notifier: Box<dyn GameEndNotifier>) {
        self.notifiers.push(notifier);
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &ExperienceStore {
        &self.store
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// True when the side to move is played by the computer.
    pub fn is_automated_turn(&self) -> bool {
        self.config.game.automated.controls(self.position.side_to_move)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        side_legal_moves(&self.position)
    }

    /// Legal destinations of the piece on `from`, for highlighting.
    pub fn destinations_from(&self, from: Square) -> Vec<Square> {
        legal_moves_from(&self.position, from)
            .into_iter()
            .map(|m| m.to)
            .collect()
    }

    /// Selects `sq` if it holds a piece of the side to move and returns its
    /// destinations. Anything else clears the selection.
    pub fn select(&mut self, sq: Square) -> Vec<Square> {
        match self.position.piece_at(sq) {
            Some(pc) if pc.color == self.position.side_to_move => {
                self.selected = Some(sq);
                self.destinations_from(sq)
            }
            _ => {
                self.selected = None;
                Vec::new()
            }
        }
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Game state of the current position. A missing king is checked
    /// before move generation.
    pub fn status(&self) -> GameStatus {
        for color in [Color::White, Color::Black] {
            if self.position.king_sq(color).is_none() {
                return GameStatus::Over(GameEnd {
                    reason: EndReason::KingCaptured,
                    winner: Some(color.other()),
                });
            }
        }
        if !self.legal_moves().is_empty() {
            return GameStatus::Ongoing;
        }
        let side = self.position.side_to_move;
        if self.position.in_check(side) {
            GameStatus::Over(GameEnd {
                reason: EndReason::Checkmate,
                winner: Some(side.other()),
            })
        } else {
            GameStatus::Over(GameEnd {
                reason: EndReason::Stalemate,
                winner: None,
            })
        }
    }

    /// Plays a human move. A pawn reaching the far rank asks `prompt` for
    /// the piece; anything but knight, bishop, rook or queen means queen.
    pub fn play_move(
        &mut self,
        from: Square,
        to: Square,
        prompt: &mut dyn PromotionPrompt,
    ) -> Result<Move, GameError> {
        self.ensure_ongoing()?;
        self.selected = None;

        let mut mv = legal_moves_from(&self.position, from)
            .into_iter()
            .find(|m| m.to == to)
            .ok_or(GameError::IllegalMove { from, to })?;

        if mv.promotion.is_some() {
            let kind = prompt
                .choose_promotion(mv.piece.color)
                .filter(|k| PieceKind::PROMOTIONS.contains(k))
                .unwrap_or(PieceKind::Queen);
            mv.promotion = Some(kind);
        }

        self.human_moves.push(mv);
        self.commit(mv);
        Ok(mv)
    }

    /// Chooses and plays a move for the side to move: a remembered move if
    /// it is still legal, else the search result, else a random legal move.
    pub fn automated_move(&mut self) -> Result<AutoMove, GameError> {
        self.ensure_ongoing()?;
        self.selected = None;

        let moves = self.legal_moves();
        if moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }
        let fingerprint = self.position.fingerprint();
        let mover = self.position.side_to_move;

        let remembered = self
            .store
            .choose_best_move(&fingerprint)
            .and_then(|key| {
                moves.iter().find(|m| key.matches(m)).map(|&m| Move {
                    promotion: m.promotion.map(|_| key.promotion.unwrap_or(PieceKind::Queen)),
                    ..m
                })
            });

        let (mv, source) = match remembered {
            Some(mv) => (mv, MoveSource::Experience),
            None => {
                let result = self.searcher.search(&self.position, self.config.search.limits());
                match result.best_move.filter(|m| moves.contains(m)) {
                    Some(mv) => (mv, MoveSource::Search),
                    None => {
                        let mv = self.fallback.choose(&moves).ok_or(GameError::NoLegalMoves)?;
                        (mv, MoveSource::Random)
                    }
                }
            }
        };
        debug!(mv = %mv, ?source, "automated move");

        match self.config.experience.recording {
            RecordingPolicy::Immediate => {
                self.store.record_outcome(&fingerprint, mv.key(), Outcome::Win);
                self.persist_store();
            }
            RecordingPolicy::Deferred => self.pending.push(Pending {
                fingerprint,
                key: mv.key(),
                mover,
            }),
        }

        self.commit(mv);
        Ok(AutoMove { mv, source })
    }

    fn ensure_ongoing(&mut self) -> Result<(), GameError> {
        if self.finished.is_some() {
            return Err(GameError::GameOver);
        }
        if let GameStatus::Over(end) = self.status() {
            self.conclude(end);
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn commit(&mut self, mv: Move) {
        self.position.apply(mv);
        self.history.push(mv);

        for listener in &mut self.listeners {
            if let Err(e) = listener.on_move(&mv) {
                warn!(error = %e, "move listener failed");
            }
        }

        if let GameStatus::Over(end) = self.status() {
            self.conclude(end);
        }
    }

    fn conclude(&mut self, end: GameEnd) {
        if self.finished.is_some() {
            return;
        }
        self.finished = Some(end);
        info!(result = %end, moves = self.history.len(), "game over");

        if !self.pending.is_empty() {
            for p in self.pending.drain(..) {
                self.store
                    .record_outcome(&p.fingerprint, p.key, end.outcome_for(p.mover));
            }
            self.persist_store();
        }

        if self.config.game.automated.has_human() {
            self.profile.update(&self.human_moves);
            if let Err(e) = self.profile.save() {
                warn!(error = %e, "failed to save player profile");
            }
        }

        for notifier in &mut self.notifiers {
            notifier.on_game_end(&end);
        }
    }

    fn persist_store(&self) {
        if let Err(e) = self.store.persist() {
            warn!(error = %e, "failed to save experience");
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
