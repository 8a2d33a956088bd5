//! Game state module - the engine state machine
//!
//! This module ties together the board, piece generator, scoring, and the
//! high-score collaborator. Every action is a synchronous `&mut self` call, so
//! an observer only ever sees the state before or after a whole action; in
//! particular lock → clear → score → spawn → game-over check is one step.

use std::fmt;
use std::iter;

use log::debug;

use crate::board::{Board, LineClear};
use crate::config::{self, GameConfig};
use crate::high_scores::{HighScoreEntry, HighScoreStore};
use crate::pieces::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::{apply_clear, drop_interval_for};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
pub struct GameState {
    config: GameConfig,
    board: Board,
    current: Option<Piece>,
    next: Piece,
    generator: PieceGenerator,
    score: u32,
    level: u32,
    lines: u32,
    phase: Phase,
    drop_interval_ms: u32,
    /// Time accumulated toward the next gravity step.
    drop_accumulator_ms: u32,
    /// Timestamp of the previous `advance_to` call; reset on start and resume.
    last_tick_ms: Option<u64>,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    high_scores: Option<Box<dyn HighScoreStore>>,
}

impl GameState {
    /// Create a game that has not started yet
    pub fn new(mut config: GameConfig, seed: u64) -> Self {
        config.player_name = config::player_name(config.player_name);
        let mut generator = PieceGenerator::new(seed, config.cols);
        let next = generator.draw();

        Self {
            board: Board::new(config.cols, config.rows),
            config,
            current: None,
            next,
            generator,
            score: 0,
            level: 1,
            lines: 0,
            phase: Phase::NotStarted,
            drop_interval_ms: drop_interval_for(1),
            drop_accumulator_ms: 0,
            last_tick_ms: None,
            last_event: None,
            high_scores: None,
        }
    }

    /// Attach the store that receives the final score
    pub fn with_high_scores(mut self, store: Box<dyn HighScoreStore>) -> Self {
        self.high_scores = Some(store);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_accumulator_ms(&self) -> u32 {
        self.drop_accumulator_ms
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    pub fn player_name(&self) -> &str {
        &self.config.player_name
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.config.player_name = config::player_name(name);
    }

    /// Entries of the attached store, best first
    pub fn high_scores(&self) -> Vec<HighScoreEntry> {
        self.high_scores
            .as_ref()
            .map(|store| store.high_scores())
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current: self.current.clone(),
            next: self.next.clone(),
            score: self.score,
            level: self.level,
            lines: self.lines,
            phase: self.phase,
            drop_interval_ms: self.drop_interval_ms,
            player_name: self.config.player_name.clone(),
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Start the first game. Ignored unless the game has not started.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        self.reset();
        true
    }

    /// Start over from any phase, going straight to `Running`
    pub fn restart(&mut self) -> bool {
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.board = Board::new(self.config.cols, self.config.rows);
        self.current = Some(self.generator.draw());
        self.next = self.generator.draw();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval_ms = drop_interval_for(1);
        self.drop_accumulator_ms = 0;
        self.last_tick_ms = None;
        self.last_event = None;
        self.phase = Phase::Running;
        debug!("new game (seed {})", self.generator.seed());
    }

    /// Flip between `Running` and `Paused`; no effect in other phases
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                true
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                // Resume from a clean timing reference.
                self.drop_accumulator_ms = 0;
                self.last_tick_ms = None;
                true
            }
            Phase::NotStarted | Phase::Over => false,
        }
    }

    /// The current piece, only while running
    fn active(&self) -> Option<&Piece> {
        if self.phase.is_running() {
            self.current.as_ref()
        } else {
            None
        }
    }

    /// Shift the current piece one column (`direction` is -1 or +1)
    pub fn move_piece(&mut self, direction: i32) -> bool {
        let Some(active) = self.active() else {
            return false;
        };

        let moved = active.moved(direction.signum(), 0);
        if self.board.piece_collides(&moved) {
            return false;
        }
        self.current = Some(moved);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.move_piece(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_piece(1)
    }

    /// Rotate clockwise, trying the unshifted position then each wall kick
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active() else {
            return false;
        };

        let rotated = active.shape.rotated();
        let placed = iter::once(0)
            .chain(WALL_KICKS)
            .map(|dx| active.with_shape(rotated.clone(), dx))
            .find(|candidate| !self.board.piece_collides(candidate));

        match placed {
            Some(piece) => {
                self.current = Some(piece);
                true
            }
            None => false,
        }
    }

    /// Move down one row, or lock the piece if it cannot descend
    pub fn soft_drop(&mut self) -> bool {
        let Some(active) = self.active() else {
            return false;
        };

        if self.can_descend(active) {
            self.current = Some(active.moved(0, 1));
        } else {
            let piece = active.clone();
            self.lock_piece(piece);
        }
        true
    }

    /// Drop to the lowest legal row and lock immediately
    pub fn hard_drop(&mut self) -> bool {
        let Some(active) = self.active() else {
            return false;
        };

        let landed = active.at_y(self.landing_y(active));
        self.lock_piece(landed);
        // The next piece starts a fresh gravity interval.
        self.drop_accumulator_ms = 0;
        true
    }

    /// Lowest y reachable by `piece` by repeated one-row descent
    fn landing_y(&self, piece: &Piece) -> i32 {
        let mut landed = piece.clone();
        while self.can_descend(&landed) {
            landed.y += 1;
        }
        landed.y
    }

    /// Whether `piece` can move down one row.
    ///
    /// A shape with no blocks never collides, so descent also stops once the
    /// anchor reaches the bottom row.
    fn can_descend(&self, piece: &Piece) -> bool {
        piece.y + 1 < self.board.height() as i32 && !self.board.piece_collides(&piece.moved(0, 1))
    }

    /// Lock `piece`, clear lines, score, and spawn the next piece.
    fn lock_piece(&mut self, piece: Piece) {
        let LineClear {
            board,
            lines_cleared,
        } = self.board.merged_with(&piece).clear_lines();
        self.board = board;

        let update = apply_clear(self.score, self.lines, self.level, lines_cleared);
        let score_delta = update.score - self.score;
        self.score = update.score;
        self.lines = update.lines;
        if update.leveled_up {
            self.level = update.level;
            self.drop_interval_ms = drop_interval_for(self.level);
            debug!(
                "level {} reached, drop interval {}ms",
                self.level, self.drop_interval_ms
            );
        }

        let spawned = std::mem::replace(&mut self.next, self.generator.draw());
        let game_over = self.board.piece_collides(&spawned);
        if game_over {
            self.current = None;
            self.phase = Phase::Over;
            debug!("game over, final score {}", self.score);
            self.report_final_score();
        } else {
            self.current = Some(spawned);
        }

        if lines_cleared > 0 {
            debug!("cleared {} line(s) for {} points", lines_cleared, score_delta);
        }
        self.last_event = Some(LockEvent {
            lines_cleared,
            score_delta,
            leveled_up: update.leveled_up,
            game_over,
        });
    }

    /// Hand a qualifying final score to the high-score store
    fn report_final_score(&mut self) {
        if self.score == 0 {
            return;
        }
        let Some(store) = self.high_scores.as_mut() else {
            return;
        };
        if store.is_high_score(self.score) {
            store.save_high_score(&self.config.player_name, self.score);
        }
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Once the accumulated time exceeds the drop interval the piece drops one
    /// row (or locks) and the accumulator restarts at zero. Returns whether a
    /// drop happened. Time does not accumulate outside `Running`.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.phase.is_running() {
            return false;
        }

        self.drop_accumulator_ms = self.drop_accumulator_ms.saturating_add(elapsed_ms);
        if self.drop_accumulator_ms > self.drop_interval_ms {
            self.drop_accumulator_ms = 0;
            self.soft_drop();
            return true;
        }
        false
    }

    /// Advance gravity to the absolute timestamp `now_ms`.
    ///
    /// The first call after start or resume only records the reference time.
    pub fn advance_to(&mut self, now_ms: u64) -> bool {
        if !self.phase.is_running() {
            return false;
        }

        let previous = self.last_tick_ms.replace(now_ms);
        match previous {
            Some(prev) => {
                let elapsed = now_ms.saturating_sub(prev).min(u32::MAX as u64) as u32;
                self.tick(elapsed)
            }
            None => false,
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start(),
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
        }
    }

    /// Replace the locked board (for tests and tooling).
    ///
    /// Rejected if the dimensions differ from the configured ones.
    pub fn set_board(&mut self, board: Board) -> bool {
        if board.width() != self.config.cols || board.height() != self.config.rows {
            return false;
        }
        self.board = board;
        true
    }

    /// Replace the current piece (for tests and tooling). Only while in a game.
    pub fn set_current_piece(&mut self, piece: Piece) -> bool {
        if !self.phase.in_game() {
            return false;
        }
        self.current = Some(piece);
        true
    }

    /// Replace the next piece (for tests and tooling)
    pub fn set_next_piece(&mut self, piece: Piece) {
        self.next = piece;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("level", &self.level)
            .field("lines", &self.lines)
            .field("current", &self.current)
            .field("next", &self.next)
            .field("drop_interval_ms", &self.drop_interval_ms)
            .field("drop_accumulator_ms", &self.drop_accumulator_ms)
            .field("has_high_scores", &self.high_scores.is_some())
            .finish_non_exhaustive()
    }
}
