//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has no dependencies on terminal, input, or file I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Runs in a terminal, headless in tests, or behind any other front end
//!
//! # Module Structure
//!
//! - [`board`]: Fixed-size grid with collision detection, merging, and line clearing
//! - [`config`]: Board dimensions and player name
//! - [`driver`]: Elapsed-time sources feeding gravity
//! - [`game_state`]: The engine: current/next piece, phases, scoring progression
//! - [`high_scores`]: Ranked result list and the store trait
//! - [`pieces`]: Tetromino shapes, clockwise rotation, positioned pieces
//! - [`rng`]: Seeded uniform piece generation
//! - [`scoring`]: Line-clear points, levels, and gravity speed
//! - [`snapshot`]: Read-only view handed to renderers
//!
//! # Game Rules
//!
//! Classic rules without modern guideline extras:
//!
//! - **Uniform randomizer**: every draw is independent, no bag
//! - **Simple rotation**: clockwise only, wall kicks of -1, +1, -2, +2 columns
//! - **Immediate lock**: a piece that cannot fall locks on the same step
//! - **Scoring**: 40/100/300/1200 × level for 1-4 lines
//! - **Levels**: one per 10 lines; gravity drops 50ms per level down to 100ms
//!
//! # Example
//!
//! ```
//! use classic_tetris_core::{GameConfig, GameState};
//! use classic_tetris_core::types::{GameAction, Phase};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.phase(), Phase::Running);
//! assert!(game.board().filled_count() > 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds, or [`GameState::advance_to`](game_state::GameState::advance_to)
//! with an absolute timestamp.

pub mod board;
pub mod config;
pub mod driver;
pub mod game_state;
pub mod high_scores;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use classic_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{create_empty_board, Board, LineClear};
pub use config::GameConfig;
pub use driver::{drive, ManualDriver, RealTimeDriver, TickDriver};
pub use game_state::GameState;
pub use high_scores::{HighScoreEntry, HighScoreStore, HighScoreTable, MemoryHighScores};
pub use pieces::{get_shape, rotate, Piece, Shape};
pub use rng::PieceGenerator;
pub use scoring::{apply_clear, drop_interval_for, level_for, score_delta, ScoreUpdate};
pub use snapshot::GameSnapshot;
