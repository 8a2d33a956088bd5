//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] values, taking the current game
//! phase into account so that piece controls are only live while running.

pub mod map;

pub use classic_tetris_types as types;

pub use map::{accepts_input, map_key, should_quit, KeyOutcome};
