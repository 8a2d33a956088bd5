//! Classic terminal Tetris (workspace facade crate).
//!
//! This package exposes `classic_tetris::{core,scores,input,term,types}` while
//! the implementation lives in dedicated crates under `crates/`. The
//! [`logging`] module holds the file logger used by the binary.

pub mod logging;

pub use classic_tetris_core as core;
pub use classic_tetris_input as input;
pub use classic_tetris_scores as scores;
pub use classic_tetris_term as term;
pub use classic_tetris_types as types;
