//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a plain framebuffer that is flushed to the
//! terminal with diff redraws.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure snapshot → framebuffer mapping (2 columns per cell)
//! - [`renderer`]: crossterm backend

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use classic_tetris_core as core;
pub use classic_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport, PALETTE};
pub use renderer::{changed_runs, encode_frame, TerminalRenderer};
