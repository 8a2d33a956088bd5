use crate::board::Board;
use crate::pieces::Piece;
use crate::types::{Cell, Phase, EMPTY};

/// Read-only copy of everything a renderer or score display needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current: Option<Piece>,
    pub next: Piece,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: Phase,
    pub drop_interval_ms: u32,
    pub player_name: String,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase.is_running()
    }

    /// Cell as it should be drawn: the current piece over the locked board.
    pub fn visible_cell(&self, x: i32, y: i32) -> Cell {
        if let Some(piece) = &self.current {
            if piece.cells().any(|cell| cell == (x, y)) {
                return piece.color;
            }
        }
        self.board.get(x, y).unwrap_or(EMPTY)
    }
}
