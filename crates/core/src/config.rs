//! Game configuration

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_PLAYER_NAME, MAX_PLAYER_NAME_LEN};

/// Smallest supported board side
pub const MIN_BOARD_DIM: usize = 4;

/// Largest supported board side
pub const MAX_BOARD_DIM: usize = 64;

/// Per-game settings fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: usize,
    pub rows: usize,
    /// Name recorded with a high score
    pub player_name: String,
}

impl GameConfig {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            ..Self::default()
        }
    }

    /// Set the player name, truncated to `MAX_PLAYER_NAME_LEN` characters
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = player_name(name);
        self
    }

    /// Both sides within `MIN_BOARD_DIM..=MAX_BOARD_DIM`
    pub fn is_valid(&self) -> bool {
        let range = MIN_BOARD_DIM..=MAX_BOARD_DIM;
        range.contains(&self.cols) && range.contains(&self.rows)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: BOARD_WIDTH,
            rows: BOARD_HEIGHT,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
        }
    }
}

/// `name` cut to at most `MAX_PLAYER_NAME_LEN` characters
pub fn player_name(name: impl Into<String>) -> String {
    let mut name = name.into();
    if let Some((end, _)) = name.char_indices().nth(MAX_PLAYER_NAME_LEN) {
        name.truncate(end);
    }
    name
}
