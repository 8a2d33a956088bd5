//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no external dependencies, so it can be
//! used by the engine, the terminal front end, and the input layer alike.
//!
//! # Board Dimensions
//!
//! The classic playfield is 10 columns by 20 rows. Games may be configured with
//! other dimensions, but a board never changes size once created.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 50 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Fastest gravity |
//! | `FRAME_MS` | 16 | Default front-end frame interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use classic_tetris_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::O.tag(), 4);
//! assert_eq!(PieceKind::from_tag(6), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Default board width in cells
pub const BOARD_WIDTH: usize = 10;

/// Default board height in cells
pub const BOARD_HEIGHT: usize = 20;

/// Gravity interval at level 1 (one row per second)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speeds up by this much per level
pub const DROP_STEP_MS: u32 = 50;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Default render/poll interval for real-time front ends
pub const FRAME_MS: u32 = 16;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points by lines cleared in one lock (index = lines), multiplied by level.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Maximum number of entries kept in the high-score list
pub const MAX_HIGH_SCORES: usize = 10;

/// Player name used when none is configured
pub const DEFAULT_PLAYER_NAME: &str = "Player1";

/// Longest player name kept, in characters
pub const MAX_PLAYER_NAME_LEN: usize = 15;

/// Horizontal offsets tried, in order, when a rotation collides in place.
pub const WALL_KICKS: [i32; 4] = [-1, 1, -2, 2];

/// A cell on the game board
///
/// - `0`: empty
/// - `1..=7`: locked block of the piece kind with that tag (doubles as colour key)
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// Largest valid cell tag
pub const MAX_TAG: Cell = 7;

/// The seven tetromino piece kinds
///
/// The discriminant is the cell tag written to the board when the piece locks:
/// - **I** (1): cyan bar
/// - **J** (2): blue
/// - **L** (3): orange
/// - **O** (4): yellow square
/// - **S** (5): green
/// - **T** (6): purple
/// - **Z** (7): red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    I = 1,
    J = 2,
    L = 3,
    O = 4,
    S = 5,
    T = 6,
    Z = 7,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Cell tag for this kind
    pub fn tag(self) -> Cell {
        self as Cell
    }

    /// Look up a kind by its cell tag
    ///
    /// ```
    /// use classic_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_tag(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_tag(0), None);
    /// assert_eq!(PieceKind::from_tag(8), None);
    /// ```
    pub fn from_tag(tag: Cell) -> Option<Self> {
        match tag {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Single-letter name
    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Lifecycle phase of a game
///
/// `NotStarted → Running ⇄ Paused`, `Running → Over`. Only a restart leaves `Over`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Running,
    Paused,
    Over,
}

impl Phase {
    /// Whether gameplay input and gravity apply
    pub fn is_running(self) -> bool {
        self == Phase::Running
    }

    /// Whether a game has begun and has not ended
    pub fn in_game(self) -> bool {
        matches!(self, Phase::Running | Phase::Paused)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::NotStarted => "notStarted",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Over => "over",
        }
    }
}

/// Discrete actions accepted by the engine
///
/// Time-driven gravity is not an action; it goes through `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Begin the first game
    Start,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row, locking it if blocked
    SoftDrop,
    /// Drop piece to its lowest legal row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause
    Pause,
    /// Start over from any phase
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use classic_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Core-side event emitted after a piece locks.
///
/// Observers take it from the engine after an action; it describes the whole
/// lock → clear → score → spawn sequence at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub leveled_up: bool,
    /// The next piece could not spawn and the game ended
    pub game_over: bool,
}
