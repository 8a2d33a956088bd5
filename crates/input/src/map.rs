//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, Phase};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of mapping one key press.
///
/// `consumed` means the key belongs to the game in the current phase and must
/// not fall through to any other handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub action: Option<GameAction>,
    pub consumed: bool,
}

impl KeyOutcome {
    fn ignored() -> Self {
        Self::default()
    }

    fn consumed(action: GameAction) -> Self {
        Self {
            action: Some(action),
            consumed: true,
        }
    }

    fn passthrough(action: GameAction) -> Self {
        Self {
            action: Some(action),
            consumed: false,
        }
    }
}

/// Whether the piece controls are live in `phase`.
pub fn accepts_input(phase: Phase) -> bool {
    phase.is_running()
}

/// Piece control bound to `key`, regardless of phase
fn control_action(key: &KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        _ => None,
    }
}

/// Map a key press to the action it triggers in `phase`.
///
/// The arrow keys and Space are only mapped (and consumed) while running.
/// `P` toggles pause during a game, Enter starts the first game and `R`
/// restarts from any phase.
pub fn map_key(key: KeyEvent, phase: Phase) -> KeyOutcome {
    if let Some(action) = control_action(&key) {
        return if accepts_input(phase) {
            KeyOutcome::consumed(action)
        } else {
            KeyOutcome::ignored()
        };
    }

    match key.code {
        KeyCode::Char('p') | KeyCode::Char('P') if phase.in_game() => {
            KeyOutcome::consumed(GameAction::Pause)
        }
        KeyCode::Enter if phase == Phase::NotStarted => KeyOutcome::passthrough(GameAction::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => KeyOutcome::passthrough(GameAction::Restart),
        _ => KeyOutcome::ignored(),
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
