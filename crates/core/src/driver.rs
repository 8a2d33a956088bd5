//! Tick drivers - where elapsed time comes from
//!
//! The engine itself never reads a clock. A [`TickDriver`] decides how much
//! time has passed since it was last polled; a real-time front end uses
//! [`RealTimeDriver`], tests and replays use [`ManualDriver`].

use std::collections::VecDeque;
use std::time::Instant;

use crate::game_state::GameState;
use crate::types::Phase;

/// Source of elapsed-time steps for [`GameState::tick`]
pub trait TickDriver {
    /// Milliseconds to feed into `tick`, or `None` if no time should be applied.
    ///
    /// `phase` is the engine phase at the time of the poll; drivers must not
    /// report time that accumulated while the engine was not running.
    fn poll(&mut self, phase: Phase) -> Option<u32>;
}

/// Driver with scripted or fixed steps
#[derive(Debug, Clone, Default)]
pub struct ManualDriver {
    steps: VecDeque<u32>,
    fixed: Option<u32>,
}

impl ManualDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `step_ms` on every poll
    pub fn fixed(step_ms: u32) -> Self {
        Self {
            steps: VecDeque::new(),
            fixed: Some(step_ms),
        }
    }

    /// Report each of `steps` once, in order, then nothing
    pub fn scripted(steps: impl IntoIterator<Item = u32>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            fixed: None,
        }
    }

    pub fn push(&mut self, step_ms: u32) {
        self.steps.push_back(step_ms);
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl TickDriver for ManualDriver {
    fn poll(&mut self, phase: Phase) -> Option<u32> {
        if !phase.is_running() {
            return None;
        }
        self.steps.pop_front().or(self.fixed)
    }
}

/// Driver backed by the monotonic clock
#[derive(Debug, Clone, Default)]
pub struct RealTimeDriver {
    last: Option<Instant>,
}

impl RealTimeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the reference instant; the next poll only rebases
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl TickDriver for RealTimeDriver {
    fn poll(&mut self, phase: Phase) -> Option<u32> {
        if !phase.is_running() {
            self.last = None;
            return None;
        }

        let now = Instant::now();
        let previous = self.last.replace(now)?;
        let elapsed = now.duration_since(previous).as_millis();
        Some(elapsed.min(u32::MAX as u128) as u32)
    }
}

/// Poll `driver` once and feed the result into `game`. Returns whether gravity fired.
pub fn drive(game: &mut GameState, driver: &mut dyn TickDriver) -> bool {
    match driver.poll(game.phase()) {
        Some(elapsed) => game.tick(elapsed),
        None => false,
    }
}
