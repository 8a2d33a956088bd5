//! Scoring module - classic line-clear scoring and level progression
//!
//! All functions are pure:
//! - Line clears award `LINE_SCORES[lines] * level` (1 line = 40, 4 lines = 1200 at level 1)
//! - Level is `total_lines / 10 + 1`
//! - Gravity starts at 1000ms per row and speeds up 50ms per level, floored at 100ms

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines` rows in one lock at `level`.
///
/// Line counts outside the table (more than four) are worth nothing.
pub fn score_delta(lines: u32, level: u32) -> u32 {
    LINE_SCORES
        .get(lines as usize)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Level for a cumulative number of cleared lines (1-based)
pub fn level_for(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, in milliseconds
pub fn drop_interval_for(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(reduction)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Outcome of applying one lock's line clears to the running totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    /// Whether `level` went up with this update
    pub leveled_up: bool,
}

/// Fold `cleared` lines into the totals.
///
/// The clear is scored at the level in effect before the lines count. The
/// level only moves when [`level_for`] strictly exceeds the current one.
pub fn apply_clear(score: u32, lines: u32, level: u32, cleared: u32) -> ScoreUpdate {
    if cleared == 0 {
        return ScoreUpdate {
            score,
            lines,
            level,
            leveled_up: false,
        };
    }

    let score = score.saturating_add(score_delta(cleared, level));
    let lines = lines.saturating_add(cleared);
    let candidate = level_for(lines);
    let leveled_up = candidate > level;

    ScoreUpdate {
        score,
        lines,
        level: if leveled_up { candidate } else { level },
        leveled_up,
    }
}
