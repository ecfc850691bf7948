//! Scoring module - line-clear points and the level/speed curve
//!
//! Classic rules: clearing `n` lines awards `LINE_SCORES[n - 1] * level`,
//! a level is gained every 10 lines, and each level shortens gravity by 50ms
//! down to a 100ms floor.

use crate::types::{BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES};

/// Points for clearing `lines` rows at a 1-based `level`.
/// Zero (or more than four) lines award nothing.
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines - 1].saturating_mul(level)
}

/// Level for a running line total (level 1 below 10 lines)
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a 1-based level
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Lines still needed to reach the next level
pub fn lines_to_next_level(total_lines: u32) -> u32 {
    LINES_PER_LEVEL - total_lines % LINES_PER_LEVEL
}
