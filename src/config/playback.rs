/// Playback configuration constants.
///
/// This module defines the pacing of command playback: how long the stage
/// lingers on each command, and how long it settles before the win check.
pub const STEP_DELAY_MS: u64 = 800; // Delay between two commands in continuous mode.

/// Delay (in milliseconds) between the last command and the outcome check.
pub const SETTLE_DELAY_MS: u64 = 500;

/// Delay (in milliseconds) before the first command of a fresh single-step run.
pub const FIRST_STEP_DELAY_MS: u64 = 100;

/// Delay (in milliseconds) between the final level's success and the
/// course-completed signal.
pub const COURSE_COMPLETE_DELAY_MS: u64 = 1500;
