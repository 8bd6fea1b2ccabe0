//! Outcome evaluation system.
//!
//! Classifies a finished playback attempt against the level's goal and
//! fuel requirement.

use serde::{Serialize, Deserialize};

use crate::game::level::Level;
use crate::game::types::Position;

pub const MSG_LEVEL_CLEARED: &str = "Hooray! Great job!";
pub const MSG_MISSING_FUEL: &str = "You reached the star, but forgot to refuel!";
pub const MSG_NOT_REACHED: &str = "Not at the star yet. Keep trying!";

/// Terminal classification of one playback attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// At the goal, with fuel collected when the level requires it.
    GoalReached,
    /// At the goal, but the level's fuel was never collected. The attempt
    /// is not recorded as complete.
    GoalReachedMissingFuel,
    /// Not at the goal once the command queue ran out.
    NotReached,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::GoalReached => MSG_LEVEL_CLEARED,
            Outcome::GoalReachedMissingFuel => MSG_MISSING_FUEL,
            Outcome::NotReached => MSG_NOT_REACHED,
        }
    }
}

/// Evaluate the final pose of an exhausted playback.
pub fn evaluate(final_pos: Position, fuel_collected: bool, level: &Level) -> Outcome {
    if final_pos != level.goal_pos {
        return Outcome::NotReached;
    }
    if level.requires_fuel() && !fuel_collected {
        return Outcome::GoalReachedMissingFuel;
    }
    Outcome::GoalReached
}
