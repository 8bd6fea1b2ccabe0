use serde::{Serialize, Deserialize};

use crate::game::level::Level;
use crate::game::types::{Direction, Position};

/// Snapshot of one level attempt: character pose, visited trail, fuel
/// status, and run/complete flags.
///
/// Exactly one world state is live per attempt. It is rebuilt whenever the
/// active level changes or the learner resets, and mutated only while a
/// playback is applying commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    pub character_pos: Position,
    pub character_dir: Direction,
    /// Distinct cells the character has occupied, in first-visit order.
    pub visited: Vec<Position>,
    /// Whether the active level defines a fuel pickup at all.
    pub has_fuel: bool,
    pub fuel_collected: bool,
    /// Latest user-facing message. Replaced (or cleared) on every step.
    pub message: Option<String>,
    pub is_running: bool,
    pub is_completed: bool,
}

impl WorldState {
    /// Fresh world state at the level's start pose.
    pub fn for_level(level: &Level) -> Self {
        WorldState {
            character_pos: level.start_pos,
            character_dir: level.start_dir,
            visited: Vec::new(),
            has_fuel: level.fuel_pos.is_some(),
            fuel_collected: false,
            message: None,
            is_running: false,
            is_completed: false,
        }
    }

    /// Record a cell in the visited trail. Duplicates are dropped, insertion
    /// order is preserved.
    pub fn visit(&mut self, pos: Position) {
        if !self.visited.contains(&pos) {
            self.visited.push(pos);
        }
    }
}
