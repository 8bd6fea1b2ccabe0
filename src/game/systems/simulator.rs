//! World simulation system.
//!
//! This module applies one command to the world state. It is a total,
//! deterministic function of (world, command, level) with no I/O: every
//! failure mode is a message on the snapshot, never an error.

use crate::game::level::Level;
use crate::game::state::WorldState;
use crate::game::types::{Command, CommandKind, Position};

pub const MSG_BUMPED_WALL: &str = "Oops! Bumped into a wall.";
pub const MSG_REFUELED: &str = "Tank refueled!";
pub const MSG_NOTHING_TO_COLLECT: &str = "Nothing to collect here.";

/// Apply a single command to the world state.
///
/// The cell the character stands on is recorded as visited before the
/// command takes effect, so the starting cell lands in the trail on the
/// first applied command. The step's message replaces the previous one,
/// including replacing it with nothing.
pub fn apply(world: &mut WorldState, command: &Command, level: &Level) {
    world.visit(world.character_pos);
    world.message = None;

    match command.kind {
        CommandKind::Move => {
            let (dx, dy) = world.character_dir.vector();
            let next_x = world.character_pos.x as i64 + dx;
            let next_y = world.character_pos.y as i64 + dy;

            if is_blocked(next_x, next_y, level) {
                world.message = Some(MSG_BUMPED_WALL.to_string());
            } else {
                world.character_pos = Position {
                    x: next_x as usize,
                    y: next_y as usize,
                };
            }
        }
        CommandKind::TurnLeft => {
            world.character_dir = world.character_dir.turn_left();
        }
        CommandKind::TurnRight => {
            world.character_dir = world.character_dir.turn_right();
        }
        CommandKind::Collect => {
            match level.fuel_pos {
                Some(fuel) if fuel == world.character_pos => {
                    // Collecting twice stays collected.
                    world.fuel_collected = true;
                    world.message = Some(MSG_REFUELED.to_string());
                }
                _ => {
                    world.message = Some(MSG_NOTHING_TO_COLLECT.to_string());
                }
            }
        }
    }
}

/// A candidate cell is blocked when it leaves the grid on either axis or
/// coincides with an obstacle.
fn is_blocked(x: i64, y: i64, level: &Level) -> bool {
    let size = level.grid_size as i64;
    x < 0 || x >= size || y < 0 || y >= size
        || level.obstacles.iter().any(|o| o.x as i64 == x && o.y as i64 == y)
}
