//! Level descriptors and the built-in catalog.
//!
//! A level is immutable static data: the playback session only ever reads
//! these fields. Ids are 1-based and contiguous across the catalog.

use serde::{Serialize, Deserialize};

use crate::game::types::{Direction, Position};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    /// Narration text, passed through to presentation untouched.
    pub title: String,
    pub description: String,
    pub hint: String,
    pub grid_size: usize,
    pub obstacles: Vec<Position>,
    pub start_pos: Position,
    pub start_dir: Direction,
    pub goal_pos: Position,
    /// When present, the goal only counts after collecting fuel here.
    pub fuel_pos: Option<Position>,
    /// Suggested block count shown next to the workspace. Never enforced.
    pub ideal_block_count: u32,
}

impl Level {
    /// Whether this level requires collecting fuel before the goal counts.
    pub fn requires_fuel(&self) -> bool {
        self.fuel_pos.is_some()
    }

    /// The built-in lesson catalog, in play order.
    pub fn catalog() -> Vec<Level> {
        vec![
            Level {
                id: 1,
                title: "First steps".to_string(),
                description: "Move the robot to the star.".to_string(),
                hint: "Two move blocks will get you there.".to_string(),
                grid_size: 3,
                obstacles: vec![],
                start_pos: Position { x: 0, y: 0 },
                start_dir: Direction::East,
                goal_pos: Position { x: 2, y: 0 },
                fuel_pos: None,
                ideal_block_count: 3,
            },
            Level {
                id: 2,
                title: "Turning corners".to_string(),
                description: "The star is below you. Turn before you move.".to_string(),
                hint: "Turn right to face down the grid.".to_string(),
                grid_size: 3,
                obstacles: vec![],
                start_pos: Position { x: 0, y: 0 },
                start_dir: Direction::East,
                goal_pos: Position { x: 2, y: 2 },
                fuel_pos: None,
                ideal_block_count: 6,
            },
            Level {
                id: 3,
                title: "Around the rock".to_string(),
                description: "A rock blocks the straight path. Go around it.".to_string(),
                hint: "Step down one row first, then come back up.".to_string(),
                grid_size: 4,
                obstacles: vec![Position { x: 1, y: 0 }],
                start_pos: Position { x: 0, y: 0 },
                start_dir: Direction::East,
                goal_pos: Position { x: 3, y: 0 },
                fuel_pos: None,
                ideal_block_count: 9,
            },
            Level {
                id: 4,
                title: "Fill the tank".to_string(),
                description: "Pick up the fuel can on the way to the star.".to_string(),
                hint: "Stop on the fuel can and use the collect block.".to_string(),
                grid_size: 3,
                obstacles: vec![],
                start_pos: Position { x: 0, y: 0 },
                start_dir: Direction::East,
                goal_pos: Position { x: 2, y: 0 },
                fuel_pos: Some(Position { x: 1, y: 0 }),
                ideal_block_count: 4,
            },
            Level {
                id: 5,
                title: "A long straight".to_string(),
                description: "The star is far away. Repeat blocks save work.".to_string(),
                hint: "One repeat block can hold a move block.".to_string(),
                grid_size: 5,
                obstacles: vec![],
                start_pos: Position { x: 0, y: 2 },
                start_dir: Direction::East,
                goal_pos: Position { x: 4, y: 2 },
                fuel_pos: None,
                ideal_block_count: 3,
            },
            Level {
                id: 6,
                title: "The grand tour".to_string(),
                description: "Fuel up, dodge the rocks, and reach the star.".to_string(),
                hint: "Collect the fuel before the path bends.".to_string(),
                grid_size: 5,
                obstacles: vec![Position { x: 0, y: 1 }, Position { x: 1, y: 1 }],
                start_pos: Position { x: 0, y: 4 },
                start_dir: Direction::North,
                goal_pos: Position { x: 2, y: 0 },
                fuel_pos: Some(Position { x: 0, y: 2 }),
                ideal_block_count: 10,
            },
        ]
    }
}
