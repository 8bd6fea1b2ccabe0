//! Playback state machine.
//!
//! One queue, one cursor, one `advance` transition. Continuous mode is
//! "call `advance` on a timer until exhausted"; single-step mode is "call
//! `advance` once per button press". Both modes share this machine, so the
//! simulation path cannot diverge between them.

use serde::{Serialize, Deserialize};

use crate::game::level::Level;
use crate::game::state::WorldState;
use crate::game::systems::simulator;
use crate::game::types::Command;

/// Where a playback attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No command queue loaded.
    Idle,
    /// A queue is loaded but nothing has been applied yet.
    Queued,
    /// Advancing one command per learner step.
    Stepping,
    /// Advancing one command per timer tick.
    Running,
    /// The cursor has passed the last command.
    Finished,
}

/// Result of one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// One command was applied and the cursor moved forward.
    Applied,
    /// The queue is exhausted; the outcome evaluator should run.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct Playback {
    pub phase: Phase,
    queue: Vec<Command>,
    cursor: usize,
}

impl Playback {
    /// Machine with nothing to play.
    pub fn idle() -> Self {
        Playback {
            phase: Phase::Idle,
            queue: Vec::new(),
            cursor: 0,
        }
    }

    /// Load a translated command sequence, ready to play from the start.
    pub fn load(queue: Vec<Command>) -> Self {
        Playback {
            phase: Phase::Queued,
            queue,
            cursor: 0,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Index of the next unconsumed command.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Commands left to apply.
    pub fn remaining(&self) -> usize {
        self.queue.len() - self.cursor
    }

    /// Apply exactly the next unconsumed command, in emission order.
    ///
    /// Once the cursor is past the last command the machine reports
    /// `Exhausted` (and keeps reporting it) instead of touching the world.
    pub fn advance(&mut self, world: &mut WorldState, level: &Level) -> Advance {
        if self.cursor >= self.queue.len() {
            self.phase = Phase::Finished;
            return Advance::Exhausted;
        }
        simulator::apply(world, &self.queue[self.cursor], level);
        self.cursor += 1;
        Advance::Applied
    }
}
