use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use super::session::PlaybackSocket;
use crate::game::state::WorldState;

/// Actions a client can send over the playback WebSocket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClientAction {
    /// Replace the session's program text. Takes effect on the next run.
    SetProgram { code: String },
    /// Start a continuous run. Ignored while a run is in progress.
    Run,
    /// Apply the next command, starting a fresh attempt if none is active.
    Step,
    /// Abandon the attempt and return to the level's start pose.
    Reset,
    /// Switch to another level of the catalog (0-based index).
    SelectLevel { index: usize },
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct ProcessClientMessage {
    pub action: ClientAction,
    pub viewer_id: Uuid,
}

/// Everything the session broadcasts to its registered viewers.
#[derive(Message, Debug, Clone, Serialize)]
#[rtype(result = "()")]
#[serde(tag = "event", content = "data")]
pub enum SessionEvent {
    /// World snapshot after a reset, a level switch, or one applied command.
    Snapshot {
        level_id: u32,
        step_index: usize,
        state: WorldState,
        completed_levels: Vec<u32>,
    },
    /// The active level was cleared.
    LevelCompleted { level_id: u32 },
    /// The cleared level was the catalog's final one.
    CourseCompleted,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct RegisterViewer {
    pub viewer_id: Uuid,
    pub addr: Addr<PlaybackSocket>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct UnregisterViewer {
    pub viewer_id: Uuid,
}
