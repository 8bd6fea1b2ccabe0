// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the address of the playback session manager actor. Used to share
//! state between HTTP/WebSocket handlers and the actor system.

use actix::Addr;
use crate::server::playback::server::PlaybackManager;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the playback manager actor (creates and resolves sessions).
    pub playback_manager: Addr<PlaybackManager>,
}

impl AppState {
    /// Create a new AppState with the given actor address.
    pub fn new(playback_manager: Addr<PlaybackManager>) -> Self {
        AppState { playback_manager }
    }
}
