//! Main entry point for the backend server.
//!
//! Initializes the actor system, configures application state, and launches
//! the HTTP server with the WebSocket endpoint for playback sessions.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use server::playback::server::PlaybackManager;

pub mod config;
mod server;
mod game;
mod translator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    // Start the PlaybackManager actor (handles all learner sessions).
    let playback_manager = PlaybackManager::new().start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(playback_manager));

    // Start the HTTP server with the WebSocket endpoint.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
