//! HTTP and WebSocket routing configuration.
//!
//! Defines the level catalog endpoint and the playback WebSocket. The
//! socket is handled by a dedicated actor which manages the connection
//! lifecycle and relays session events.

use actix_web::{web, HttpResponse, Responder};

use crate::game::level::Level;
use crate::server::playback::session::ws_playback;

async fn get_levels() -> impl Responder {
    HttpResponse::Ok().json(Level::catalog())
}

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/levels")
            .route(web::get().to(get_levels))
    )
    .service(
        web::resource("/ws/playback")
            .to(ws_playback)
    );
}
