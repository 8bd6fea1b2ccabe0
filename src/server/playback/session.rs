use actix::{Actor, Addr, AsyncContext, Handler, Running, StreamHandler};
use actix_web::{error, web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, warn};
use uuid::Uuid;

use crate::server::playback::messages::{
    ClientAction, ProcessClientMessage, RegisterViewer, SessionEvent, UnregisterViewer,
};
use crate::server::playback::server::{CreateSession, GetSession, PlaybackSession};
use crate::server::ws_error::ws_error_message;

/// WebSocket connection of one viewer (the block editor / stage UI).
///
/// Forwards client actions to the playback session and relays session
/// events back out as JSON frames.
pub struct PlaybackSocket {
    pub session_id: Uuid,
    pub viewer_id: Uuid,
    pub session_addr: Addr<PlaybackSession>,
}

impl Actor for PlaybackSocket {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        debug!(
            "[PlaybackSocket] Viewer {} joined session {}",
            self.viewer_id, self.session_id
        );
        self.session_addr.do_send(RegisterViewer {
            viewer_id: self.viewer_id,
            addr: ctx.address(),
        });
    }

    fn stopping(&mut self, _: &mut Self::Context) -> Running {
        self.session_addr.do_send(UnregisterViewer {
            viewer_id: self.viewer_id,
        });
        Running::Stop
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for PlaybackSocket {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                let action: ClientAction = match serde_json::from_str(&text) {
                    Ok(action) => action,
                    Err(_) => {
                        warn!(
                            "[PlaybackSocket] Invalid action from viewer {}: {}",
                            self.viewer_id, text
                        );
                        ctx.text(ws_error_message("INVALID_ACTION", "Invalid action", None));
                        return;
                    }
                };
                self.session_addr.do_send(ProcessClientMessage {
                    action,
                    viewer_id: self.viewer_id,
                });
            }
            Ok(ws::Message::Ping(payload)) => ctx.pong(&payload),
            _ => (),
        }
    }
}

impl Handler<SessionEvent> for PlaybackSocket {
    type Result = ();

    fn handle(&mut self, msg: SessionEvent, ctx: &mut Self::Context) -> Self::Result {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(_) => ctx.text(ws_error_message(
                "SERIALIZE_FAILED",
                "Failed to serialize session event",
                None,
            )),
        }
    }
}

/// WebSocket entry point.
///
/// A connection without a `session_id` query parameter gets a fresh
/// session; passing `?session_id=<uuid>` rejoins an existing one (a second
/// screen, or a reconnect after a dropped socket).
pub async fn ws_playback(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let requested = req
        .query_string()
        .split('&')
        .find(|s| s.starts_with("session_id="))
        .and_then(|s| Uuid::parse_str(s.split('=').nth(1).unwrap_or("")).ok());

    let session_id = match requested {
        Some(id) => id,
        None => data
            .playback_manager
            .send(CreateSession)
            .await
            .map_err(error::ErrorInternalServerError)?,
    };

    let session_addr = data
        .playback_manager
        .send(GetSession { session_id })
        .await
        .map_err(error::ErrorInternalServerError)?
        .map_err(error::ErrorBadRequest)?;

    ws::start(
        PlaybackSocket {
            session_id,
            viewer_id: Uuid::new_v4(),
            session_addr,
        },
        &req,
        stream,
    )
}
