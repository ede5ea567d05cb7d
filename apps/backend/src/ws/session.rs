use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{debug, info, info_span, warn, Span};

use crate::domain::ConnId;
use crate::error::AppError;
use crate::services::game_flow::GameRoom;
use crate::services::rooms::{validate_room_id, RoomDirectory};
use crate::state::app_state::AppState;
use crate::ws::hub::Outbound;
use crate::ws::protocol::{parse_client_msg, ProtocolError, ServerMsg};

/// Room snapshots can arrive in bursts (join, ready, deal); keep headroom so
/// a healthy session never reports a full mailbox.
const MAILBOX_CAPACITY: usize = 256;

/// A serialized frame queued for one session.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Outgoing(pub String);

impl Outbound for Recipient<Outgoing> {
    fn deliver(&self, frame: String) -> Result<(), AppError> {
        self.try_send(Outgoing(frame))
            .map_err(|_| AppError::delivery("session mailbox closed or full"))
    }
}

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    room_id: String,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    validate_room_id(&room_id)?;

    let session = WsSession::new(
        ConnId::new(),
        room_id,
        Arc::clone(&app_state.rooms),
        app_state.config.heartbeat_interval,
        app_state.config.client_timeout,
    );
    ws::start(session, &req, stream)
}

pub struct WsSession {
    conn_id: ConnId,
    room_id: String,
    rooms: Arc<RoomDirectory>,
    /// Set once the join succeeded.
    room: Option<Arc<GameRoom>>,

    heartbeat_interval: Duration,
    client_timeout: Duration,
    last_heartbeat: Instant,
}

impl WsSession {
    fn new(
        conn_id: ConnId,
        room_id: String,
        rooms: Arc<RoomDirectory>,
        heartbeat_interval: Duration,
        client_timeout: Duration,
    ) -> Self {
        Self {
            conn_id,
            room_id,
            rooms,
            room: None,
            heartbeat_interval,
            client_timeout,
            last_heartbeat: Instant::now(),
        }
    }

    fn span(&self) -> Span {
        info_span!("ws_session", room_id = %self.room_id, conn_id = %self.conn_id)
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "failed to serialize outbound message"),
        }
    }

    fn refuse(ctx: &mut ws::WebsocketContext<Self>, err: &AppError) {
        Self::send_json(ctx, &ServerMsg::error(err.code(), err.detail()));
        ctx.close(Some(ws::CloseReason {
            code: ws::CloseCode::Policy,
            description: Some(err.detail()),
        }));
        ctx.stop();
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(self.heartbeat_interval, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > actor.client_timeout {
                let _span = actor.span().entered();
                warn!("heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let _span = self.span().entered();
        ctx.set_mailbox_capacity(MAILBOX_CAPACITY);

        let link: Box<dyn Outbound> = Box::new(ctx.address().recipient::<Outgoing>());
        match self.rooms.join(&self.room_id, self.conn_id, link) {
            Ok(room) => {
                self.room = Some(room);
                info!("session started");
                self.start_heartbeat(ctx);
            }
            Err(err) => {
                warn!(error = %err, "join refused");
                Self::refuse(ctx, &err);
            }
        }
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        let _span = self.span().entered();
        if let Some(room) = self.room.take() {
            room.leave(self.conn_id);
        }
        self.rooms.release_if_empty(&self.room_id);
        info!("session stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        let _span = self.span().entered();
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();
                let Some(room) = &self.room else {
                    return;
                };
                match parse_client_msg(&text) {
                    Ok(msg) => room.handle_message(self.conn_id, msg),
                    Err(ProtocolError::UnsupportedType(kind)) => {
                        debug!(kind = %kind, "ignoring unsupported message type");
                    }
                    Err(err) => warn!(error = %err, "ignoring malformed frame"),
                }
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                warn!("ignoring binary frame");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(error = %err, "protocol error");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<Outgoing> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: Outgoing, ctx: &mut Self::Context) -> Self::Result {
        ctx.text(msg.0);
    }
}
