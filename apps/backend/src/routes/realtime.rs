use actix_web::{web, Error, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::state::app_state::AppState;
use crate::ws::session;

#[derive(Debug, Deserialize)]
pub struct RoomQuery {
    pub room: String,
}

async fn connect(
    req: HttpRequest,
    stream: web::Payload,
    query: web::Query<RoomQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    session::upgrade(req, stream, query.into_inner().room, app_state).await
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/ws", web::get().to(connect));
}
