use actix_web::web;

pub mod health;
pub mod realtime;

/// Register every route. Used by `main.rs` and by tests that build an
/// `App` directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Room websocket: /ws?room=<id>
    cfg.configure(realtime::configure_routes);
}
