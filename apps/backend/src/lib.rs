#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod ws;

// Re-exports for public API
pub use config::ServerConfig;
pub use domain::{Card, ConnId, GameStateView, Phase, Rank, Suit};
pub use error::AppError;
pub use services::game_flow::GameRoom;
pub use services::rooms::RoomDirectory;
pub use state::app_state::AppState;
pub use ws::hub::Outbound;
pub use ws::protocol::{ClientMsg, ServerMsg};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
