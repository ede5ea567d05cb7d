use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::rooms::RoomDirectory;

/// Shared state handed to every worker through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    /// Live rooms; shared by all workers.
    pub rooms: Arc<RoomDirectory>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            rooms: Arc::new(RoomDirectory::new()),
            config,
        }
    }

    /// Default config with an empty directory.
    pub fn for_tests() -> Self {
        Self::new(ServerConfig::default())
    }
}
