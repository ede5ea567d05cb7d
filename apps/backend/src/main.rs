use actix_web::{web, App, HttpServer};
use durak_backend::config::ServerConfig;
use durak_backend::middleware::{RequestTrace, StructuredLogger};
use durak_backend::routes;
use durak_backend::state::AppState;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let host = config.host.clone();
    let port = config.port;
    info!(
        host = %host,
        port,
        heartbeat_secs = config.heartbeat_interval.as_secs(),
        client_timeout_secs = config.client_timeout.as_secs(),
        "starting durak backend"
    );

    let data = web::Data::new(AppState::new(config));

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
