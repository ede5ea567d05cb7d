// WebSocket test utilities

use std::net::{SocketAddr, TcpListener};
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use durak_backend::middleware::{RequestTrace, StructuredLogger};
use durak_backend::routes;
use durak_backend::AppState;

/// Start a real HTTP server on an ephemeral port with the production routes.
///
/// Returns `(server_handle, socket_addr, join_handle)`; stop the server with
/// `server_handle.stop(true)` and await `join_handle` to surface errors.
pub async fn start_test_server(
    state: AppState,
) -> Result<
    (
        actix_web::dev::ServerHandle,
        SocketAddr,
        tokio::task::JoinHandle<Result<(), std::io::Error>>,
    ),
    Box<dyn std::error::Error>,
> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let state_data = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state_data.clone())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .configure(routes::configure)
    })
    .workers(1)
    .listen(listener)?
    .run();

    let server_handle = server.handle();
    let join = tokio::spawn(server);

    Ok((server_handle, addr, join))
}

pub fn ws_url(addr: SocketAddr, room: &str) -> String {
    format!("ws://{addr}/ws?room={room}")
}

/// Poll `check` until it returns true or `timeout` elapses.
pub async fn wait_until<F>(timeout: Duration, mut check: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnMut() -> bool,
{
    let start = tokio::time::Instant::now();
    loop {
        if check() {
            return Ok(());
        }
        if start.elapsed() >= timeout {
            return Err("timeout waiting for condition".into());
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
