//! Unified test logging initialization
//!
//! One subscriber per test binary, installed lazily. Unit tests reach it via a
//! `ctor` hook in the backend crate; integration tests through `tests/common`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe. The filter is taken from `TEST_LOG`, then
/// `RUST_LOG`, and falls back to `"warn"` so passing suites stay quiet.
///
/// ```bash
/// # Watch the coordinator deal and broadcast
/// TEST_LOG=durak_backend=debug cargo test -p durak-backend
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // cargo/nextest capture
            .without_time()
            .try_init()
            .ok();

        tracing::debug!("test logging initialized");
    });
}
