//! Process-wide `tracing` subscriber setup, mirroring the teacher's
//! `logger.rs` minus the file-append plumbing — this crate touches no
//! files or sockets of its own, so everything here goes to stderr.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes the global `tracing` subscriber once per process.
/// Idempotent — safe to call from every test that wants `trace!`/
/// `debug!` output visible; later calls are no-ops. Honors `RUST_LOG`
/// if set, otherwise falls back to `filter`.
pub fn init_logging(filter: &str) {
    INIT.get_or_init(|| {
        let env_filter = if std::env::var_os("RUST_LOG").is_some() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"))
        };
        let subscriber = fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
