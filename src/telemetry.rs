use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a global `tracing` subscriber for host binaries and tests
///
/// Honors `RUST_LOG`, defaulting to info for this crate. Calling it again
/// after a subscriber is installed does nothing.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_favorites=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
