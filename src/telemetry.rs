use std::io;

/// Installs the stderr `tracing` subscriber for the command-line tools.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();
}
