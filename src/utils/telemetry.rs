use tracing_subscriber::EnvFilter;

/// Install a compact fmt subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this twice is
/// harmless; the second installation is ignored.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
