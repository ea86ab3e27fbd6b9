use tracing_subscriber::EnvFilter;

/// Maps a settings level name to a filter directive. Unknown names fall back to `info`.
pub fn level_directive(level_name: &str) -> &'static str {
    match level_name.trim().to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" | "warning" => "warn",
        "error" | "critical" => "error",
        _ => "info",
    }
}

/// Installs the global fmt subscriber. `RUST_LOG` takes precedence over `level_name`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(level_name: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(level_name)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logging configured at {} level", level_name);
    }
}
