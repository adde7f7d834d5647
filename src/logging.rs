// src/logging.rs
// =============================================================================
// Diagnostic logging via `tracing`.
//
// stdout is reserved for the progress lines and the final summary, so the
// subscriber writes to stderr. RUST_LOG wins over the -v flag when set.
// =============================================================================

use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "sheet_linkcheck=debug,warn" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("logging initialized");
}
