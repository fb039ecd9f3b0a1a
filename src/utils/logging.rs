use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Install the diagnostic subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `debug` with
/// `--verbose` and at `warn` without.
pub fn enable_logging(verbose: bool) -> AppResult<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={level}", env!("CARGO_PKG_NAME"))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
