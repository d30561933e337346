use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter (EnvFilter syntax).
pub const LOG_ENV: &str = "FISHOOK_LOG";

const DEFAULT_FILTER: &str = "fishook=warn";

/// Install a compact stderr subscriber filtered by `$FISHOOK_LOG`.
///
/// Defaults to warnings only, so a normal run leaves the hook's stderr alone.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
