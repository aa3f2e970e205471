//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when neither `DOF_LOG` nor `RUST_LOG` is set.
const DEFAULT_LEVEL: &str = "info";

/// Install a compact stderr subscriber.
///
/// The filter comes from `DOF_LOG`, then `RUST_LOG`, then [`DEFAULT_LEVEL`].
/// Stdout is left to the report.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_env("DOF_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()?;
    Ok(())
}
