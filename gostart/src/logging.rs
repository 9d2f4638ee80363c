//! Terminal logging for gostart.
//!
//! Progress, dry-run reports and errors all go to stderr through `tracing`,
//! each line timestamped and labeled with its level.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `info` so progress and dry-run lines
/// are visible. Colors only when stderr is a terminal.
///
/// # Example
/// ```bash
/// RUST_LOG=gostart=debug gostart -p demo -u alice --template-only
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .compact(),
        )
        .init();
}
