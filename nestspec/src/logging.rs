//! Development-time tracing for debugging spec runs.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: pass-by-pass diagnostics via `RUST_LOG`,
//!   output to stderr. Never mixed into the spec report.
//!
//! - **Reports (`format`, `io/report`)**: the product output on stdout or in
//!   the JSON file. Always written, unaffected by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=nestspec=debug cargo run --bin nestspec-demo
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
