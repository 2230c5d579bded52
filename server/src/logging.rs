//! Logging Setup
//!
//! `tracing` subscriber writing to stderr. `RUST_LOG` overrides the default
//! `info` level.

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let _ = fmt().with_env_filter(filter).try_init();
}
