//! Structured logging initialization
//!
//! Provides consistent logging initialization across the workspace binaries.
//! Logs go to stderr; stdout is reserved for the rendered report.

use std::env;
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Marker returned by [`init_logging`]; hold it for the lifetime of main.
/// Logs are written unbuffered, so dropping it flushes nothing.
pub struct LogGuard;

/// Build the filter from `RUST_LOG` directives, INFO when unset or invalid.
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Initialize structured logging for a component.
///
/// Returns a guard that should be held for the lifetime of the program.
///
/// # Example
/// ```ignore
/// let _guard = init_logging("alumnos-report");
/// info!("Starting up...");
/// ```
pub fn init_logging(component: &str) -> LogGuard {
    let filter = build_filter(env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    let format = fmt::layer().with_target(false).with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();

    tracing::debug!(component, "Logging initialized");

    LogGuard
}
