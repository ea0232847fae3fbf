//! Student list report for the `alumnos` MySQL table
//!
//! Reads MySQL credentials from the environment, runs a single fixed query
//! and renders the rows as an HTML fragment.

pub mod config;
pub mod db;
pub mod error;
pub mod render;
pub mod reporter;

pub use config::{DbConfig, ReportConfig};
pub use db::{Connector, MySqlConnector, StudentRecord, StudentSource, STUDENTS_QUERY};
pub use error::ReportError;
pub use render::RenderedOutput;
pub use reporter::Reporter;

/// Write a rendered page or an error message to stdout, no trailing newline added
pub fn write_stdout(text: &str) -> std::io::Result<()> {
    use std::io::Write;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}
