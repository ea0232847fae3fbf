//! Alumnos connection check
//!
//! Opens and closes a MySQL connection with the MYSQL_* environment
//! variables, without querying. Prints the title and a success line.

use alumnos_report::{write_stdout, MySqlConnector, ReportConfig, Reporter};
use anyhow::{Context, Result};
use common::init_logging;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logging("alumnos-check");

    let reporter = Reporter::new(MySqlConnector, ReportConfig::from_env());

    match reporter.check().await {
        Ok(page) => write_stdout(page.as_str()).context("Failed to write output"),
        Err(e) => {
            error!(error = %e, "Connection check failed");
            write_stdout(&e.to_string()).context("Failed to write error message")?;
            std::process::exit(1);
        }
    }
}
