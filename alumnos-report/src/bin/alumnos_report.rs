//! Alumnos report
//!
//! Connects to MySQL using the MYSQL_* environment variables and prints the
//! `alumnos` table as an HTML list. A connection failure prints the
//! driver's error and exits with status 1.

use alumnos_report::{write_stdout, MySqlConnector, ReportConfig, Reporter};
use anyhow::{Context, Result};
use common::init_logging;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logging("alumnos-report");

    let config = ReportConfig::from_env();
    let reporter = Reporter::new(MySqlConnector, config);

    match reporter.run().await {
        Ok(page) => {
            write_stdout(page.as_str()).context("Failed to write report")?;
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Report failed");
            write_stdout(&e.to_string()).context("Failed to write error message")?;
            std::process::exit(1);
        }
    }
}
