//! Connect, query, render
//!
//! One connection per call, acquired at the start and closed before the
//! rendered page is returned.

use crate::config::ReportConfig;
use crate::db::{Connector, StudentSource};
use crate::error::ReportError;
use crate::render::{render_connected, render_report, RenderedOutput};
use tracing::{info, instrument, warn};

pub struct Reporter<C> {
    connector: C,
    config: ReportConfig,
}

impl<C: Connector> Reporter<C> {
    pub fn new(connector: C, config: ReportConfig) -> Self {
        Self { connector, config }
    }

    async fn open(&self) -> Result<C::Session, ReportError> {
        self.connector
            .connect(&self.config.db)
            .await
            .map_err(ReportError::ConnectionFailure)
    }

    /// Render the `alumnos` report.
    ///
    /// A connection failure returns before any query is sent.
    #[instrument(skip_all, fields(database = %self.config.db.database))]
    pub async fn run(&self) -> Result<RenderedOutput, ReportError> {
        let mut session = self.open().await?;

        let students = match session.fetch_students().await {
            Ok(students) => students,
            Err(e) => {
                if let Err(close_err) = session.close().await {
                    warn!(error = %close_err, "Failed to close connection after query error");
                }
                return Err(ReportError::Query(e));
            }
        };

        info!(rows = students.len(), "Loaded alumnos");

        if let Err(e) = session.close().await {
            warn!(error = %e, "Failed to close connection");
        }

        Ok(render_report(&self.config.title, &students))
    }

    /// Connect and disconnect without querying.
    #[instrument(skip_all, fields(database = %self.config.db.database))]
    pub async fn check(&self) -> Result<RenderedOutput, ReportError> {
        let session = self.open().await?;
        if let Err(e) = session.close().await {
            warn!(error = %e, "Failed to close connection");
        }

        info!("Connection check passed");
        Ok(render_connected(&self.config.title))
    }
}
