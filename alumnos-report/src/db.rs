//! Database access for the alumnos report
//!
//! The reporter talks to the database through [`Connector`] and
//! [`StudentSource`]. [`MySqlConnector`] is the real implementation on top of
//! a single `sqlx` MySQL connection.

use crate::config::DbConfig;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::{Connection, Row};
use tracing::{debug, info};

/// The fixed, read-only report query
pub const STUDENTS_QUERY: &str = "SELECT * FROM alumnos";

/// One row of the `alumnos` table. Columns other than these two are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub nombre: String,
    pub apellido: String,
}

impl StudentRecord {
    pub fn new(nombre: impl Into<String>, apellido: impl Into<String>) -> Self {
        Self {
            nombre: nombre.into(),
            apellido: apellido.into(),
        }
    }
}

/// Opens database sessions.
#[allow(async_fn_in_trait)]
pub trait Connector {
    type Session: StudentSource;

    async fn connect(&self, config: &DbConfig) -> Result<Self::Session, sqlx::Error>;
}

/// An open database session that can list students.
#[allow(async_fn_in_trait)]
pub trait StudentSource {
    /// Run [`STUDENTS_QUERY`] and return rows in the order the server sent them.
    async fn fetch_students(&mut self) -> Result<Vec<StudentRecord>, sqlx::Error>;

    /// Release the session.
    async fn close(self) -> Result<(), sqlx::Error>;
}

/// Connects to MySQL with `sqlx`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlConnector;

/// Build driver options from the config.
///
/// Empty host and empty database follow the MySQL client convention: the
/// driver default (`localhost`) is used and no schema is selected.
pub fn connect_options(config: &DbConfig) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new()
        .port(config.port)
        .username(&config.user);

    if !config.host.is_empty() {
        options = options.host(&config.host);
    }
    if !config.password.is_empty() {
        options = options.password(&config.password);
    }
    if !config.database.is_empty() {
        options = options.database(&config.database);
    }

    options
}

impl Connector for MySqlConnector {
    type Session = MySqlSession;

    async fn connect(&self, config: &DbConfig) -> Result<MySqlSession, sqlx::Error> {
        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "Connecting to MySQL"
        );

        let conn = MySqlConnection::connect_with(&connect_options(config)).await?;

        info!("Connected to MySQL");
        Ok(MySqlSession { conn })
    }
}

/// A single open MySQL connection
pub struct MySqlSession {
    conn: MySqlConnection,
}

fn student_from_row(row: &MySqlRow) -> Result<StudentRecord, sqlx::Error> {
    // NULL renders as an empty string
    let nombre: Option<String> = row.try_get("nombre")?;
    let apellido: Option<String> = row.try_get("apellido")?;

    Ok(StudentRecord {
        nombre: nombre.unwrap_or_default(),
        apellido: apellido.unwrap_or_default(),
    })
}

impl StudentSource for MySqlSession {
    async fn fetch_students(&mut self) -> Result<Vec<StudentRecord>, sqlx::Error> {
        debug!(query = STUDENTS_QUERY, "Running query");

        let rows = sqlx::query(STUDENTS_QUERY).fetch_all(&mut self.conn).await?;

        rows.iter().map(student_from_row).collect()
    }

    async fn close(self) -> Result<(), sqlx::Error> {
        self.conn.close().await?;
        debug!("MySQL connection closed");
        Ok(())
    }
}
