//! Report errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The database connection could not be established. Fatal for the CLI.
    #[error("Conexión fallida: {0}")]
    ConnectionFailure(#[source] sqlx::Error),

    /// The `alumnos` query failed or returned an undecodable row.
    #[error("Consulta fallida: {0}")]
    Query(#[source] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_connection_failure_message() {
        let err = ReportError::ConnectionFailure(sqlx::Error::Io(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "Connection refused",
        )));
        let message = err.to_string();
        assert!(message.starts_with("Conexión fallida: "));
        assert!(message.contains("Connection refused"));
    }
}
