//! Report configuration from environment variables
//!
//! Read once at process start and passed into the reporter.

use common::VarSource;
use std::fmt;

pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_TITLE: &str = "Hola, Proyecto de Pasantía";

/// MySQL connection settings.
///
/// The four credential values have no defaults: an unset variable becomes an
/// empty string and is handed to the driver as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Load connection settings from a variable source
    pub fn from_vars(vars: &impl VarSource) -> Self {
        Self {
            host: vars.var_or("MYSQL_HOST", ""),
            port: vars.var_parse("MYSQL_PORT", DEFAULT_PORT),
            user: vars.var_or("MYSQL_USER", ""),
            password: vars.var_or("MYSQL_PASSWORD", ""),
            database: vars.var_or("MYSQL_DATABASE", ""),
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

/// Everything the reporter needs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub db: DbConfig,
    pub title: String,
}

impl ReportConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(&common::ProcessEnv)
    }

    pub fn from_vars(vars: &impl VarSource) -> Self {
        Self {
            db: DbConfig::from_vars(vars),
            title: vars.var_or("REPORT_TITLE", DEFAULT_TITLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_reads_all_variables() {
        let vars = HashMap::from([
            ("MYSQL_HOST", "db.internal"),
            ("MYSQL_PORT", "3307"),
            ("MYSQL_USER", "app"),
            ("MYSQL_PASSWORD", "s3cret"),
            ("MYSQL_DATABASE", "escuela"),
            ("REPORT_TITLE", "Hola, Proyecto de Pasaje de Grado"),
        ]);

        let config = ReportConfig::from_vars(&vars);

        assert_eq!(config.db.host, "db.internal");
        assert_eq!(config.db.port, 3307);
        assert_eq!(config.db.user, "app");
        assert_eq!(config.db.password, "s3cret");
        assert_eq!(config.db.database, "escuela");
        assert_eq!(config.title, "Hola, Proyecto de Pasaje de Grado");
    }

    #[test]
    fn test_missing_variables_become_empty() {
        let vars: HashMap<&str, &str> = HashMap::new();

        let config = ReportConfig::from_vars(&vars);

        assert_eq!(config.db.host, "");
        assert_eq!(config.db.user, "");
        assert_eq!(config.db.password, "");
        assert_eq!(config.db.database, "");
        assert_eq!(config.db.port, DEFAULT_PORT);
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_invalid_port_uses_default() {
        let vars = HashMap::from([("MYSQL_PORT", "not-a-port")]);
        assert_eq!(DbConfig::from_vars(&vars).port, DEFAULT_PORT);
    }

    #[test]
    fn test_debug_redacts_password() {
        let vars = HashMap::from([("MYSQL_PASSWORD", "s3cret")]);
        let rendered = format!("{:?}", DbConfig::from_vars(&vars));
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }
}
