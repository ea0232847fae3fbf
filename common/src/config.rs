//! Environment variable parsing helpers
//!
//! Configuration is read through a [`VarSource`] so that binaries read the
//! process environment while tests supply a fixed map of values.

use std::collections::HashMap;
use std::env;
use std::str::FromStr;

/// A source of named configuration variables.
///
/// Only [`VarSource::var`] needs implementing; the helpers mirror the usual
/// "default / parse" patterns for environment configuration.
pub trait VarSource {
    /// Look up a variable, `None` if it is unset or not valid unicode.
    fn var(&self, name: &str) -> Option<String>;

    /// Get a variable with a default value.
    ///
    /// # Example
    /// ```ignore
    /// let host = ProcessEnv.var_or("MYSQL_HOST", "");
    /// ```
    fn var_or(&self, name: &str, default: &str) -> String {
        self.var(name).unwrap_or_else(|| default.to_string())
    }

    /// Get a variable parsed as a specific type.
    ///
    /// Returns `default` if the variable is not set or fails to parse.
    ///
    /// # Example
    /// ```ignore
    /// let port: u16 = ProcessEnv.var_parse("MYSQL_PORT", 3306);
    /// ```
    fn var_parse<T: FromStr>(&self, name: &str, default: T) -> T {
        self.var(name)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl VarSource for HashMap<&str, &str> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|v| v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_or_falls_back_when_unset() {
        let vars: HashMap<&str, &str> = HashMap::new();
        assert_eq!(vars.var_or("MYSQL_HOST", ""), "");
        assert_eq!(vars.var_or("MYSQL_HOST", "localhost"), "localhost");
    }

    #[test]
    fn test_var_or_keeps_empty_value() {
        let vars = HashMap::from([("MYSQL_USER", "")]);
        assert_eq!(vars.var_or("MYSQL_USER", "root"), "");
    }

    #[test]
    fn test_var_parse() {
        let vars = HashMap::from([("MYSQL_PORT", " 3307 "), ("BROKEN", "abc")]);
        assert_eq!(vars.var_parse::<u16>("MYSQL_PORT", 3306), 3307);
        assert_eq!(vars.var_parse::<u16>("BROKEN", 3306), 3306);
        assert_eq!(vars.var_parse::<u16>("MISSING", 3306), 3306);
    }
}
