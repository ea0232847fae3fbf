//! Shared utilities for the alumnos-report workspace
//!
//! This crate provides common functionality used by the report binaries:
//! - Structured logging initialization
//! - Configuration variable helpers

pub mod config;
pub mod logging;

pub use config::{ProcessEnv, VarSource};
pub use logging::init_logging;
