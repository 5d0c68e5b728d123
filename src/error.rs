// Error types for the busops dashboard.
// Covers config loading, CLI parsing of view names, and settings form input.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {}: {source}", path.display())]
    InvalidConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Unknown view '{0}' (expected overview, demand, fleet, routes, drivers, or settings)")]
    UnknownView(String),

    #[error("Invalid value '{value}' for {field}")]
    InvalidSettingValue { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, DashError>;
