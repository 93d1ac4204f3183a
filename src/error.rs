use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Data directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Required column '{column}' missing in {file}")]
    Schema { column: String, file: String },

    #[error("Value '{value}' in column '{column}' is not a valid number")]
    NumericParse { column: String, value: String },

    #[error("Cannot coerce value '{value}' in column '{column}' to {target}")]
    TypeCoercion {
        column: String,
        value: String,
        target: &'static str,
    },

    #[error("Invalid spreadsheet format: {0}")]
    InvalidFormat(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
