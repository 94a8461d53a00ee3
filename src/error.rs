//! Command-line error types

use quiz_admin_core::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}\n\nUsage: quiz-admin-table <table.json> [--config PATH] [--sort COLUMN]... [--now DATETIME] [--json]")]
    Usage(String),

    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid table file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot parse --now value {0:?}")]
    InvalidNow(String),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Cannot render report: {0}")]
    Render(#[source] serde_json::Error),
}
