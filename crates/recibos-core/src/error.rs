use std::path::PathBuf;

use recibos_ingest::IngestError;
use recibos_model::ModelError;
use thiserror::Error;

/// Failure confined to one billing row.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("missing unit identifier (DEPTO)")]
    MissingUnitId,

    #[error("invalid amount in {field}: '{value}'")]
    InvalidAmount { field: String, value: String },

    #[error("undecodable row: {message}")]
    Decode { message: String },

    #[error("total of {} is too large", .fields.join(", "))]
    AmountOverflow { fields: Vec<String> },

    #[error(transparent)]
    Render(#[from] ModelError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output already produced earlier in this batch: {path}")]
    OutputCollision { path: PathBuf },
}

/// Failure that stops the batch before any row is processed.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("billing file not found: {path}")]
    PrimaryNotFound { path: PathBuf },

    #[error("missing required columns in {path}: {}", .missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },

    #[error("failed to read billing header: {0}")]
    Header(#[source] IngestError),

    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<IngestError> for BatchError {
    fn from(error: IngestError) -> Self {
        match error {
            IngestError::FileNotFound { path } => Self::PrimaryNotFound { path },
            IngestError::MissingColumns { path, missing } => Self::MissingColumns { path, missing },
            other => Self::Header(other),
        }
    }
}
