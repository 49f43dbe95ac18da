//! Error types for table ingestion.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("no header row in {path}")]
    EmptyHeader { path: PathBuf },

    /// Listed in the order the columns are required.
    #[error("missing required columns in {path}: {}", .missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },
}

impl IngestError {
    pub(crate) fn csv(path: &std::path::Path, source: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io) = source.kind()
            && io.kind() == std::io::ErrorKind::NotFound
        {
            return Self::FileNotFound {
                path: path.to_path_buf(),
            };
        }
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("apartamentos.csv"),
        };
        assert_eq!(err.to_string(), "file not found: apartamentos.csv");
    }

    #[test]
    fn test_missing_columns_display() {
        let err = IngestError::MissingColumns {
            path: PathBuf::from("apartamentos.csv"),
            missing: vec!["TELF".to_string(), "MULTA".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "missing required columns in apartamentos.csv: TELF, MULTA"
        );
    }
}
