//! Process exit codes.

use recibos_core::BatchError;

/// Batch completed; individual rows may still have failed.
pub const SUCCESS: i32 = 0;
/// Logging, output directory or header setup failed.
pub const SETUP_FAILURE: i32 = 1;
pub const PRIMARY_NOT_FOUND: i32 = 2;
pub const MISSING_COLUMNS: i32 = 3;

/// Maps a command failure to its exit code.
pub fn code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<BatchError>() {
        Some(BatchError::PrimaryNotFound { .. }) => PRIMARY_NOT_FOUND,
        Some(BatchError::MissingColumns { .. }) => MISSING_COLUMNS,
        _ => SETUP_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use anyhow::Context;

    use super::*;

    fn failed(error: BatchError) -> anyhow::Error {
        Err::<(), _>(error).context("run batch").unwrap_err()
    }

    #[test]
    fn test_codes_survive_context() {
        let not_found = failed(BatchError::PrimaryNotFound {
            path: PathBuf::from("apartamentos.csv"),
        });
        assert_eq!(code_for(&not_found), PRIMARY_NOT_FOUND);

        let missing = failed(BatchError::MissingColumns {
            path: PathBuf::from("apartamentos.csv"),
            missing: vec!["TELF".to_string()],
        });
        assert_eq!(code_for(&missing), MISSING_COLUMNS);
    }

    #[test]
    fn test_other_failures_are_setup() {
        let error = anyhow::anyhow!("cannot open log file");
        assert_eq!(code_for(&error), SETUP_FAILURE);
    }
}
