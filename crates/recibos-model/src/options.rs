//! Batch configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY_FILE: &str = "apartamentos.csv";
pub const DEFAULT_WATER_FILE: &str = "resultado_agua.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "recibos";
pub const DEFAULT_CURRENCY: &str = "$";

/// What to do when two rows map to the same output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Later rows replace earlier files.
    #[default]
    Overwrite,
    /// Append `_2`, `_3`, ... before the extension.
    Suffix,
    /// Fail the later row.
    Fail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Options controlling one batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOptions {
    /// Directory receiving one document per row. Created when absent.
    pub output_dir: PathBuf,
    /// Water table. Absence is tolerated (every unit gets the default charge).
    pub water_path: PathBuf,
    pub collision: CollisionPolicy,
    /// Symbol prefixed to every amount on the receipt.
    pub currency: String,
    /// Replace raw row content with a placeholder in failure logs.
    pub redact_rows: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            water_path: PathBuf::from(DEFAULT_WATER_FILE),
            collision: CollisionPolicy::default(),
            currency: DEFAULT_CURRENCY.to_string(),
            redact_rows: false,
        }
    }
}

impl BatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_water_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.water_path = path.into();
        self
    }

    #[must_use]
    pub fn with_collision(mut self, policy: CollisionPolicy) -> Self {
        self.collision = policy;
        self
    }

    #[must_use]
    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency = symbol.into();
        self
    }

    #[must_use]
    pub fn with_redact_rows(mut self, enable: bool) -> Self {
        self.redact_rows = enable;
        self
    }
}
