use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// Whether a unit's water charge came from the index or the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterMatch {
    Matched,
    Defaulted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RowStatus {
    Written {
        path: PathBuf,
        water: WaterMatch,
        total: Amount,
    },
    Failed {
        reason: String,
        /// Row content as read, fields joined with `;`.
        raw: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowOutcome {
    pub line: u64,
    pub unit_id: Option<String>,
    pub status: RowStatus,
}

impl RowOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self.status, RowStatus::Written { .. })
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        match &self.status {
            RowStatus::Written { path, .. } => Some(path),
            RowStatus::Failed { .. } => None,
        }
    }
}

/// Result of a batch that got past the header check.
///
/// Row failures do not make the batch fail; they are listed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub primary: PathBuf,
    pub output_dir: PathBuf,
    pub water_entries: usize,
    pub rows: Vec<RowOutcome>,
}

impl BatchSummary {
    pub fn attempted(&self) -> usize {
        self.rows.len()
    }

    pub fn written_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_written()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.attempted() - self.written_count()
    }

    pub fn matched_count(&self) -> usize {
        self.count_water(WaterMatch::Matched)
    }

    pub fn defaulted_count(&self) -> usize {
        self.count_water(WaterMatch::Defaulted)
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &RowOutcome> {
        self.rows.iter().filter(|row| !row.is_written())
    }

    fn count_water(&self, wanted: WaterMatch) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row.status, RowStatus::Written { water, .. } if water == wanted))
            .count()
    }
}
