//! Batch orchestration over the billing table.
//!
//! Stages, in order:
//! 1. **Preflight**: the billing file must exist
//! 2. **Header**: every required column must be present
//! 3. **Output directory**: created once, idempotently
//! 4. **Rows**: join, build, render and write each row; failures are
//!    recorded per row and never stop the loop
//!
//! Stages 1 and 2 are fatal and leave no output behind.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use recibos_ingest::{DecodeFailure, RawRow, load_water_index, lookup, open_primary};
use recibos_model::fields::{DEPTO, FECHA, REQUIRED_COLUMNS};
use recibos_model::{
    Amount, BatchOptions, BatchSummary, DocumentRenderer, PrimaryRecord, RowOutcome, RowStatus,
    WaterIndex, WaterMatch,
};
use tracing::{debug, error, info, info_span, warn};

use crate::builder::build_with_currency;
use crate::error::{BatchError, RowError};
use crate::join::join;
use crate::naming::OutputPlanner;
use crate::totals::{TOTAL_FIELDS, total};

/// Placeholder for row content when row logging is redacted.
pub const REDACTED_ROW: &str = "[REDACTED]";

/// Loads the water index named in `options` and runs the batch.
///
/// The index is built once here and dropped when the batch ends.
pub fn run(
    primary: &Path,
    options: &BatchOptions,
    renderer: &dyn DocumentRenderer,
) -> Result<BatchSummary, BatchError> {
    let water = load_water_index(&options.water_path);
    run_batch(primary, &water, renderer, options)
}

/// Processes every row of `primary` against an already-built water index.
pub fn run_batch(
    primary: &Path,
    water: &WaterIndex,
    renderer: &dyn DocumentRenderer,
    options: &BatchOptions,
) -> Result<BatchSummary, BatchError> {
    let batch_span = info_span!("batch", primary = %primary.display());
    let _batch_guard = batch_span.enter();
    let start = Instant::now();

    if !primary.is_file() {
        error!("billing file not found");
        return Err(BatchError::PrimaryNotFound {
            path: primary.to_path_buf(),
        });
    }

    let mut reader = open_primary(primary).map_err(BatchError::from)?;
    info!(columns = ?reader.headers(), "billing columns");
    if let Err(err) = reader.require_columns(&REQUIRED_COLUMNS) {
        let err = BatchError::from(err);
        error!(%err, "stopping before any row is processed");
        return Err(err);
    }

    fs::create_dir_all(&options.output_dir).map_err(|source| BatchError::OutputDir {
        path: options.output_dir.clone(),
        source,
    })?;

    let headers = reader.headers().to_vec();
    let mut planner = OutputPlanner::new(&options.output_dir, options.collision);
    let mut rows = Vec::new();
    for item in reader.rows() {
        let outcome = match item {
            Ok(row) => process_row(row, &headers, water, renderer, &mut planner, options),
            Err(failure) => decode_failure(failure, options),
        };
        rows.push(outcome);
    }

    let summary = BatchSummary {
        primary: primary.to_path_buf(),
        output_dir: options.output_dir.clone(),
        water_entries: water.len(),
        rows,
    };
    info!(
        rows = summary.attempted(),
        written = summary.written_count(),
        failed = summary.failed_count(),
        water_matched = summary.matched_count(),
        water_defaulted = summary.defaulted_count(),
        duration_ms = start.elapsed().as_millis(),
        "batch complete"
    );
    Ok(summary)
}

fn process_row(
    row: RawRow,
    headers: &[String],
    water: &WaterIndex,
    renderer: &dyn DocumentRenderer,
    planner: &mut OutputPlanner,
    options: &BatchOptions,
) -> RowOutcome {
    let line = row.line;
    let row_span = info_span!("row", line);
    let _row_guard = row_span.enter();
    let raw = row.raw();
    let mut record = row.into_record(headers);
    let unit_id = lookup(&record, DEPTO)
        .filter(|unit| !unit.is_empty())
        .map(str::to_string);

    match write_receipt(&mut record, water, renderer, planner, &options.currency) {
        Ok((path, water_match, total)) => {
            info!(path = %path.display(), total = %total, "receipt written");
            RowOutcome {
                line,
                unit_id,
                status: RowStatus::Written {
                    path,
                    water: water_match,
                    total,
                },
            }
        }
        Err(err) => {
            let raw = redact(raw, options);
            warn!(%err, row = %raw, "row failed");
            RowOutcome {
                line,
                unit_id,
                status: RowStatus::Failed {
                    reason: err.to_string(),
                    raw,
                },
            }
        }
    }
}

fn write_receipt(
    record: &mut PrimaryRecord,
    water: &WaterIndex,
    renderer: &dyn DocumentRenderer,
    planner: &mut OutputPlanner,
    currency: &str,
) -> Result<(PathBuf, WaterMatch, Amount), RowError> {
    let unit = lookup(record, DEPTO)
        .filter(|unit| !unit.trim().is_empty())
        .ok_or(RowError::MissingUnitId)?
        .to_string();
    let water_match = join(record, water);
    let document = build_with_currency(record, currency)?;
    let total = total(record, &TOTAL_FIELDS)?;

    let date = lookup(record, FECHA).unwrap_or_default();
    let path = planner.plan(&unit, date, renderer.extension())?;
    let bytes = renderer.render(&document)?;
    fs::write(&path, bytes).map_err(|source| RowError::Write {
        path: path.clone(),
        source,
    })?;
    planner.commit(path.clone());
    debug!(path = %path.display(), blocks = document.blocks.len(), "document rendered");
    Ok((path, water_match, total))
}

fn decode_failure(failure: DecodeFailure, options: &BatchOptions) -> RowOutcome {
    let err = RowError::Decode {
        message: failure.message,
    };
    let raw = redact(failure.raw, options);
    warn!(line = failure.line, %err, row = %raw, "row failed");
    RowOutcome {
        line: failure.line,
        unit_id: None,
        status: RowStatus::Failed {
            reason: err.to_string(),
            raw,
        },
    }
}

fn redact(raw: String, options: &BatchOptions) -> String {
    if options.redact_rows {
        REDACTED_ROW.to_string()
    } else {
        raw
    }
}
