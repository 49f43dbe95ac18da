//! Receipt generation pipeline.
//!
//! Each billing row goes through the same stages:
//! 1. **Join**: the unit's water charge is injected from the water index
//! 2. **Totals**: expense, water and fine are summed leniently
//! 3. **Build**: the row becomes an ordered list of document blocks
//! 4. **Write**: a renderer turns the document into a file named after the
//!    unit and the billing date
//!
//! The batch orchestrator isolates failures per row: a bad row is recorded in
//! the [`BatchSummary`](recibos_model::BatchSummary) and the next row proceeds.

pub mod batch;
pub mod builder;
mod error;
pub mod join;
pub mod naming;
pub mod totals;

pub use batch::{run, run_batch};
pub use builder::{CONCEPTS, build, build_with_currency, line_items};
pub use error::{BatchError, RowError};
pub use join::join;
pub use naming::{OutputPlanner, receipt_file_name, sanitize_component};
pub use totals::{TOTAL_FIELDS, parse_amount, total};
