//! Ingestion of the billing table and the water table.
//!
//! - **Normalization**: byte-order marks and whitespace are stripped from
//!   header names and values so lookups do not depend on file encoding quirks.
//! - **Billing table**: semicolon-separated, header row required, rows read
//!   one at a time so a bad row can be reported without stopping the reader.
//! - **Water table**: comma-separated `Depto`/`Monto` pairs loaded into a
//!   [`WaterIndex`](recibos_model::WaterIndex). Loading never fails the batch.

mod error;
pub mod normalize;
mod primary;
mod water;

pub use error::{IngestError, Result};
pub use normalize::{BOM, lookup, normalize_header, normalize_row, normalize_value, strip_bom};
pub use primary::{DecodeFailure, PrimaryReader, PrimaryRows, RawRow, open_primary};
pub use water::{load_water_index, try_load_water_index};
