//! Column names of the billing table.
//!
//! Names are the normalized form (no byte-order mark, trimmed). `AGUA` never
//! appears in the billing file; it is injected from the water index.

pub const FECHA: &str = "FECHA";
pub const NOMBRE: &str = "NOMBRE";
pub const DEPTO: &str = "DEPTO";
pub const TELF: &str = "TELF";
pub const EXPENSA: &str = "EXPENSA";
pub const MULTA: &str = "MULTA";
pub const AGUA: &str = "AGUA";

/// Columns that must exist in the billing header.
///
/// Only existence is checked. `EXPENSA` and `MULTA` may still be blank on
/// any given row.
pub const REQUIRED_COLUMNS: [&str; 6] = [FECHA, NOMBRE, DEPTO, TELF, EXPENSA, MULTA];

/// Water table columns.
pub const WATER_UNIT: &str = "Depto";
pub const WATER_AMOUNT: &str = "Monto";

/// Charge applied when a unit has no entry in the water index.
pub const DEFAULT_WATER_CHARGE: &str = "0.00";
