//! Water charge join.

use recibos_ingest::lookup;
use recibos_model::fields::{AGUA, DEFAULT_WATER_CHARGE, DEPTO};
use recibos_model::{PrimaryRecord, WaterIndex, WaterMatch};
use tracing::{info, warn};

/// Sets `AGUA` on the record from the water index.
///
/// Units missing from the index get [`DEFAULT_WATER_CHARGE`]. The outcome is
/// logged and returned; it never stops the row.
pub fn join(record: &mut PrimaryRecord, index: &WaterIndex) -> WaterMatch {
    let unit = lookup(record, DEPTO).unwrap_or_default().to_string();
    match index.get(&unit) {
        Some(charge) => {
            info!(unit = %unit, charge = %charge, "water charge matched");
            record.insert(AGUA, charge);
            WaterMatch::Matched
        }
        None => {
            warn!(unit = %unit, default = DEFAULT_WATER_CHARGE, "no water charge for unit");
            record.insert(AGUA, DEFAULT_WATER_CHARGE);
            WaterMatch::Defaulted
        }
    }
}
