//! Lenient totals.

use std::str::FromStr;

use recibos_ingest::lookup;
use recibos_model::fields::{AGUA, EXPENSA, MULTA};
use recibos_model::{Amount, PrimaryRecord};
use rust_decimal::Decimal;

use crate::error::RowError;

/// Fields summed into a receipt total, in display order.
pub const TOTAL_FIELDS: [&str; 3] = [EXPENSA, AGUA, MULTA];

/// Parses plain or scientific decimal notation. Blank input is `None`.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Sums the fields that parse as numbers.
///
/// Absent, blank and unparseable fields contribute zero without error. A sum
/// too large for a `Decimal` fails the row.
pub fn total(record: &PrimaryRecord, fields: &[&str]) -> Result<Amount, RowError> {
    let amounts = fields
        .iter()
        .filter_map(|field| lookup(record, field))
        .filter_map(parse_amount)
        .map(Amount::new);
    Amount::checked_sum(amounts).ok_or_else(|| RowError::AmountOverflow {
        fields: fields.iter().map(|field| (*field).to_string()).collect(),
    })
}
