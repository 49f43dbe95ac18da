//! Byte-order-mark and whitespace normalization.
//!
//! Spreadsheet exports often prefix the first header with U+FEFF. Every name
//! and value passes through here before any lookup.

use recibos_model::PrimaryRecord;

pub const BOM: char = '\u{feff}';

/// Removes leading byte-order marks.
pub fn strip_bom(value: &str) -> &str {
    value.trim_start_matches(BOM)
}

/// Strips BOM, trims, and collapses runs of inner whitespace to one space.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches(BOM).trim();
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

pub fn normalize_value(raw: &str) -> String {
    raw.trim().trim_matches(BOM).trim().to_string()
}

/// Pairs normalized headers with normalized values.
///
/// Values beyond the last header are dropped; headers without a value are
/// left out of the record.
pub fn normalize_row<S: AsRef<str>>(line: u64, headers: &[String], values: &[S]) -> PrimaryRecord {
    let mut record = PrimaryRecord::new(line);
    for (header, value) in headers.iter().zip(values) {
        record.insert(normalize_header(header), normalize_value(value.as_ref()));
    }
    record
}

/// Looks a column up by its bare name, then by the BOM-prefixed name.
///
/// An empty value under the bare name falls through to the marked variant.
pub fn lookup<'a>(record: &'a PrimaryRecord, name: &str) -> Option<&'a str> {
    let bare = strip_bom(name);
    match record.get(bare) {
        Some(value) if !value.is_empty() => Some(value),
        bare_value => record.get(&format!("{BOM}{bare}")).or(bare_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}FECHA"), "FECHA");
        assert_eq!(strip_bom("FECHA"), "FECHA");
        assert_eq!(strip_bom("\u{feff}\u{feff}FECHA"), "FECHA");
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("\u{feff}FECHA"), "FECHA");
        assert_eq!(normalize_header("  DEPTO  "), "DEPTO");
        assert_eq!(normalize_header(" Monto \t total "), "Monto total");
        assert_eq!(normalize_header(""), "");
    }

    #[test]
    fn test_normalize_value() {
        assert_eq!(normalize_value(" 50.00 "), "50.00");
        assert_eq!(normalize_value("\u{feff}101"), "101");
        assert_eq!(normalize_value("   "), "");
    }

    #[test]
    fn test_normalize_row_ragged() {
        let headers = vec!["\u{feff}FECHA".to_string(), "DEPTO".to_string(), "TELF".to_string()];
        let record = normalize_row(3, &headers, &["01/03/2024", " 101 "]);
        assert_eq!(record.line, 3);
        assert_eq!(record.get("FECHA"), Some("01/03/2024"));
        assert_eq!(record.get("DEPTO"), Some("101"));
        assert_eq!(record.get("TELF"), None);

        let record = normalize_row(4, &headers, &["a", "b", "c", "extra"]);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_lookup_bom_variants_agree() {
        let marked: PrimaryRecord = [("\u{feff}FECHA", "01/03/2024")].into_iter().collect();
        let bare: PrimaryRecord = [("FECHA", "01/03/2024")].into_iter().collect();
        assert_eq!(lookup(&marked, "FECHA"), Some("01/03/2024"));
        assert_eq!(lookup(&bare, "FECHA"), Some("01/03/2024"));
        assert_eq!(lookup(&bare, "\u{feff}FECHA"), Some("01/03/2024"));
    }

    #[test]
    fn test_lookup_absent_and_empty() {
        let record: PrimaryRecord = [("MULTA", "")].into_iter().collect();
        assert_eq!(lookup(&record, "MULTA"), Some(""));
        assert_eq!(lookup(&record, "TELF"), None);

        let record: PrimaryRecord = [("FECHA", ""), ("\u{feff}FECHA", "02/03/2024")]
            .into_iter()
            .collect();
        assert_eq!(lookup(&record, "FECHA"), Some("02/03/2024"));
    }
}
