//! Water charge table loader.

use std::path::Path;

use csv::ReaderBuilder;
use recibos_model::WaterIndex;
use recibos_model::fields::{WATER_AMOUNT, WATER_UNIT};
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};
use crate::normalize::{normalize_header, normalize_value};

/// Loads the water index, falling back to an empty index on any failure.
///
/// A missing or malformed water table must not stop the batch: every unit
/// then gets the default charge.
pub fn load_water_index(path: &Path) -> WaterIndex {
    match try_load_water_index(path) {
        Ok(index) => {
            info!(path = %path.display(), entries = index.len(), "water charges loaded");
            index
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "water charges unavailable, using defaults");
            WaterIndex::new()
        }
    }
}

/// Reads `Depto`/`Monto` pairs. Later rows for the same unit win.
pub fn try_load_water_index(path: &Path) -> Result<WaterIndex> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::csv(path, e))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::csv(path, e))?
        .iter()
        .map(normalize_header)
        .collect();
    let position = |name: &str| headers.iter().position(|header| header == name);
    let (unit_idx, amount_idx) = match (position(WATER_UNIT), position(WATER_AMOUNT)) {
        (Some(unit), Some(amount)) => (unit, amount),
        (unit, amount) => {
            let missing = [(WATER_UNIT, unit), (WATER_AMOUNT, amount)]
                .into_iter()
                .filter(|(_, idx)| idx.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
            return Err(IngestError::MissingColumns {
                path: path.to_path_buf(),
                missing,
            });
        }
    };

    let mut index = WaterIndex::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::csv(path, e))?;
        let unit = normalize_value(record.get(unit_idx).unwrap_or(""));
        if unit.is_empty() {
            debug!(
                line = record.position().map_or(0, csv::Position::line),
                "water row without unit skipped"
            );
            continue;
        }
        let amount = normalize_value(record.get(amount_idx).unwrap_or(""));
        if let Some(previous) = index.insert(unit.clone(), amount) {
            debug!(unit = %unit, previous = %previous, "duplicate water entry, keeping later value");
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_loads_pairs() {
        let file = create_temp_csv("Depto,Monto\n101,10.00\n102,7.25\n");
        let index = try_load_water_index(file.path()).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("101"), Some("10.00"));
        assert_eq!(index.get("102"), Some("7.25"));
    }

    #[test]
    fn test_tolerates_bom_and_extra_columns() {
        let file = create_temp_csv("\u{feff}Depto,Consumo,Monto\n101,12,10.00\n");
        let index = try_load_water_index(file.path()).unwrap();
        assert_eq!(index.get("101"), Some("10.00"));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let file = create_temp_csv("Depto,Monto\n101,10.00\n101,11.00\n");
        let index = try_load_water_index(file.path()).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("101"), Some("11.00"));
    }

    #[test]
    fn test_skips_rows_without_unit() {
        let file = create_temp_csv("Depto,Monto\n,5.00\n101\n");
        let index = try_load_water_index(file.path()).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("101"), Some(""));
    }

    #[test]
    fn test_missing_columns_reported() {
        let file = create_temp_csv("Unidad,Monto\n101,10.00\n");
        match try_load_water_index(file.path()) {
            Err(IngestError::MissingColumns { missing, .. }) => assert_eq!(missing, vec!["Depto"]),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_load_never_fails() {
        assert!(load_water_index(Path::new("/nonexistent/resultado_agua.csv")).is_empty());
        let file = create_temp_csv("Unidad,Valor\n101,10.00\n");
        assert!(load_water_index(file.path()).is_empty());
    }
}
