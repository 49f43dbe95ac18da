//! Billing table reader.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ByteRecord, Reader, ReaderBuilder};
use recibos_model::PrimaryRecord;

use crate::error::{IngestError, Result};
use crate::normalize::{normalize_header, normalize_row};

const DELIMITER: u8 = b';';

/// Open billing table with its header already parsed and normalized.
pub struct PrimaryReader {
    path: PathBuf,
    headers: Vec<String>,
    reader: Reader<File>,
}

/// A data row decoded as UTF-8, not yet normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub line: u64,
    pub values: Vec<String>,
}

impl RawRow {
    /// Fields joined with the table delimiter, for diagnostics.
    pub fn raw(&self) -> String {
        self.values.join(";")
    }

    pub fn into_record(self, headers: &[String]) -> PrimaryRecord {
        normalize_row(self.line, headers, &self.values)
    }
}

/// A row that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    pub line: u64,
    pub raw: String,
    pub message: String,
}

/// Opens a billing table and reads its header row.
pub fn open_primary(path: &Path) -> Result<PrimaryReader> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
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
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyHeader {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!(path = %path.display(), columns = ?headers, "billing header read");
    Ok(PrimaryReader {
        path: path.to_path_buf(),
        headers,
        reader,
    })
}

impl PrimaryReader {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Normalized header names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Required columns absent from the header, in `required` order.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| !self.headers.iter().any(|header| header == *name))
            .map(|name| (*name).to_string())
            .collect()
    }

    /// Checks column existence only; blank values on a row are still allowed.
    pub fn require_columns(&self, required: &[&str]) -> Result<()> {
        let missing = self.missing_columns(required);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(IngestError::MissingColumns {
                path: self.path.clone(),
                missing,
            })
        }
    }

    pub fn rows(&mut self) -> PrimaryRows<'_> {
        PrimaryRows {
            reader: &mut self.reader,
            record: ByteRecord::new(),
            done: false,
        }
    }
}

/// Iterator over data rows in file order.
///
/// Undecodable rows are yielded as [`DecodeFailure`] and iteration goes on.
/// An I/O error ends the iteration after being yielded once.
pub struct PrimaryRows<'a> {
    reader: &'a mut Reader<File>,
    record: ByteRecord,
    done: bool,
}

impl Iterator for PrimaryRows<'_> {
    type Item = std::result::Result<RawRow, DecodeFailure>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.reader.read_byte_record(&mut self.record) {
                Ok(false) => self.done = true,
                Ok(true) => {
                    if is_blank(&self.record) {
                        continue;
                    }
                    let line = self.record.position().map_or(0, csv::Position::line);
                    return Some(decode(line, &self.record));
                }
                Err(error) => {
                    let line = error.position().map_or(0, csv::Position::line);
                    if error.is_io_error() {
                        self.done = true;
                    }
                    return Some(Err(DecodeFailure {
                        line,
                        raw: String::new(),
                        message: error.to_string(),
                    }));
                }
            }
        }
        None
    }
}

fn is_blank(record: &ByteRecord) -> bool {
    record
        .iter()
        .all(|field| field.iter().all(u8::is_ascii_whitespace))
}

fn decode(line: u64, record: &ByteRecord) -> std::result::Result<RawRow, DecodeFailure> {
    let mut values = Vec::with_capacity(record.len());
    for field in record {
        match std::str::from_utf8(field) {
            Ok(value) => values.push(value.to_string()),
            Err(error) => {
                let raw = record
                    .iter()
                    .map(String::from_utf8_lossy)
                    .collect::<Vec<_>>()
                    .join(";");
                return Err(DecodeFailure {
                    line,
                    raw,
                    message: format!("invalid UTF-8: {error}"),
                });
            }
        }
    }
    Ok(RawRow { line, values })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_headers_are_normalized() {
        let file = create_temp_csv("\u{feff}FECHA; NOMBRE ;DEPTO\n".as_bytes());
        let reader = open_primary(file.path()).unwrap();
        assert_eq!(reader.headers(), ["FECHA", "NOMBRE", "DEPTO"]);
    }

    #[test]
    fn test_missing_columns_in_required_order() {
        let file = create_temp_csv(b"DEPTO;FECHA\n");
        let reader = open_primary(file.path()).unwrap();
        assert_eq!(
            reader.missing_columns(&["FECHA", "NOMBRE", "DEPTO", "TELF"]),
            vec!["NOMBRE", "TELF"]
        );
        assert!(matches!(
            reader.require_columns(&["TELF"]),
            Err(IngestError::MissingColumns { .. })
        ));
        assert!(reader.require_columns(&["DEPTO", "FECHA"]).is_ok());
    }

    #[test]
    fn test_empty_file_has_no_header() {
        let file = create_temp_csv(b"");
        assert!(matches!(
            open_primary(file.path()),
            Err(IngestError::EmptyHeader { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = open_primary(Path::new("/nonexistent/apartamentos.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_rows_keep_going_after_bad_utf8() {
        let mut content = b"DEPTO;NOMBRE\n101;Juan\n102;".to_vec();
        content.extend_from_slice(&[0xff, 0xfe, b'\n']);
        content.extend_from_slice(b"103;Ana\n");
        let file = create_temp_csv(&content);
        let mut reader = open_primary(file.path()).unwrap();
        let rows: Vec<_> = reader.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].as_ref().unwrap().values, vec!["101", "Juan"]);
        assert_eq!(rows[0].as_ref().unwrap().line, 2);
        let failure = rows[1].as_ref().unwrap_err();
        assert_eq!(failure.line, 3);
        assert!(failure.raw.starts_with("102;"));
        assert_eq!(rows[2].as_ref().unwrap().values, vec!["103", "Ana"]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let file = create_temp_csv(b"DEPTO;NOMBRE\n101;Juan\n \n102;Ana\n");
        let mut reader = open_primary(file.path()).unwrap();
        let rows: Vec<RawRow> = reader.rows().map(|row| row.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].values, vec!["102", "Ana"]);
    }

    #[test]
    fn test_into_record() {
        let file = create_temp_csv("\u{feff}DEPTO;NOMBRE\n 101 ;Juan\n".as_bytes());
        let mut reader = open_primary(file.path()).unwrap();
        let headers = reader.headers().to_vec();
        let row = reader.rows().next().unwrap().unwrap();
        assert_eq!(row.raw(), " 101 ;Juan");
        let record = row.into_record(&headers);
        assert_eq!(record.get("DEPTO"), Some("101"));
        assert_eq!(record.get("NOMBRE"), Some("Juan"));
    }
}
