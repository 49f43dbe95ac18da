//! Billing files exported with a byte-order mark.

use std::io::Write;

use recibos_ingest::{lookup, open_primary, try_load_water_index};
use recibos_model::fields::{DEPTO, FECHA, REQUIRED_COLUMNS};
use tempfile::NamedTempFile;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_bom_file_reads_like_plain_file() {
    let body = "FECHA;NOMBRE;DEPTO;TELF;EXPENSA;MULTA\n01/03/2024;Juan;101;555;50;\n";
    let plain = create_temp_csv(body);
    let bom = create_temp_csv(&format!("\u{feff}{body}"));

    let mut records = Vec::new();
    for file in [&plain, &bom] {
        let mut reader = open_primary(file.path()).unwrap();
        reader.require_columns(&REQUIRED_COLUMNS).unwrap();
        let headers = reader.headers().to_vec();
        let row = reader.rows().next().unwrap().unwrap();
        records.push(row.into_record(&headers));
    }

    for field in [FECHA, DEPTO] {
        assert_eq!(lookup(&records[0], field), lookup(&records[1], field));
    }
    assert_eq!(lookup(&records[1], FECHA), Some("01/03/2024"));
}

#[test]
fn test_ragged_rows_are_kept() {
    let file = create_temp_csv(
        "FECHA;NOMBRE;DEPTO;TELF;EXPENSA;MULTA\n\
         01/03/2024;Juan;101\n\
         01/03/2024;Ana;102;555;40;0;extra\n",
    );
    let mut reader = open_primary(file.path()).unwrap();
    let headers = reader.headers().to_vec();
    let records: Vec<_> = reader
        .rows()
        .map(|row| row.unwrap().into_record(&headers))
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].line, 2);
    assert_eq!(lookup(&records[0], "TELF"), None);
    assert_eq!(records[1].len(), 6);
}

#[test]
fn test_water_table_with_bom_and_padding() {
    let file = create_temp_csv("\u{feff}Depto , Monto\n 101 , 10.00 \n102,8.5\n");

    let index = try_load_water_index(file.path()).unwrap();

    assert_eq!(index.get("101"), Some("10.00"));
    assert_eq!(index.get("102"), Some("8.5"));
}
