//! Receipt document assembly.
//!
//! Block order is fixed: heading, identity table, spacer, payment grid. The
//! identity table always has its four labels, with an empty value when the
//! field is absent or blank. The payment grid lists a concept only when its raw value is non-blank and
//! always ends with a single total row.

use recibos_ingest::lookup;
use recibos_model::fields::{AGUA, DEPTO, EXPENSA, FECHA, MULTA, NOMBRE, TELF};
use recibos_model::{
    Alignment, Amount, Block, DEFAULT_CURRENCY, Grid, KeyValueRow, KeyValueTable, LineItem,
    PageSetup, PrimaryRecord, ReceiptDocument, RowEmphasis, Shade, TableStyle,
};

use crate::error::RowError;
use crate::totals::{TOTAL_FIELDS, parse_amount, total};

/// Payment concepts as (column, label), in display order.
pub const CONCEPTS: [(&str, &str); 3] = [(EXPENSA, "Expensa"), (AGUA, "Agua"), (MULTA, "Multa")];

const IDENTITY: [(&str, &str); 4] = [
    (FECHA, "Fecha:"),
    (DEPTO, "Departamento:"),
    (NOMBRE, "Propietario:"),
    (TELF, "Teléfono:"),
];

const PAYMENT_HEADER: [&str; 2] = ["Concepto", "Monto"];
const TOTAL_LABEL: &str = "Total";
const SPACER_HEIGHT: u32 = 20;
const FONT_SIZE: u32 = 12;

pub fn build(record: &PrimaryRecord) -> Result<ReceiptDocument, RowError> {
    build_with_currency(record, DEFAULT_CURRENCY)
}

pub fn build_with_currency(
    record: &PrimaryRecord,
    currency: &str,
) -> Result<ReceiptDocument, RowError> {
    let unit = non_blank(record, DEPTO).ok_or(RowError::MissingUnitId)?;
    let title = format!("Recibo de Pago - Departamento {unit}");

    let identity = IDENTITY
        .iter()
        .map(|(field, label)| KeyValueRow {
            label: (*label).to_string(),
            value: non_blank(record, field).unwrap_or_default().to_string(),
        })
        .collect();

    let items = line_items(record)?;
    let grand_total = total(record, &TOTAL_FIELDS)?;
    let rows = items
        .iter()
        .map(|item| vec![item.label.clone(), item.amount.display_with(currency)])
        .collect();

    Ok(ReceiptDocument {
        title: title.clone(),
        page: PageSetup::letter(),
        blocks: vec![
            Block::Heading { text: title },
            Block::KeyValue(KeyValueTable {
                rows: identity,
                style: identity_style(),
            }),
            Block::Spacer {
                height: SPACER_HEIGHT,
            },
            Block::Grid(Grid {
                header: PAYMENT_HEADER.iter().map(|h| (*h).to_string()).collect(),
                rows,
                footer: Some(vec![
                    TOTAL_LABEL.to_string(),
                    grand_total.display_with(currency),
                ]),
                style: payment_style(),
            }),
        ],
    })
}

/// Payment lines for the non-blank concepts.
///
/// A non-blank value that is not a number fails the row, unlike the total
/// which skips it.
pub fn line_items(record: &PrimaryRecord) -> Result<Vec<LineItem>, RowError> {
    let mut items = Vec::with_capacity(CONCEPTS.len());
    for (field, label) in CONCEPTS {
        let Some(raw) = non_blank(record, field) else {
            continue;
        };
        let value = parse_amount(raw).ok_or_else(|| RowError::InvalidAmount {
            field: field.to_string(),
            value: raw.to_string(),
        })?;
        items.push(LineItem::new(label, Amount::new(value)));
    }
    Ok(items)
}

fn non_blank<'a>(record: &'a PrimaryRecord, field: &str) -> Option<&'a str> {
    lookup(record, field).filter(|value| !value.trim().is_empty())
}

fn identity_style() -> TableStyle {
    TableStyle {
        column_widths: vec![100, 300],
        font_size: FONT_SIZE,
        alignment: Alignment::Left,
        grid_lines: false,
        header: RowEmphasis::plain(),
        footer: RowEmphasis::plain(),
    }
}

fn payment_style() -> TableStyle {
    TableStyle {
        column_widths: vec![200, 200],
        font_size: FONT_SIZE,
        alignment: Alignment::Center,
        grid_lines: true,
        header: RowEmphasis::bold_on(Shade::Grey),
        footer: RowEmphasis::bold_on(Shade::LightGrey),
    }
}
