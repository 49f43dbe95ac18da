//! Plain-text receipts.
//!
//! Tables are drawn with comfy-table and never carry ANSI styling, so the
//! files read the same in any viewer. Emphasis on header and footer rows is
//! kept as bold attributes, which only show up when styling is enforced.

use std::fmt::Write as _;

use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, Row, Table, Width,
};
use recibos_model::{
    Alignment, Block, DocumentRenderer, Grid, KeyValueTable, ReceiptDocument, Result,
    RowEmphasis, Shade, TableStyle,
};
use tracing::debug;

/// Points per character cell when converting column widths.
const POINTS_PER_CHAR: u32 = 8;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    styled: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit ANSI styling for emphasized rows. Meant for terminal previews.
    #[must_use]
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    fn render_text(&self, document: &ReceiptDocument) -> String {
        let mut out = String::new();
        for block in &document.blocks {
            match block {
                Block::Heading { text } => {
                    let _ = writeln!(out, "{text}");
                    let _ = writeln!(out, "{}", "=".repeat(text.chars().count()));
                }
                Block::KeyValue(table) => {
                    let _ = writeln!(out, "{}", self.key_value_table(table));
                }
                Block::Spacer { height } => {
                    let lines = (height / 12).max(1);
                    for _ in 0..lines {
                        out.push('\n');
                    }
                }
                Block::Grid(grid) => {
                    let _ = writeln!(out, "{}", self.grid_table(grid));
                }
            }
        }
        out
    }

    fn key_value_table(&self, table: &KeyValueTable) -> String {
        let mut out = self.base_table(&table.style);
        for row in &table.rows {
            out.add_row(vec![Cell::new(&row.label), Cell::new(&row.value)]);
        }
        apply_column_style(&mut out, &table.style);
        out.to_string()
    }

    fn grid_table(&self, grid: &Grid) -> String {
        let mut table = self.base_table(&grid.style);
        table.set_header(emphasized_row(&grid.header, grid.style.header));
        for row in &grid.rows {
            table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
        }
        if let Some(footer) = &grid.footer {
            table.add_row(emphasized_row(footer, grid.style.footer));
        }
        apply_column_style(&mut table, &grid.style);
        table.to_string()
    }

    fn base_table(&self, style: &TableStyle) -> Table {
        let mut table = Table::new();
        table.load_preset(if style.grid_lines { UTF8_FULL } else { NOTHING });
        if self.styled {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        table
    }
}

impl DocumentRenderer for TextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, document: &ReceiptDocument) -> Result<Vec<u8>> {
        let text = self.render_text(document);
        debug!(title = %document.title, bytes = text.len(), "rendered text receipt");
        Ok(text.into_bytes())
    }
}

fn emphasized_row(cells: &[String], emphasis: RowEmphasis) -> Row {
    cells
        .iter()
        .map(|value| {
            let mut cell = Cell::new(value);
            if emphasis.bold {
                cell = cell.add_attribute(Attribute::Bold);
            }
            if let Some(shade) = emphasis.background {
                cell = cell.bg(shade_color(shade));
            }
            cell
        })
        .collect::<Vec<_>>()
        .into()
}

fn apply_column_style(table: &mut Table, style: &TableStyle) {
    let alignment = cell_alignment(style.alignment);
    for (index, points) in style.column_widths.iter().enumerate() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(alignment);
            let chars = u16::try_from(points / POINTS_PER_CHAR).unwrap_or(u16::MAX);
            column.set_constraint(ColumnConstraint::LowerBoundary(Width::Fixed(chars)));
        }
    }
}

fn cell_alignment(alignment: Alignment) -> CellAlignment {
    match alignment {
        Alignment::Left => CellAlignment::Left,
        Alignment::Center => CellAlignment::Center,
        Alignment::Right => CellAlignment::Right,
    }
}

fn shade_color(shade: Shade) -> Color {
    match shade {
        Shade::Grey => Color::Grey,
        Shade::LightGrey => Color::White,
    }
}
