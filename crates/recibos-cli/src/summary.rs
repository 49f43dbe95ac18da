use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use recibos_model::{BatchSummary, RowOutcome, RowStatus, WaterMatch};

pub fn print_summary(summary: &BatchSummary) {
    println!("Billing file: {}", summary.primary.display());
    println!("Output: {}", summary.output_dir.display());
    println!("Water entries: {}", summary.water_entries);
    println!("{}", summary_table(summary));
    if summary.has_failures() {
        println!();
        println!("{}", failure_table(summary));
    }
}

/// One row per billing line, followed by a totals row.
pub fn summary_table(summary: &BatchSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Unit"),
        header_cell("Status"),
        header_cell("Water"),
        header_cell("Total"),
        header_cell("Receipt"),
    ]);
    apply_summary_table_style(&mut table);
    for outcome in &summary.rows {
        table.add_row(outcome_row(outcome));
    }
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(format!("{} rows", summary.attempted())),
        Cell::new(format!(
            "{} written / {} failed",
            summary.written_count(),
            summary.failed_count()
        ))
        .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} matched / {} defaulted",
            summary.matched_count(),
            summary.defaulted_count()
        )),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    table
}

/// Reason and raw content for each failed row.
pub fn failure_table(summary: &BatchSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Unit"),
        header_cell("Reason"),
        header_cell("Row"),
    ]);
    apply_failure_table_style(&mut table);
    for outcome in summary.failures() {
        if let RowStatus::Failed { reason, raw } = &outcome.status {
            table.add_row(vec![
                Cell::new(outcome.line),
                unit_cell(outcome),
                Cell::new(reason).fg(Color::Red),
                dim_cell(raw),
            ]);
        }
    }
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

fn outcome_row(outcome: &RowOutcome) -> Vec<Cell> {
    match &outcome.status {
        RowStatus::Written { path, water, total } => vec![
            Cell::new(outcome.line),
            unit_cell(outcome),
            Cell::new("written").fg(Color::Green),
            water_cell(*water),
            Cell::new(total),
            Cell::new(path.display()),
        ],
        RowStatus::Failed { .. } => vec![
            Cell::new(outcome.line),
            unit_cell(outcome),
            Cell::new("failed")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
        ],
    }
}

fn unit_cell(outcome: &RowOutcome) -> Cell {
    match &outcome.unit_id {
        Some(unit) => Cell::new(unit).fg(Color::Blue).add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn water_cell(water: WaterMatch) -> Cell {
    match water {
        WaterMatch::Matched => Cell::new("matched"),
        WaterMatch::Defaulted => Cell::new("defaulted").fg(Color::Yellow),
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ColumnConstraint::UpperBoundary(Width::Fixed(12)),
        ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ColumnConstraint::LowerBoundary(Width::Fixed(9)),
        ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ColumnConstraint::UpperBoundary(Width::Percentage(50)),
    ]);
}

fn apply_failure_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ColumnConstraint::UpperBoundary(Width::Fixed(12)),
        ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ColumnConstraint::UpperBoundary(Width::Percentage(45)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
