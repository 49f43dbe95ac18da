use anyhow::{Context, Result};
use recibos_model::{BatchOptions, BatchSummary};
use recibos_output::renderer_for;
use tracing::info;

use crate::cli::Cli;

pub fn run_receipts(cli: &Cli) -> Result<BatchSummary> {
    let options = batch_options(cli);
    let renderer = renderer_for(cli.format.into());
    info!(
        primary = %cli.primary.display(),
        water = %options.water_path.display(),
        output_dir = %options.output_dir.display(),
        format = renderer.extension(),
        "starting receipt batch"
    );
    recibos_core::run(&cli.primary, &options, &*renderer)
        .with_context(|| format!("generate receipts from {}", cli.primary.display()))
}

fn batch_options(cli: &Cli) -> BatchOptions {
    BatchOptions::new()
        .with_output_dir(&cli.output_dir)
        .with_water_path(&cli.water)
        .with_collision(cli.on_collision.into())
        .with_currency(&cli.currency)
        .with_redact_rows(cli.redact_rows)
}
