//! CLI argument definitions for the receipt generator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use recibos_model::{
    CollisionPolicy, DEFAULT_CURRENCY, DEFAULT_OUTPUT_DIR, DEFAULT_PRIMARY_FILE,
    DEFAULT_WATER_FILE, OutputFormat,
};

#[derive(Parser)]
#[command(
    name = "recibos",
    version,
    about = "Generate one payment receipt per apartment from a billing table",
    long_about = "Generate one payment receipt per apartment from a billing table.\n\n\
                  Reads a semicolon-separated billing file, joins each row with the\n\
                  water charge table by unit id, and writes one receipt per row."
)]
pub struct Cli {
    /// Billing table (semicolon-separated, header required).
    #[arg(value_name = "PRIMARY_CSV", default_value = DEFAULT_PRIMARY_FILE)]
    pub primary: PathBuf,

    /// Water charge table (comma-separated, columns Depto and Monto).
    #[arg(long = "water", value_name = "PATH", default_value = DEFAULT_WATER_FILE)]
    pub water: PathBuf,

    /// Directory receipts are written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Receipt file format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: FormatArg,

    /// What to do when two rows map to the same receipt file.
    #[arg(long = "on-collision", value_enum, default_value = "overwrite")]
    pub on_collision: CollisionArg,

    /// Currency symbol printed before every amount.
    #[arg(long = "currency", value_name = "SYMBOL", default_value = DEFAULT_CURRENCY)]
    pub currency: String,

    /// Replace raw row content with a placeholder in logs and the summary.
    #[arg(long = "redact-rows")]
    pub redact_rows: bool,

    /// Adjust log verbosity (-v for debug, -q for warnings, -qq for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CollisionArg {
    Overwrite,
    Suffix,
    Fail,
}

impl From<CollisionArg> for CollisionPolicy {
    fn from(value: CollisionArg) -> Self {
        match value {
            CollisionArg::Overwrite => CollisionPolicy::Overwrite,
            CollisionArg::Suffix => CollisionPolicy::Suffix,
            CollisionArg::Fail => CollisionPolicy::Fail,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
