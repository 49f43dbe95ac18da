pub mod amount;
pub mod document;
pub mod error;
pub mod fields;
pub mod options;
pub mod processing;
pub mod record;
pub mod water;

pub use amount::Amount;
pub use document::{
    Alignment, Block, DocumentRenderer, Grid, KeyValueRow, KeyValueTable, LineItem, PageSetup,
    ReceiptDocument, RowEmphasis, Shade, TableStyle,
};
pub use error::{ModelError, Result};
pub use options::{
    BatchOptions, CollisionPolicy, DEFAULT_CURRENCY, DEFAULT_OUTPUT_DIR, DEFAULT_PRIMARY_FILE,
    DEFAULT_WATER_FILE, OutputFormat,
};
pub use processing::{BatchSummary, RowOutcome, RowStatus, WaterMatch};
pub use record::PrimaryRecord;
pub use water::WaterIndex;
