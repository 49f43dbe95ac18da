//! CLI library components for the receipt generator.

pub mod exit;
pub mod logging;
pub mod summary;
