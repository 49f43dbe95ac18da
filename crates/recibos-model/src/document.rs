//! Receipt documents as an ordered list of layout blocks.
//!
//! A document carries no rendering decisions beyond what the blocks say:
//! renderers turn it into bytes (plain text, JSON, or a paginated format).

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::Result;

/// Page geometry in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSetup {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl PageSetup {
    /// US letter with one-inch margins.
    pub const fn letter() -> Self {
        Self {
            width: 612,
            height: 792,
            margin: 72,
        }
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::letter()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shade {
    Grey,
    LightGrey,
}

/// Emphasis applied to a header or footer row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowEmphasis {
    pub bold: bool,
    pub background: Option<Shade>,
}

impl RowEmphasis {
    pub const fn plain() -> Self {
        Self {
            bold: false,
            background: None,
        }
    }

    pub const fn bold_on(shade: Shade) -> Self {
        Self {
            bold: true,
            background: Some(shade),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStyle {
    /// Column widths in points; renderers may scale them.
    pub column_widths: Vec<u32>,
    pub font_size: u32,
    pub alignment: Alignment,
    pub grid_lines: bool,
    pub header: RowEmphasis,
    pub footer: RowEmphasis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueTable {
    pub rows: Vec<KeyValueRow>,
    pub style: TableStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub footer: Option<Vec<String>>,
    pub style: TableStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { text: String },
    KeyValue(KeyValueTable),
    Spacer { height: u32 },
    Grid(Grid),
}

/// One labeled charge on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: Amount,
}

impl LineItem {
    pub fn new(label: impl Into<String>, amount: Amount) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptDocument {
    pub title: String,
    pub page: PageSetup,
    pub blocks: Vec<Block>,
}

impl ReceiptDocument {
    pub fn heading(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Heading { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn key_values(&self) -> impl Iterator<Item = &KeyValueTable> {
        self.blocks.iter().filter_map(|block| match block {
            Block::KeyValue(table) => Some(table),
            _ => None,
        })
    }

    pub fn grids(&self) -> impl Iterator<Item = &Grid> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Grid(grid) => Some(grid),
            _ => None,
        })
    }
}

/// Turns a receipt into file contents.
pub trait DocumentRenderer {
    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, document: &ReceiptDocument) -> Result<Vec<u8>>;
}
