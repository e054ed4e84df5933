//! Sheet formats that tiles can be printed on
//!
//! Sizes are stored in points exactly as printers report them. Names are
//! case-sensitive and the table is kept sorted by name so it can be offered
//! directly as a choice list.

use crate::types::{Result, TileError};

/// A printable sheet size in points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SheetFormat {
    pub name: &'static str,
    pub width: f32,
    pub height: f32,
}

impl SheetFormat {
    const fn new(name: &'static str, width: f32, height: f32) -> Self {
        Self {
            name,
            width,
            height,
        }
    }

    /// (width, height) in points
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// All known formats, sorted by name
pub static FORMATS: &[SheetFormat] = &[
    SheetFormat::new("10x14", 720.0, 1008.0),
    SheetFormat::new("A0", 2384.0, 3371.0),
    SheetFormat::new("A1", 1685.0, 2384.0),
    SheetFormat::new("A2", 1190.0, 1684.0),
    SheetFormat::new("A3", 842.0, 1190.0),
    SheetFormat::new("A4", 595.0, 842.0),
    SheetFormat::new("A4Small", 595.0, 842.0),
    SheetFormat::new("A5", 420.0, 595.0),
    SheetFormat::new("B4", 729.0, 1032.0),
    SheetFormat::new("B5", 516.0, 729.0),
    SheetFormat::new("Executive", 540.0, 720.0),
    SheetFormat::new("Folio", 612.0, 936.0),
    SheetFormat::new("Ledger", 1224.0, 792.0),
    SheetFormat::new("Legal", 612.0, 1008.0),
    SheetFormat::new("Letter", 612.0, 792.0),
    SheetFormat::new("LetterSmall", 612.0, 792.0),
    SheetFormat::new("Quarto", 610.0, 780.0),
    SheetFormat::new("Tabloid", 792.0, 1224.0),
];

/// Find a sheet format by its exact name
pub fn lookup(name: &str) -> Result<SheetFormat> {
    FORMATS
        .iter()
        .find(|format| format.name == name)
        .copied()
        .ok_or_else(|| TileError::UnknownFormat(name.to_string()))
}

/// Names of all known formats in sorted order
pub fn format_names() -> impl Iterator<Item = &'static str> {
    FORMATS.iter().map(|format| format.name)
}
