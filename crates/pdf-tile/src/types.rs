use thiserror::Error;

use crate::constants::MIN_BORDER;

#[derive(Error, Debug)]
pub enum TileError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Unknown sheet format: {0}")]
    UnknownFormat(String),
    #[error(
        "Degenerate geometry: a {width}x{height} sheet leaves no printable area inside a {border}pt border (each side must exceed twice the border)"
    )]
    DegenerateGeometry { width: f32, height: f32, border: f32 },
    #[error("Invalid source page size: {width}x{height}")]
    InvalidPage { width: f32, height: f32 },
    #[error("Source page {width}x{height} needs more than {limit} tiles")]
    TooManyTiles { width: f32, height: f32, limit: usize },
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to tile")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, TileError>;

/// Size of one page of the input document, in points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourcePage {
    pub width: f32,
    pub height: f32,
}

impl SourcePage {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and strictly positive
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Reject borders below [`MIN_BORDER`].
///
/// NaN is rejected as well.
pub fn validate_border(border: f32) -> Result<()> {
    if border >= MIN_BORDER {
        Ok(())
    } else {
        Err(TileError::Config(format!(
            "minimum border is {} points (got {})",
            MIN_BORDER, border
        )))
    }
}
