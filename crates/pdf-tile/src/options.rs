use crate::catalog::{SheetFormat, lookup};
use crate::constants::DEFAULT_BORDER;
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tiling configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TileOptions {
    pub input: PathBuf,
    pub output: PathBuf,

    /// Sheet format name, see [`crate::format_names`]
    pub format: String,

    /// Border on every tile edge, in points
    pub border: f32,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::new(),
            format: "A4".to_string(),
            border: DEFAULT_BORDER,
        }
    }
}

impl TileOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| TileError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| TileError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// The configured sheet format
    pub fn sheet_format(&self) -> Result<SheetFormat> {
        lookup(&self.format)
    }

    /// Validate the options.
    ///
    /// The border is checked first, then the format name, then that the sheet
    /// is larger than the overlap. None of this touches the input document, so
    /// it can run before anything is loaded.
    pub fn validate(&self) -> Result<()> {
        validate_border(self.border)?;

        let format = self.sheet_format()?;
        let overlap = 2.0 * self.border;
        if format.width <= overlap || format.height <= overlap {
            return Err(TileError::DegenerateGeometry {
                width: format.width,
                height: format.height,
                border: self.border,
            });
        }

        Ok(())
    }
}
