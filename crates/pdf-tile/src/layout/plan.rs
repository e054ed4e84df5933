//! Orientation and grid size selection
//!
//! Two candidates are compared: the sheet as listed in the catalog and the
//! same sheet with its axes swapped. The swapped sheet only wins when it needs
//! strictly fewer tiles.

use crate::catalog::SheetFormat;
use crate::constants::MAX_TILES_PER_PAGE;
use crate::types::{Result, SourcePage, TileError, validate_border};

use super::TilePlan;

/// Choose the orientation and grid dimensions for one source page.
///
/// # Errors
/// * `Config` if `border` is below the minimum
/// * `InvalidPage` if the page size is not finite and positive
/// * `DegenerateGeometry` if either sheet side is not larger than `2 * border`
/// * `TooManyTiles` if the page needs more than [`MAX_TILES_PER_PAGE`] tiles
pub fn plan(page: SourcePage, format: &SheetFormat, border: f32) -> Result<TilePlan> {
    validate_border(border)?;

    if !page.is_valid() {
        return Err(TileError::InvalidPage {
            width: page.width,
            height: page.height,
        });
    }

    // Swapping only exchanges the two sides, so checking both covers either orientation
    let overlap = 2.0 * border;
    if format.width <= overlap || format.height <= overlap {
        return Err(TileError::DegenerateGeometry {
            width: format.width,
            height: format.height,
            border,
        });
    }

    let portrait = GridCandidate::fit(page, format.width, format.height, border);
    let landscape = GridCandidate::fit(page, format.height, format.width, border);

    // A grid too large to count loses against any countable one
    let orientation_swapped = match (portrait.total(), landscape.total()) {
        (Some(p), Some(l)) => p > l,
        (None, Some(_)) => true,
        _ => false,
    };
    let chosen = if orientation_swapped {
        landscape
    } else {
        portrait
    };

    let (num_cols, num_rows) = match (chosen.cols, chosen.rows, chosen.total()) {
        (Some(cols), Some(rows), Some(total)) if total <= MAX_TILES_PER_PAGE => (cols, rows),
        _ => {
            return Err(TileError::TooManyTiles {
                width: page.width,
                height: page.height,
                limit: MAX_TILES_PER_PAGE,
            });
        }
    };

    Ok(TilePlan {
        orientation_swapped,
        num_cols,
        num_rows,
        eff_format_width: chosen.sheet_width,
        eff_format_height: chosen.sheet_height,
    })
}

/// Grid needed to cover a page with sheets of one orientation
#[derive(Debug, Clone, Copy)]
struct GridCandidate {
    cols: Option<usize>,
    rows: Option<usize>,
    sheet_width: f32,
    sheet_height: f32,
}

impl GridCandidate {
    fn fit(page: SourcePage, sheet_width: f32, sheet_height: f32, border: f32) -> Self {
        let overlap = 2.0 * border;
        Self {
            cols: tiles_along(page.width + overlap, sheet_width),
            rows: tiles_along(page.height + overlap, sheet_height),
            sheet_width,
            sheet_height,
        }
    }

    fn total(&self) -> Option<usize> {
        self.cols?.checked_mul(self.rows?)
    }
}

/// Sheets needed along one axis, `None` when the count does not fit a `usize`
fn tiles_along(span: f32, sheet: f32) -> Option<usize> {
    let count = f64::from((span / sheet).ceil());
    (count.is_finite() && count < usize::MAX as f64).then_some(count as usize)
}
