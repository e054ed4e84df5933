//! Tile enumeration
//!
//! Cells are produced column by column, each column from the bottom row up.
//! Adjacent tiles overlap by twice the border so that, once the border is cut
//! off every sheet, the trimmed areas butt together exactly.

use std::iter::FusedIterator;

use super::{TileGeometry, TilePlan};

/// Lazy, restartable sequence of tile rectangles for one plan.
///
/// Calling [`cells`] again starts over from the first tile; cloning the
/// iterator resumes from the clone's current position.
#[derive(Debug, Clone)]
pub struct Cells {
    plan: TilePlan,
    border: f32,
    next: usize,
}

/// Enumerate every tile of `plan`, column outer, row inner.
pub fn cells(plan: &TilePlan, border: f32) -> Cells {
    Cells {
        plan: *plan,
        border,
        next: 0,
    }
}

impl TileGeometry {
    /// Crop rectangle of the tile at (`col`, `row`).
    ///
    /// Tile 0 starts `2 * border` before the page origin, so the page's own
    /// edge lands on the trim line of the first tile.
    pub fn at(plan: &TilePlan, border: f32, col: usize, row: usize) -> Self {
        let overlap = 2.0 * border;
        let base_x = col as f32 * plan.step_x(border) - overlap;
        let base_y = row as f32 * plan.step_y(border) - overlap;

        TileGeometry {
            col,
            row,
            base_x,
            base_y,
            end_x: base_x + plan.eff_format_width,
            end_y: base_y + plan.eff_format_height,
        }
    }
}

impl Iterator for Cells {
    type Item = TileGeometry;

    fn next(&mut self) -> Option<TileGeometry> {
        if self.next >= self.plan.tile_count() {
            return None;
        }

        let col = self.next / self.plan.num_rows;
        let row = self.next % self.plan.num_rows;
        self.next += 1;

        Some(TileGeometry::at(&self.plan, self.border, col, row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.plan.tile_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells {}

impl FusedIterator for Cells {}
