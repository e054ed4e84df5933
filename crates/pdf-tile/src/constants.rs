//! Shared constants for tiling
//!
//! All lengths are in PDF points (1/72 inch).

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Borders
// =============================================================================

/// Smallest border accepted on every tile edge
pub const MIN_BORDER: f32 = 25.0;

/// Border used when none is configured
pub const DEFAULT_BORDER: f32 = MIN_BORDER;

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Page size assumed when a page has no MediaBox anywhere in its tree (US Letter)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (612.0, 792.0);

/// Most tiles a single source page may be split into
pub const MAX_TILES_PER_PAGE: usize = 10_000;

// =============================================================================
// Overlay Marks
// =============================================================================

/// Length of both scale bars (238pt ≈ 84mm)
pub const SCALE_BAR_LENGTH: f32 = 238.0;

/// Distance between the label baseline and the horizontal scale bar
pub const SCALE_BAR_DROP: f32 = 3.0;

/// Half-length of each arm of a corner cross
pub const CROSS_HALF_LENGTH: f32 = MIN_BORDER;

/// Stroke width for scale bars and corner crosses
pub const MARK_LINE_WIDTH: f32 = 0.5;

/// Font size of the tile label
pub const LABEL_FONT_SIZE: f32 = 12.0;
