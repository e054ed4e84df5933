//! Layout data types for tiling
//!
//! These types carry the result of the pure layout calculations to the
//! rendering side. Coordinates are in the source page's coordinate space.

/// A point in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A straight line from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }

    /// Midpoint of the segment
    pub fn center(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from two opposite corners, in any order
    pub fn from_corners(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let x = x1.min(x2);
        let y = y1.min(y2);
        Self::new(x, y, (x2 - x1).abs(), (y2 - y1).abs())
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// Grid chosen for one source page
///
/// `eff_format_width`/`eff_format_height` are the sheet dimensions after the
/// orientation decision; they are the catalog values swapped when
/// `orientation_swapped` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePlan {
    pub orientation_swapped: bool,
    pub num_cols: usize,
    pub num_rows: usize,
    pub eff_format_width: f32,
    pub eff_format_height: f32,
}

impl TilePlan {
    /// Number of tiles (output pages) for this source page
    pub fn tile_count(&self) -> usize {
        self.num_cols * self.num_rows
    }

    /// Horizontal distance between the origins of adjacent tiles
    pub fn step_x(&self, border: f32) -> f32 {
        self.eff_format_width - 2.0 * border
    }

    /// Vertical distance between the origins of adjacent tiles
    pub fn step_y(&self, border: f32) -> f32 {
        self.eff_format_height - 2.0 * border
    }

    /// True when the effective sheet is wider than tall
    pub fn is_landscape(&self) -> bool {
        self.eff_format_width > self.eff_format_height
    }
}

/// Crop rectangle of a single tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGeometry {
    pub col: usize,
    pub row: usize,
    pub base_x: f32,
    pub base_y: f32,
    pub end_x: f32,
    pub end_y: f32,
}

impl TileGeometry {
    /// The full sheet area, border included
    pub fn crop_rect(&self) -> Rect {
        Rect::from_corners(self.base_x, self.base_y, self.end_x, self.end_y)
    }

    /// The area left after cutting `border` off every edge
    pub fn trimmed_rect(&self, border: f32) -> Rect {
        Rect::from_corners(
            self.base_x + border,
            self.base_y + border,
            self.end_x - border,
            self.end_y - border,
        )
    }
}
