//! Split oversized PDF pages into a grid of printable tiles.
//!
//! Every tile is cropped with an overlapping border and carries alignment
//! marks (corner crosses, scale bars and a label) so the printed sheets can be
//! trimmed and reassembled into the original page.
//!
//! The layout core ([`catalog`], [`layout`], [`marks`]) is pure geometry. The
//! [`tile`] module drives it over a `lopdf` document.

pub mod catalog;
mod constants;
pub mod layout;
pub mod marks;
mod options;
mod render;
mod stats;
pub mod tile;
mod types;

pub use catalog::{SheetFormat, format_names, lookup};
pub use constants::*;
pub use layout::{Cells, Point, Rect, Segment, TileGeometry, TilePlan, cells, plan};
pub use marks::{Cross, Label, OverlayMarks, compose_marks, overlay_operations};
pub use options::TileOptions;
pub use stats::{PageTiling, TilingStatistics, calculate_statistics};
pub use tile::{load_pdf, save_pdf, source_pages, tile, tile_document};
pub use types::*;
