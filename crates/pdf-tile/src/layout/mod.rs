//! Layout calculation modules for tiling
//!
//! This module handles all the geometric calculations:
//! - Orientation and grid size selection for a source page
//! - Crop rectangles of the individual tiles

mod cells;
mod plan;
mod types;

pub use cells::*;
pub use plan::*;
pub use types::*;
