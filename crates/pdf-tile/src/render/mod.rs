//! PDF rendering modules for tiling
//!
//! This module handles all PDF-specific operations:
//! - Creating XObjects from source pages
//! - Building one output page per tile
//! - Deep copying PDF objects

mod page;
mod xobject;

pub use page::{TileResources, render_tile_page};
pub use xobject::{create_page_xobject, page_media_box};
