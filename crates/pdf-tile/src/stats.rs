use crate::layout::{TilePlan, plan};
use crate::options::TileOptions;
use crate::tile::source_pages;
use crate::types::*;
use lopdf::Document;

/// Plan chosen for one source page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PageTiling {
    pub page_index: usize,
    pub page: SourcePage,
    pub plan: TilePlan,
}

/// Statistics about the tiling of a document
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TilingStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// One entry per source page, in document order
    pub pages: Vec<PageTiling>,
    /// Output page count
    pub total_tiles: usize,
}

/// Calculate statistics for the tiling without rendering anything
pub fn calculate_statistics(
    document: &Document,
    options: &TileOptions,
) -> Result<TilingStatistics> {
    options.validate()?;
    let format = options.sheet_format()?;

    let sizes = source_pages(document)?;
    if sizes.is_empty() {
        return Err(TileError::NoPages);
    }

    let pages = sizes
        .into_iter()
        .enumerate()
        .map(|(page_index, page)| {
            Ok(PageTiling {
                page_index,
                page,
                plan: plan(page, &format, options.border)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let total_tiles = pages.iter().map(|p| p.plan.tile_count()).sum();

    Ok(TilingStatistics {
        source_pages: pages.len(),
        pages,
        total_tiles,
    })
}
