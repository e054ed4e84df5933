//! PDF tiling - splitting large pages across printable sheets
//!
//! This module orchestrates the tiling process:
//! 1. Validate the options before touching the document
//! 2. Plan orientation and grid size for each source page
//! 3. Enumerate the tiles and compose their alignment marks
//! 4. Render one output page per tile
//!
//! Pages are processed in document order and the tiles of a page in the
//! order [`cells`] yields them, which fixes the page order of the output.

mod io;

pub use io::{load_pdf, save_pdf};

use crate::layout::{cells, plan};
use crate::marks::compose_marks;
use crate::options::TileOptions;
use crate::render::{TileResources, create_page_xobject, page_media_box, render_tile_page};
use crate::types::*;
use log::{debug, info};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashMap;

/// Main tiling function
pub async fn tile(source: &Document, options: &TileOptions) -> Result<Document> {
    options.validate()?;

    let source = source.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || tile_document(&source, &options)).await?
}

/// Sizes of all pages of `doc`, in document order
pub fn source_pages(doc: &Document) -> Result<Vec<SourcePage>> {
    doc.get_pages()
        .values()
        .map(|&page_id| {
            page_media_box(doc, page_id).map(|media_box| {
                SourcePage::new(media_box.width, media_box.height)
            })
        })
        .collect()
}

/// Blocking version of [`tile`]
pub fn tile_document(source: &Document, options: &TileOptions) -> Result<Document> {
    options.validate()?;
    let format = options.sheet_format()?;
    let border = options.border;

    let page_ids: Vec<ObjectId> = source.get_pages().values().copied().collect();
    if page_ids.is_empty() {
        return Err(TileError::NoPages);
    }

    info!("document has {} page(s)", page_ids.len());
    info!(
        "generating {} ({}x{}) with borders of {} points",
        format.name, format.width, format.height, border
    );

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let resources = TileResources::new(&mut output, pages_tree_id);
    let mut copy_cache: HashMap<ObjectId, ObjectId> = HashMap::new();
    let mut page_refs = Vec::new();

    for (page_index, &page_id) in page_ids.iter().enumerate() {
        let media_box = page_media_box(source, page_id)?;
        let page = SourcePage::new(media_box.width, media_box.height);

        let tile_plan = plan(page, &format, border)?;
        info!(
            "page {}: {}x{} -> {} column(s) x {} row(s) = {} tile(s), {} sheets{}",
            page_index,
            page.width,
            page.height,
            tile_plan.num_cols,
            tile_plan.num_rows,
            tile_plan.tile_count(),
            if tile_plan.is_landscape() { "landscape" } else { "portrait" },
            if tile_plan.orientation_swapped { " (swapped)" } else { "" },
        );

        let xobject = create_page_xobject(&mut output, source, page_id, &mut copy_cache)?;

        for geometry in cells(&tile_plan, border) {
            debug!(
                "page {} tile {}x{} from ({},{}) to ({},{})",
                page_index,
                geometry.col,
                geometry.row,
                geometry.base_x,
                geometry.base_y,
                geometry.end_x,
                geometry.end_y
            );

            let marks = compose_marks(&geometry, border, page_index);
            let tile_id = render_tile_page(&mut output, &resources, &xobject, &geometry, &marks);
            page_refs.push(Object::Reference(tile_id));
        }
    }

    info!("generated {} tile page(s)", page_refs.len());

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(output)
}
