//! Output page rendering for tiling

use crate::layout::TileGeometry;
use crate::marks::{OverlayMarks, overlay_operations};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::xobject::PageXObject;

/// Resource name of the placed source page
const SOURCE_XOBJECT_NAME: &str = "Src";

/// Resource name of the label font
const LABEL_FONT_NAME: &str = "F1";

/// Objects shared by every tile page of a document
pub struct TileResources {
    /// The `Pages` node new pages are attached to
    pub parent_pages_id: ObjectId,
    /// Helvetica font used for labels
    pub font_id: ObjectId,
}

impl TileResources {
    /// Add the shared label font to `output`
    pub fn new(output: &mut Document, parent_pages_id: ObjectId) -> Self {
        let mut font_dict = Dictionary::new();
        font_dict.set("Type", Object::Name(b"Font".to_vec()));
        font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
        let font_id = output.add_object(font_dict);

        Self {
            parent_pages_id,
            font_id,
        }
    }
}

/// Render one tile as a new page of `output`.
///
/// The page's MediaBox is the tile's crop rectangle in source coordinates.
/// The source page is drawn with its MediaBox origin at (0, 0), and the
/// overlay marks on top of it.
pub fn render_tile_page(
    output: &mut Document,
    resources: &TileResources,
    source: &PageXObject,
    geometry: &TileGeometry,
    marks: &OverlayMarks,
) -> ObjectId {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(resources.parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Real(geometry.base_x),
            Object::Real(geometry.base_y),
            Object::Real(geometry.end_x),
            Object::Real(geometry.end_y),
        ]),
    );

    let mut content = placement_command(source);
    content.push_str(&overlay_operations(marks, LABEL_FONT_NAME));

    let mut xobjects = Dictionary::new();
    xobjects.set(SOURCE_XOBJECT_NAME, Object::Reference(source.id));
    let mut fonts = Dictionary::new();
    fonts.set(LABEL_FONT_NAME, Object::Reference(resources.font_id));

    let mut page_resources = Dictionary::new();
    page_resources.set("XObject", Object::Dictionary(xobjects));
    page_resources.set("Font", Object::Dictionary(fonts));

    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(page_resources));

    output.add_object(page_dict)
}

/// Content stream command placing the source page.
fn placement_command(source: &PageXObject) -> String {
    let origin = source.media_box;
    if origin.x == 0.0 && origin.y == 0.0 {
        format!("q /{} Do Q\n", SOURCE_XOBJECT_NAME)
    } else {
        format!(
            "q 1 0 0 1 {} {} cm /{} Do Q\n",
            -origin.x, -origin.y, SOURCE_XOBJECT_NAME
        )
    }
}
