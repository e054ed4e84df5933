//! Alignment marks drawn on top of every tile
//!
//! [`compose_marks`] derives the marks for one tile as plain geometry;
//! [`overlay_operations`] turns them into PDF content stream operations.
//!
//! Each tile carries:
//! - a label naming the source page, column and row
//! - two scale bars of known length to check the print was not resized
//! - a cross on each corner of the trimmed area, so neighbouring sheets can be
//!   lined up by matching the halves of the crosses across the cut

use crate::constants::{
    CROSS_HALF_LENGTH, LABEL_FONT_SIZE, MARK_LINE_WIDTH, SCALE_BAR_DROP, SCALE_BAR_LENGTH,
    pt_to_mm,
};
use crate::layout::{Point, Segment, TileGeometry};

/// Text identifying a tile, drawn with its baseline starting at `position`
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Point,
}

/// A registration cross centered on a trimmed corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cross {
    pub center: Point,
    pub horizontal: Segment,
    pub vertical: Segment,
}

impl Cross {
    pub fn new(center: Point, half_length: f32) -> Self {
        Self {
            center,
            horizontal: Segment::new(
                Point::new(center.x - half_length, center.y),
                Point::new(center.x + half_length, center.y),
            ),
            vertical: Segment::new(
                Point::new(center.x, center.y - half_length),
                Point::new(center.x, center.y + half_length),
            ),
        }
    }
}

/// Everything drawn over one tile
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayMarks {
    pub label: Label,
    pub scale_bar_h: Segment,
    pub scale_bar_v: Segment,
    /// Bottom-left, bottom-right, top-left, top-right
    pub corners: [Cross; 4],
}

impl OverlayMarks {
    /// All stroked segments: both scale bars, then each cross
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        [self.scale_bar_h, self.scale_bar_v].into_iter().chain(
            self.corners
                .iter()
                .flat_map(|cross| [cross.horizontal, cross.vertical]),
        )
    }
}

/// Derive the marks for one tile of source page `page_index`.
///
/// The column and row in the label come from `geometry`.
pub fn compose_marks(geometry: &TileGeometry, border: f32, page_index: usize) -> OverlayMarks {
    let offset = border / 2.0;

    let left = geometry.base_x + border;
    let right = geometry.end_x - border;
    let bottom = geometry.base_y + border;
    let top = geometry.end_y - border;

    // Label sits in the bottom border strip, just below the trim line
    let label_position = Point::new(left + offset, bottom - offset);
    let label = Label {
        text: label_text(page_index, geometry.col, geometry.row),
        position: label_position,
    };

    let bar_y = label_position.y - SCALE_BAR_DROP;
    let scale_bar_h = Segment::new(
        Point::new(label_position.x, bar_y),
        Point::new(label_position.x + SCALE_BAR_LENGTH, bar_y),
    );

    // Vertical bar hangs down the right border strip from near the top corner
    let bar_x = right + offset;
    let bar_top = top - offset;
    let scale_bar_v = Segment::new(
        Point::new(bar_x, bar_top - SCALE_BAR_LENGTH),
        Point::new(bar_x, bar_top),
    );

    let corners = [
        Point::new(left, bottom),
        Point::new(right, bottom),
        Point::new(left, top),
        Point::new(right, top),
    ]
    .map(|corner| Cross::new(corner, CROSS_HALF_LENGTH));

    OverlayMarks {
        label,
        scale_bar_h,
        scale_bar_v,
        corners,
    }
}

fn label_text(page_index: usize, col: usize, row: usize) -> String {
    format!(
        "page {}/column {}/line {}/scale {}pt = {}mm",
        page_index,
        col,
        row,
        SCALE_BAR_LENGTH,
        pt_to_mm(SCALE_BAR_LENGTH).round()
    )
}

/// Generate PDF content stream operations drawing `marks`.
///
/// `font` is the resource name of the font used for the label.
pub fn overlay_operations(marks: &OverlayMarks, font: &str) -> String {
    let mut ops = String::new();

    // Save graphics state, black stroke and fill
    ops.push_str("q\n");
    ops.push_str("0 0 0 RG 0 0 0 rg\n");
    ops.push_str(&format!("{} w\n", MARK_LINE_WIDTH));
    ops.push_str("[] 0 d\n");

    for segment in marks.segments() {
        ops.push_str(&stroke_segment(&segment));
    }

    ops.push_str(&format!(
        "BT /{} {} Tf {} {} Td ({}) Tj ET\n",
        font,
        LABEL_FONT_SIZE,
        marks.label.position.x,
        marks.label.position.y,
        escape_pdf_string(&marks.label.text)
    ));

    ops.push_str("Q\n");

    ops
}

fn stroke_segment(segment: &Segment) -> String {
    format!(
        "{} {} m {} {} l S\n",
        segment.start.x, segment.start.y, segment.end.x, segment.end.y
    )
}

/// Escape the characters that are special inside a PDF literal string
fn escape_pdf_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '(' | ')' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}
