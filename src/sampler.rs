use image::RgbaImage;

use crate::models::{EdgeColors, EdgePosition};

/// Sample the background color just inside the rounded-corner decoration
/// at the given edge or corner. `inset_frac` is the fraction of the width
/// to step inward from the relevant side(s); coordinates are clamped so
/// degenerate frames cannot index out of range.
pub fn edge_color(img: &RgbaImage, pos: EdgePosition, inset_frac: f32) -> [u8; 3] {
    let (width, height) = img.dimensions();
    let inset = (width as f32 * inset_frac) as u32;
    let far_x = width.saturating_sub(inset);
    let far_y = height.saturating_sub(inset);
    let (x, y) = match pos {
        EdgePosition::Top => (width / 2, inset),
        EdgePosition::Bottom => (width / 2, far_y),
        EdgePosition::Left => (inset, height / 2),
        EdgePosition::Right => (far_x, height / 2),
        EdgePosition::TopLeft => (inset, inset),
        EdgePosition::TopRight => (far_x, inset),
        EdgePosition::BottomLeft => (inset, far_y),
        EdgePosition::BottomRight => (far_x, far_y),
    };
    let p = img.get_pixel(x.min(width - 1), y.min(height - 1));
    [p[0], p[1], p[2]]
}

/// Collect all eight edge/corner samples in one pass.
pub fn sample_edges(img: &RgbaImage, inset_frac: f32) -> EdgeColors {
    EdgeColors {
        top: edge_color(img, EdgePosition::Top, inset_frac),
        bottom: edge_color(img, EdgePosition::Bottom, inset_frac),
        left: edge_color(img, EdgePosition::Left, inset_frac),
        right: edge_color(img, EdgePosition::Right, inset_frac),
        top_left: edge_color(img, EdgePosition::TopLeft, inset_frac),
        top_right: edge_color(img, EdgePosition::TopRight, inset_frac),
        bottom_left: edge_color(img, EdgePosition::BottomLeft, inset_frac),
        bottom_right: edge_color(img, EdgePosition::BottomRight, inset_frac),
    }
}
