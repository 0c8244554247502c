use image::{Rgba, RgbaImage};

use crate::models::EdgeColors;

/// Component-wise linear interpolation between two RGB colors.
/// Truncates toward zero, matching integer color math.
#[inline]
pub fn lerp_rgb(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let mut out = [0u8; 3];
    for i in 0..3 {
        out[i] = (a[i] as f32 + (b[i] as f32 - a[i] as f32) * t) as u8;
    }
    out
}

/// Bilinear blend of the four corner samples at normalized (tx, ty):
/// horizontal between the top pair and the bottom pair, then vertical
/// between the two results.
#[inline]
pub fn corner_color(corners: &EdgeColors, tx: f32, ty: f32) -> [u8; 3] {
    let top = lerp_rgb(corners.top_left, corners.top_right, tx);
    let bottom = lerp_rgb(corners.bottom_left, corners.bottom_right, tx);
    lerp_rgb(top, bottom, ty)
}

// A single-pixel axis has no extent; its fraction is defined as 0.
#[inline]
fn axis_frac(i: u32, len: u32) -> f32 {
    if len > 1 { i as f32 / (len - 1) as f32 } else { 0.0 }
}

/// Opaque backdrop spanning the whole frame, shaded as a smooth gradient
/// across the four sampled corner colors.
pub fn synthesize(width: u32, height: u32, corners: &EdgeColors) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b] = corner_color(corners, axis_frac(x, width), axis_frac(y, height));
        Rgba([r, g, b, 255])
    })
}
