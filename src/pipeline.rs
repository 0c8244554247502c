use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage, RgbaImage};

use crate::background;
use crate::error::IconError;
use crate::logger::log_line;
use crate::models::IconSpec;
use crate::sampler;

/// Resampling filter for every scale step in the pipeline.
pub const RESAMPLE: FilterType = FilterType::Lanczos3;

/// Load the source icon as RGBA. The existence check runs before any
/// decode or write so a missing source aborts with zero outputs.
pub fn load_source(path: &Path) -> Result<RgbaImage, IconError> {
    if !path.exists() {
        return Err(IconError::MissingSource(path.to_path_buf()));
    }
    let img = image::open(path).map_err(|e| IconError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Strip baked-in rounded corners from a square source icon and return
/// the opaque composite at `final_px`.
///
/// The source is scaled up and center-cropped so the corner rounding
/// falls outside the frame, then composited over a background blended
/// from the eight edge samples to fill whatever the crop left uncovered.
pub fn remove_rounded_corners(
    src: &RgbaImage,
    spec: &IconSpec,
    final_px: u32,
) -> Result<RgbImage, IconError> {
    let (width, height) = src.dimensions();
    if width != height {
        return Err(IconError::NotSquare { width, height });
    }

    let corners = sampler::sample_edges(src, spec.edge_inset);
    log_line(&format!(
        "edge samples: top {:?} bottom {:?} corners {:?}/{:?}/{:?}/{:?}",
        corners.top,
        corners.bottom,
        corners.top_left,
        corners.top_right,
        corners.bottom_left,
        corners.bottom_right
    ));

    // Upscale only; a factor below 1.0 would make the crop box invalid.
    let scaled_px = ((width as f32 * spec.scale_factor) as u32).max(width);
    let scaled = imageops::resize(src, scaled_px, scaled_px, RESAMPLE);

    let offset = (scaled_px - width) / 2;
    let cropped = imageops::crop_imm(&scaled, offset, offset, width, height).to_image();

    let mut canvas = background::synthesize(width, height, &corners);
    imageops::overlay(&mut canvas, &cropped, 0, 0);

    let flat = DynamicImage::ImageRgba8(canvas).to_rgb8();
    if final_px != width {
        Ok(imageops::resize(&flat, final_px, final_px, RESAMPLE))
    } else {
        Ok(flat)
    }
}
