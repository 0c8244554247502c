use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use image::imageops;

use crate::error::IconError;
use crate::logger::log_line;
use crate::models::IconSpec;
use crate::pipeline::RESAMPLE;

/// Write every size-table entry into `out_dir`, each a pure resize of
/// the canonical composite. Returns the written paths in table order.
/// Write failures surface per file; already-written files stay in place.
pub fn export_all(
    canonical: &RgbImage,
    spec: &IconSpec,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, IconError> {
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::with_capacity(spec.sizes.len());
    for entry in &spec.sizes {
        let path = out_dir.join(&entry.file);
        let img = if entry.px == canonical.width() {
            canonical.clone()
        } else {
            imageops::resize(canonical, entry.px, entry.px, RESAMPLE)
        };
        img.save(&path).map_err(|e| IconError::Write {
            path: path.clone(),
            source: e,
        })?;
        log_line(&format!("wrote {} ({}x{})", path.display(), entry.px, entry.px));
        written.push(path);
    }
    Ok(written)
}

/// One problem found while auditing an exported icon set.
#[derive(Debug)]
pub struct Defect {
    pub file: String,
    pub reason: String,
}

/// Audit an exported icon set against the size table: every entry must
/// exist, decode, be square at its table size, and be fully opaque
/// (no alpha channel, or alpha 255 everywhere).
pub fn verify(spec: &IconSpec, out_dir: &Path) -> Vec<Defect> {
    let mut defects = Vec::new();
    for entry in &spec.sizes {
        let path = out_dir.join(&entry.file);
        if !path.exists() {
            defects.push(Defect {
                file: entry.file.clone(),
                reason: "missing".to_string(),
            });
            continue;
        }
        let img = match image::open(&path) {
            Ok(img) => img,
            Err(e) => {
                defects.push(Defect {
                    file: entry.file.clone(),
                    reason: format!("undecodable: {e}"),
                });
                continue;
            }
        };
        let (w, h) = (img.width(), img.height());
        if w != entry.px || h != entry.px {
            defects.push(Defect {
                file: entry.file.clone(),
                reason: format!("expected {0}x{0}, got {w}x{h}", entry.px),
            });
        }
        if img.color().has_alpha() && img.to_rgba8().pixels().any(|p| p[3] != 255) {
            defects.push(Defect {
                file: entry.file.clone(),
                reason: "transparent pixels".to_string(),
            });
        }
    }
    defects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline;
    use image::{Rgba, RgbaImage};

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("iconfix-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_exports_every_size() {
        let canonical = RgbImage::from_pixel(1024, 1024, image::Rgb([120, 130, 140]));
        let spec = IconSpec::default();
        let dir = scratch_dir("export");

        let written = export_all(&canonical, &spec, &dir).unwrap();
        assert_eq!(written.len(), spec.sizes.len());
        for (entry, path) in spec.sizes.iter().zip(&written) {
            let img = image::open(path).unwrap();
            assert_eq!(img.width(), entry.px);
            assert_eq!(img.height(), entry.px);
            assert!(!img.color().has_alpha(), "{} has alpha", entry.file);
        }
        assert!(verify(&spec, &dir).is_empty());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_verify_flags_bad_entries() {
        let canonical = RgbImage::from_pixel(1024, 1024, image::Rgb([1, 2, 3]));
        let spec = IconSpec::default();
        let dir = scratch_dir("verify");
        export_all(&canonical, &spec, &dir).unwrap();

        // wrong size
        let small = RgbImage::from_pixel(10, 10, image::Rgb([0, 0, 0]));
        small.save(dir.join("AppIcon-20@2x.png")).unwrap();
        // transparency
        let holey = RgbaImage::from_pixel(60, 60, Rgba([0, 0, 0, 128]));
        holey.save(dir.join("AppIcon-20@3x.png")).unwrap();
        // gone entirely
        fs::remove_file(dir.join("AppIcon-29@2x.png")).unwrap();

        let defects = verify(&spec, &dir);
        assert_eq!(defects.len(), 3);
        assert!(defects.iter().any(|d| d.file == "AppIcon-20@2x.png" && d.reason.contains("expected 40x40")));
        assert!(defects.iter().any(|d| d.file == "AppIcon-20@3x.png" && d.reason == "transparent pixels"));
        assert!(defects.iter().any(|d| d.file == "AppIcon-29@2x.png" && d.reason == "missing"));
        let _ = fs::remove_dir_all(&dir);
    }

    // Full pass: platform-style 1024 source through corner removal and
    // export; the 120 px variant keeps backdrop edges and content center.
    #[test]
    fn test_end_to_end_small_variant() {
        let mut img = RgbaImage::from_pixel(1024, 1024, Rgba([200, 200, 200, 255]));
        for (cx, cy) in [(0u32, 0u32), (904, 0), (0, 904), (904, 904)] {
            for y in cy..cy + 120 {
                for x in cx..cx + 120 {
                    img.put_pixel(x, y, Rgba([0, 0, 0, 0]));
                }
            }
        }
        for y in 384..640 {
            for x in 384..640 {
                img.put_pixel(x, y, Rgba([10, 60, 240, 255]));
            }
        }

        let spec = IconSpec::default();
        let dir = scratch_dir("e2e");
        let canonical = pipeline::remove_rounded_corners(&img, &spec, spec.canonical_px).unwrap();
        export_all(&canonical, &spec, &dir).unwrap();

        let small = image::open(dir.join("AppIcon-40@3x.png")).unwrap().to_rgb8();
        assert_eq!(small.dimensions(), (120, 120));
        for (x, y) in [(1, 1), (118, 1), (1, 118), (118, 118)] {
            let p = small.get_pixel(x, y).0;
            for c in p {
                assert!((c as i32 - 200).abs() <= 14, "edge ({x},{y}) = {p:?}");
            }
        }
        let center = small.get_pixel(60, 60).0;
        assert!((center[0] as i32 - 10).abs() <= 14, "center = {center:?}");
        assert!((center[1] as i32 - 60).abs() <= 14, "center = {center:?}");
        assert!((center[2] as i32 - 240).abs() <= 14, "center = {center:?}");
        let _ = fs::remove_dir_all(&dir);
    }
}
