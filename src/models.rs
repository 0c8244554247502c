use serde::{Deserialize, Serialize};

/// Named sample positions along the edges of a square icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePosition {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// The eight RGB triples sampled from a source icon, used as anchors
/// when synthesizing the replacement background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeColors {
    pub top: [u8; 3],
    pub bottom: [u8; 3],
    pub left: [u8; 3],
    pub right: [u8; 3],
    pub top_left: [u8; 3],
    pub top_right: [u8; 3],
    pub bottom_left: [u8; 3],
    pub bottom_right: [u8; 3],
}

/// One entry of the size table: output file name and square pixel size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeEntry {
    pub file: String,
    pub px: u32,
}

impl SizeEntry {
    pub fn new(file: &str, px: u32) -> Self {
        Self { file: file.to_string(), px }
    }
}

/// Everything the pipeline needs to know about one icon family.
/// Defaults describe the iOS app-icon set; an `iconspec.json` next to
/// the invocation can swap in a different table without code edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconSpec {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
    /// Upscale applied before the center crop. 1.18 clears the corner
    /// radius of current iOS masks (about 22.37% of the edge); a platform
    /// convention, not a universal constant.
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,
    /// Fraction of the width to step inward when sampling edge colors.
    /// 0.22 lands inside the rounded-corner decoration but outside the
    /// primary content on iOS sources.
    #[serde(default = "default_edge_inset")]
    pub edge_inset: f32,
    /// Side length of the canonical composite all entries derive from.
    #[serde(default = "default_canonical_px")]
    pub canonical_px: u32,
    #[serde(default = "ios_sizes")]
    pub sizes: Vec<SizeEntry>,
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            source: default_source(),
            out_dir: default_out_dir(),
            scale_factor: default_scale_factor(),
            edge_inset: default_edge_inset(),
            canonical_px: default_canonical_px(),
            sizes: ios_sizes(),
        }
    }
}

fn default_source() -> String {
    "Resources/Branding/AppIcon-1024.png".to_string()
}

fn default_out_dir() -> String {
    "Assets.xcassets/AppIcon.appiconset".to_string()
}

fn default_scale_factor() -> f32 {
    1.18
}

fn default_edge_inset() -> f32 {
    0.22
}

fn default_canonical_px() -> u32 {
    1024
}

// Required sizes for iOS (points @ scale -> pixels)
fn ios_sizes() -> Vec<SizeEntry> {
    vec![
        SizeEntry::new("AppIcon-20@2x.png", 40),
        SizeEntry::new("AppIcon-20@3x.png", 60),
        SizeEntry::new("AppIcon-29@2x.png", 58),
        SizeEntry::new("AppIcon-29@3x.png", 87),
        SizeEntry::new("AppIcon-40@2x.png", 80),
        SizeEntry::new("AppIcon-40@3x.png", 120),
        SizeEntry::new("AppIcon-60@2x.png", 120),
        SizeEntry::new("AppIcon-60@3x.png", 180),
        SizeEntry::new("AppIcon-1024.png", 1024),
    ]
}
