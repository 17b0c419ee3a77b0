//! The icons an iOS `AppIcon.appiconset` needs and the logo sizes they are
//! rendered from.

use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IconSpec {
    pub file_name: &'static str,
    pub size: u32,
}

impl IconSpec {
    const fn new(file_name: &'static str, size: u32) -> Self {
        Self { file_name, size }
    }
}

pub const APP_ICONS: [IconSpec; 15] = [
    IconSpec::new("Icon-App-20x20@1x.png", 20),
    IconSpec::new("Icon-App-20x20@2x.png", 40),
    IconSpec::new("Icon-App-20x20@3x.png", 60),
    IconSpec::new("Icon-App-29x29@1x.png", 29),
    IconSpec::new("Icon-App-29x29@2x.png", 58),
    IconSpec::new("Icon-App-29x29@3x.png", 87),
    IconSpec::new("Icon-App-40x40@1x.png", 40),
    IconSpec::new("Icon-App-40x40@2x.png", 80),
    IconSpec::new("Icon-App-40x40@3x.png", 120),
    IconSpec::new("Icon-App-60x60@2x.png", 120),
    IconSpec::new("Icon-App-60x60@3x.png", 180),
    IconSpec::new("Icon-App-76x76@1x.png", 76),
    IconSpec::new("Icon-App-76x76@2x.png", 152),
    IconSpec::new("Icon-App-83.5x83.5@2x.png", 167),
    IconSpec::new("Icon-App-1024x1024@1x.png", 1024),
];

/// Logo sizes that may exist in the source directory, ascending.
pub const SOURCE_SIZES: [u32; 21] = [
    16, 24, 32, 48, 64, 72, 96, 120, 128, 144, 160, 192, 224, 240, 248, 256, 300, 320, 384, 512,
    1024,
];

const LARGEST_SOURCE: u32 = SOURCE_SIZES[SOURCE_SIZES.len() - 1];

pub fn source_path(logo_dir: &Path, size: u32) -> PathBuf {
    logo_dir.join(format!("{size}x{size}.png"))
}

/// Picks the smallest existing logo that is at least `size` px.
///
/// Falls back to the 1024 px logo when nothing qualifies, even if that file
/// is missing; opening it reports the error.
pub fn select_source(logo_dir: &Path, size: u32) -> PathBuf {
    SOURCE_SIZES
        .iter()
        .filter(|candidate| **candidate >= size)
        .map(|candidate| source_path(logo_dir, *candidate))
        .find(|path| path.exists())
        .unwrap_or_else(|| source_path(logo_dir, LARGEST_SOURCE))
}
