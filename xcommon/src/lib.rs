use anyhow::{Context, Result};
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// A decoded source image that can be written out as square PNGs of
/// arbitrary size.
pub struct Scaler {
    img: DynamicImage,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = ImageReader::open(path)
            .with_context(|| format!("failed to open `{}`", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("failed to read `{}`", path.display()))?
            .decode()
            .with_context(|| format!("failed to decode `{}`", path.display()))?;
        Ok(Self::new(img))
    }

    pub fn new(img: DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        if width != height {
            log::warn!("expected width == height, got {}x{}", width, height);
        }
        Self { img }
    }

    /// Resamples to `size`x`size` with Lanczos3 and encodes a PNG at the
    /// highest compression level, in the smallest lossless color type.
    pub fn write<W: Write>(&self, w: W, size: u32) -> Result<()> {
        let encoder =
            PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
        let img = self.img.resize_exact(size, size, FilterType::Lanczos3);
        optimize(img).write_with_encoder(encoder)?;
        Ok(())
    }

    /// Writes a `size`x`size` PNG to `path`, replacing any existing file.
    ///
    /// The PNG goes to a temporary file next to `path` that is only moved
    /// into place once complete, so on error `path` is left untouched.
    pub fn save<P: AsRef<Path>>(&self, path: P, size: u32) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to create temporary file in `{}`", dir.display()))?;
        self.write(tmp.as_file_mut(), size)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        tmp.persist(path)
            .map_err(|err| err.error)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        Ok(())
    }
}

/// Drops color and alpha channels that carry no information.
fn optimize(img: DynamicImage) -> DynamicImage {
    let mut is_grayscale = true;
    let mut is_opaque = true;
    let (width, height) = img.dimensions();
    'scan: for x in 0..width {
        for y in 0..height {
            let pixel = img.get_pixel(x, y);
            if pixel[0] != pixel[1] || pixel[1] != pixel[2] {
                is_grayscale = false;
            }
            if pixel[3] != 255 {
                is_opaque = false;
            }
            if !is_grayscale && !is_opaque {
                break 'scan;
            }
        }
    }
    match (is_grayscale, is_opaque) {
        (true, true) => DynamicImage::ImageLuma8(img.to_luma8()),
        (true, false) => DynamicImage::ImageLumaA8(img.to_luma_alpha8()),
        (false, true) => DynamicImage::ImageRgb8(img.to_rgb8()),
        (false, false) => DynamicImage::ImageRgba8(img.to_rgba8()),
    }
}
