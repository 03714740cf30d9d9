//! Solid-color wallpaper rendering and encoding.
//!
//! A wallpaper is a single [`Rgb`] filled across a [`SizePx`] canvas and
//! encoded as PNG or JPEG. Sizes are validated before any pixel buffer is
//! allocated.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::RgbImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::color::Rgb;
use crate::size::SizePx;

/// Largest canvas we will try to allocate: 100 megapixels.
pub const MAX_PIXEL_AREA: u64 = 10_000 * 10_000;

/// JPEG quality used when none (or a nonsensical one) is given.
pub const DEFAULT_JPEG_QUALITY: f32 = 0.92;

// ============================================================================
// ImageFormat
// ============================================================================

/// Output encoding for a wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
}

impl ImageFormat {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        })
    }
}

// ============================================================================
// ExportSettings
// ============================================================================

/// Everything besides the color that determines the exported file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportSettings {
    pub size: SizePx,
    pub format: ImageFormat,

    /// JPEG quality in `0.5..=1.0`. Ignored for PNG.
    pub jpeg_quality: f32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            size: SizePx::default(),
            format: ImageFormat::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ExportSettings {
    pub fn new(size: SizePx, format: ImageFormat) -> Self {
        Self {
            size,
            format,
            ..Self::default()
        }
    }

    /// Sets the JPEG quality.
    pub fn with_jpeg_quality(mut self, quality: f32) -> Self {
        self.jpeg_quality = quality;
        self
    }

    /// The quality handed to the JPEG encoder, as a percentage.
    ///
    /// Zero and non-finite values fall back to [`DEFAULT_JPEG_QUALITY`];
    /// everything else is clamped to `0.5..=1.0`.
    pub fn jpeg_quality_percent(&self) -> u8 {
        let quality = if self.jpeg_quality.is_finite() && self.jpeg_quality != 0.0 {
            self.jpeg_quality
        } else {
            DEFAULT_JPEG_QUALITY
        };
        (quality.clamp(0.5, 1.0) * 100.0).round() as u8
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("invalid wallpaper size {0}: width and height must be positive")]
    InvalidSize(SizePx),
    #[error("wallpaper size {0} exceeds the 100 megapixel limit")]
    TooLarge(SizePx),
    #[error("failed to encode wallpaper: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write wallpaper: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Rendering
// ============================================================================

/// Checks that a canvas of this size can be allocated.
pub fn validate_size(size: SizePx) -> Result<(), ExportError> {
    if !size.is_positive() {
        return Err(ExportError::InvalidSize(size));
    }
    if size.area() > MAX_PIXEL_AREA {
        return Err(ExportError::TooLarge(size));
    }
    Ok(())
}

/// Fills a canvas of the given size with a single color.
pub fn render_solid(color: Rgb, size: SizePx) -> Result<RgbImage, ExportError> {
    validate_size(size)?;
    debug!(color = %color.to_hex(), %size, "rendering solid canvas");
    Ok(RgbImage::from_pixel(size.width, size.height, color.into()))
}

/// Renders and encodes a wallpaper, returning the file bytes.
pub fn encode(color: Rgb, settings: &ExportSettings) -> Result<Vec<u8>, ExportError> {
    let canvas = render_solid(color, settings.size)?;
    let mut bytes = Vec::new();

    match settings.format {
        ImageFormat::Png => {
            canvas.write_with_encoder(PngEncoder::new(&mut bytes))?;
        }
        ImageFormat::Jpeg => {
            let quality = settings.jpeg_quality_percent();
            canvas.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, quality))?;
        }
    }

    debug!(
        format = %settings.format,
        bytes = bytes.len(),
        "encoded wallpaper"
    );
    Ok(bytes)
}

/// Download name: `wallpaper_RRGGBB_WxH.ext`.
pub fn file_name(color: Rgb, settings: &ExportSettings) -> String {
    let hex = color.to_hex();
    format!(
        "wallpaper_{}_{}.{}",
        hex.trim_start_matches('#'),
        settings.size,
        settings.format.extension()
    )
}

/// Encodes a wallpaper into `dir` under its [`file_name`], returning the path.
pub fn write_to_dir(
    color: Rgb,
    settings: &ExportSettings,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let bytes = encode(color, settings)?;
    let path = dir.join(file_name(color, settings));
    fs::write(&path, &bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote wallpaper");
    Ok(path)
}
