//! Serializable wallpaper settings.
//!
//! A [`WallpaperProfile`] captures the chosen color, size and export format,
//! plus the recently used colors and sizes, in a JSON-friendly shape that a
//! frontend can persist and hand back.
//!
//! # Example
//!
//! ```
//! use solid_wallpaper::{ImageFormat, SizePx, WallpaperProfile};
//!
//! let mut profile = WallpaperProfile::new().with_format(ImageFormat::Jpeg);
//! assert!(profile.set_color_text("hsl(210, 60%, 30%)"));
//! profile.set_size(SizePx::new(2560, 1440));
//!
//! let json = profile.to_json().unwrap();
//! let restored = WallpaperProfile::from_json(&json).unwrap();
//! assert_eq!(restored, profile);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Rgb;
use crate::export::{ExportSettings, ImageFormat, DEFAULT_JPEG_QUALITY};
use crate::parse::parse_color_text;
use crate::size::SizePx;

/// How many entries a [`RecentList`] keeps.
pub const RECENT_LIMIT: usize = 6;

// ============================================================================
// RecentList
// ============================================================================

/// Most-recent-first list of distinct values, capped at [`RECENT_LIMIT`].
///
/// Serializes as a plain JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct RecentList {
    items: Vec<String>,
}

impl RecentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `value` to the front, dropping any older copy and the overflow.
    pub fn push(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.items.retain(|item| *item != value);
        self.items.insert(0, value);
        self.items.truncate(RECENT_LIMIT);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

// ============================================================================
// WallpaperProfile
// ============================================================================

/// All user-facing wallpaper settings.
///
/// # JSON Format
///
/// ```json
/// {
///   "color": "#1F4D7A",
///   "width": 2560,
///   "height": 1440,
///   "format": "jpeg",
///   "jpegQuality": 0.92,
///   "recentColors": ["#1F4D7A"],
///   "recentSizes": ["2560x1440"]
/// }
/// ```
///
/// `color` accepts any notation the parser understands when read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct WallpaperProfile {
    #[cfg_attr(feature = "jsonschema", schemars(with = "String"))]
    pub color: Rgb,

    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,

    /// JPEG quality in `0.5..=1.0`.
    pub jpeg_quality: f32,

    pub recent_colors: RecentList,
    pub recent_sizes: RecentList,
}

/// Black, 1080p, PNG.
impl Default for WallpaperProfile {
    fn default() -> Self {
        let size = SizePx::default();
        Self {
            color: Rgb::BLACK,
            width: size.width,
            height: size.height,
            format: ImageFormat::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            recent_colors: RecentList::new(),
            recent_sizes: RecentList::new(),
        }
    }
}

impl WallpaperProfile {
    /// Creates a profile with default settings and empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color without touching the history.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Sets the size without touching the history.
    pub fn with_size(mut self, size: SizePx) -> Self {
        self.width = size.width;
        self.height = size.height;
        self
    }

    /// Sets the export format.
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn size(&self) -> SizePx {
        SizePx::new(self.width, self.height)
    }

    /// Parses user text and, if it is a color, selects it and records it.
    ///
    /// Returns false and leaves the profile untouched when the text isn't a
    /// recognized color.
    pub fn set_color_text(&mut self, text: &str) -> bool {
        let Some(color) = parse_color_text(text) else {
            debug!(input = text, "ignoring unrecognized color text");
            return false;
        };
        self.color = color;
        self.recent_colors.push(color.to_hex());
        true
    }

    /// Selects a size and records it. Sizes with a zero dimension are ignored.
    pub fn set_size(&mut self, size: SizePx) {
        if !size.is_positive() {
            debug!(%size, "ignoring empty size");
            return;
        }
        self.width = size.width;
        self.height = size.height;
        self.recent_sizes.push(size.to_string());
    }

    /// The settings the exporter needs for this profile.
    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings::new(self.size(), self.format).with_jpeg_quality(self.jpeg_quality)
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
