//! solid-wallpaper: color parsing, conversion and solid-color wallpaper export
//!
//! The core of this crate is a set of pure functions that read HEX, RGB and
//! HSL color text into a canonical [`Rgb`] and convert between RGB and HSL
//! with consistent rounding. Around it sit the pieces a wallpaper tool
//! needs: sizes and presets, PNG/JPEG export, and a serializable profile.
//!
//! # Example
//!
//! ```
//! use solid_wallpaper::{format_hex, format_hsl_text, format_rgb_text, parse_color_text, Rgb};
//!
//! let color = parse_color_text("rgb(100%, 50%, 0%)").unwrap();
//! assert_eq!(color, Rgb::new(255, 127, 0));
//!
//! assert_eq!(format_hex(color), "#FF7F00");
//! assert_eq!(format_rgb_text(color), "rgb(255, 127, 0)");
//! assert_eq!(format_hsl_text(color), "hsl(30, 100%, 50%)");
//!
//! // Unrecognized text is `None`, never a default color.
//! assert_eq!(parse_color_text("#12"), None);
//! ```
//!
//! # Exporting
//!
//! ```
//! use solid_wallpaper::{encode, ExportSettings, ImageFormat, Rgb, SizePx};
//!
//! let settings = ExportSettings::new(SizePx::new(64, 32), ImageFormat::Png);
//! let png = encode(Rgb::new(30, 30, 30), &settings).unwrap();
//! assert!(png.starts_with(b"\x89PNG"));
//! ```

mod color;
mod export;
mod parse;
mod profile;
mod size;

pub use color::{
    clamp_int, format_hex, format_hsl_text, format_rgb_text, hex_byte, hsl_to_rgb, rgb_to_hsl, Hsl,
    Rgb,
};
pub use export::{
    encode, file_name, render_solid, validate_size, write_to_dir, ExportError, ExportSettings,
    ImageFormat, DEFAULT_JPEG_QUALITY, MAX_PIXEL_AREA,
};
pub use parse::{hex_to_rgb, hsl_text_to_rgb, parse_color_text, rgb_text_to_rgb, ColorParseError};
pub use profile::{RecentList, WallpaperProfile, RECENT_LIMIT};
pub use size::{preset, SizeParseError, SizePreset, SizePx, PRESETS};
