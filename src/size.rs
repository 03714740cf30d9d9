//! Wallpaper dimensions and the built-in size presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Total pixel count, widened so large sizes can't overflow.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Returns true if neither dimension is zero.
    pub fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// 1080p.
impl Default for SizePx {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

impl fmt::Display for SizePx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Error returned when a `WxH` string can't be read as a [`SizePx`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SizeParseError {
    #[error("expected WIDTHxHEIGHT, got {0:?}")]
    Malformed(String),
    #[error("dimensions must be positive, got {0}")]
    Zero(SizePx),
}

impl FromStr for SizePx {
    type Err = SizeParseError;

    /// Accepts `1920x1080`, `1920X1080` or `1920×1080`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SizeParseError::Malformed(s.to_owned());

        let (width, height) = s
            .trim()
            .split_once(['x', 'X', '×'])
            .ok_or_else(malformed)?;
        let width = width.trim().parse::<u32>().map_err(|_| malformed())?;
        let height = height.trim().parse::<u32>().map_err(|_| malformed())?;

        let size = Self::new(width, height);
        if !size.is_positive() {
            return Err(SizeParseError::Zero(size));
        }
        Ok(size)
    }
}

// ============================================================================
// Presets
// ============================================================================

/// A named, commonly used screen size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePreset {
    pub label: &'static str,
    pub size: SizePx,
}

/// Common screen sizes, desktop first.
pub const PRESETS: &[SizePreset] = &[
    SizePreset { label: "4K UHD", size: SizePx::new(3840, 2160) },
    SizePreset { label: "1440p", size: SizePx::new(2560, 1440) },
    SizePreset { label: "1080p", size: SizePx::new(1920, 1080) },
    SizePreset { label: "UWQHD", size: SizePx::new(3440, 1440) },
    SizePreset { label: "iPhone 15 Pro", size: SizePx::new(1179, 2556) },
    SizePreset { label: "Android", size: SizePx::new(1440, 3120) },
    SizePreset { label: "720p", size: SizePx::new(1280, 720) },
];

/// Looks up a preset size by label, ignoring case.
pub fn preset(label: &str) -> Option<SizePx> {
    let label = label.trim();
    PRESETS
        .iter()
        .find(|p| p.label.eq_ignore_ascii_case(label))
        .map(|p| p.size)
}
