//! Parsing of textual color notations into [`Rgb`].
//!
//! Three notations are recognized:
//!
//! - hex: `#RGB` or `#RRGGBB`, case-insensitive, `#` optional
//! - rgb: `rgb(...)`, `rgba(...)` or a bare `r,g,b` triple; channels are
//!   numbers in `0..=255` or percentages
//! - hsl: `hsl(...)` or `hsla(...)` only; the bare form is never HSL
//!
//! Parsers return `None` for anything they don't recognize. Failing to parse
//! is routine (a user halfway through typing), so nothing here panics or logs.

use std::str::FromStr;

use crate::color::{channel, hsl_to_rgb, Rgb};

/// The single way color text can fail to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("unrecognized color {0:?}: expected HEX, RGB or HSL notation")]
    Unrecognized(String),
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color_text(s).ok_or_else(|| ColorParseError::Unrecognized(s.to_owned()))
    }
}

/// Parses any supported notation, trying hex, then rgb, then hsl.
///
/// ```
/// use solid_wallpaper::{parse_color_text, Rgb};
///
/// assert_eq!(parse_color_text("#0f0"), Some(Rgb::new(0, 255, 0)));
/// assert_eq!(parse_color_text("255, 0, 0"), Some(Rgb::new(255, 0, 0)));
/// assert_eq!(parse_color_text("hsl(240, 100%, 50%)"), Some(Rgb::new(0, 0, 255)));
/// assert_eq!(parse_color_text("invalid"), None);
/// ```
pub fn parse_color_text(text: &str) -> Option<Rgb> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    hex_to_rgb(text)
        .or_else(|| rgb_text_to_rgb(text))
        .or_else(|| hsl_text_to_rgb(text))
}

/// Parses `#RGB` / `#RRGGBB` (the `#` is optional).
pub fn hex_to_rgb(text: &str) -> Option<Rgb> {
    let text = text.trim();
    let digits = text.strip_prefix('#').unwrap_or(text).as_bytes();

    let nibbles = digits
        .iter()
        .map(|&c| (c as char).to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()?;

    match nibbles.as_slice() {
        // Shorthand: each digit is doubled, so `f` becomes `ff`.
        [r, g, b] => Some(Rgb::new(r * 17, g * 17, b * 17)),
        [r1, r0, g1, g0, b1, b0] => Some(Rgb::new(
            r1 << 4 | r0,
            g1 << 4 | g0,
            b1 << 4 | b0,
        )),
        _ => None,
    }
}

/// Parses `rgb(...)`, `rgba(...)` or a bare comma-separated triple.
///
/// At least three fields are required; anything after the third (alpha) is
/// ignored. A field ending in `%` is scaled from `0..=100` onto `0..=255`.
pub fn rgb_text_to_rgb(text: &str) -> Option<Rgb> {
    let text = normalize(text);
    let args = function_args(&text, &["rgba", "rgb"]).or_else(|| bare_triple(&text))?;

    let fields: Vec<&str> = args.split(',').collect();
    if fields.len() < 3 {
        return None;
    }

    let mut rgb = [0u8; 3];
    for (slot, field) in rgb.iter_mut().zip(&fields) {
        let value = match field.strip_suffix('%') {
            Some(percent) => parse_number(percent)? * 2.55,
            None => parse_number(field)?,
        };
        *slot = channel(value);
    }
    Some(rgb.into())
}

/// Parses `hsl(...)` or `hsla(...)`.
///
/// Hue is in degrees (an optional `deg` suffix is allowed) and may be any
/// finite value; saturation and lightness accept an optional `%`.
pub fn hsl_text_to_rgb(text: &str) -> Option<Rgb> {
    let text = normalize(text);
    let args = function_args(&text, &["hsla", "hsl"])?;

    let fields: Vec<&str> = args.split(',').collect();
    let &[hue, saturation, lightness, ..] = fields.as_slice() else {
        return None;
    };

    let h = parse_number(hue.strip_suffix("deg").unwrap_or(hue))?;
    let s = parse_number(saturation.strip_suffix('%').unwrap_or(saturation))?;
    let l = parse_number(lightness.strip_suffix('%').unwrap_or(lightness))?;

    Some(hsl_to_rgb(h, s, l))
}

// ============================================================================
// Helpers
// ============================================================================

/// Trims, lowercases and removes every whitespace character.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns the non-empty contents of `name(...)` for the first matching name.
fn function_args<'a>(text: &'a str, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        let args = text
            .strip_prefix(name)?
            .strip_prefix('(')?
            .strip_suffix(')')?;
        (!args.is_empty() && !args.contains(')')).then_some(args)
    })
}

/// Accepts the unwrapped `r,g,b` form: digits, dots and commas only.
fn bare_triple(text: &str) -> Option<&str> {
    let valid = !text.is_empty()
        && text
            .bytes()
            .all(|c| c.is_ascii_digit() || c == b'.' || c == b',');
    valid.then_some(text)
}

/// Parses a complete, finite decimal number.
fn parse_number(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|n| n.is_finite())
}
