//! RGB and HSL color values and the conversions between them.
//!
//! [`Rgb`] is the canonical representation: every parser in
//! [`parse`](crate::parse) produces one, and every formatter consumes one.
//! Channels are stored as `u8`, so an out-of-range channel cannot exist.
//!
//! Every channel or percentage produced from real-valued math goes through
//! [`clamp_int`]: round to nearest (half away from zero), then clamp.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Rounding
// ============================================================================

/// Rounds `n` to the nearest integer, then restricts it to `[min, max]`.
///
/// The order matters at the boundaries: `255.4` rounds to `255` and stays,
/// `255.6` rounds to `256` and is clamped back to `255`. `NaN` is treated as
/// `min`. When `min > max` the result is `max`; this never panics.
pub fn clamp_int(n: f64, min: i64, max: i64) -> i64 {
    let n = if n.is_nan() { min } else { n.round() as i64 };
    n.max(min).min(max)
}

/// Rounds and clamps a real value into a color channel.
pub(crate) fn channel(n: f64) -> u8 {
    clamp_int(n, 0, 255) as u8
}

/// Renders a real value as two uppercase hex digits after rounding and clamping.
///
/// ```
/// use solid_wallpaper::hex_byte;
///
/// assert_eq!(hex_byte(15.0), "0F");
/// assert_eq!(hex_byte(300.0), "FF");
/// ```
pub fn hex_byte(n: f64) -> String {
    format!("{:02X}", channel(n))
}

// ============================================================================
// Rgb
// ============================================================================

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels as an array in `[r, g, b]` order.
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Converts this color to HSL.
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Renders `#RRGGBB` with uppercase digits.
    pub fn to_hex(&self) -> String {
        format_hex(*self)
    }

    /// Perceived brightness in `[0, 1]`, using the Rec. 601 luma weights.
    pub fn brightness(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    /// Returns true for backgrounds bright enough to need dark foreground chrome.
    pub fn is_light(&self) -> bool {
        self.brightness() > 0.7
    }

    /// A uniformly random color from the thread-local generator.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// A uniformly random color drawn from `rng`.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for palette::Srgb<u8> {
    fn from(color: Rgb) -> Self {
        palette::Srgb::new(color.r, color.g, color.b)
    }
}

impl From<palette::Srgb<u8>> for Rgb {
    fn from(color: palette::Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(color: Rgb) -> Self {
        image::Rgb(color.channels())
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(pixel: image::Rgb<u8>) -> Self {
        pixel.0.into()
    }
}

/// Colors travel as `#RRGGBB` strings; any notation the parser accepts is
/// read back.
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        crate::parse::parse_color_text(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized color: {text:?}")))
    }
}

// ============================================================================
// Hsl
// ============================================================================

/// An HSL color with integer components.
///
/// `h` is in degrees within `[0, 360)`; `s` and `l` are percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Converts this color back to RGB.
    pub fn to_rgb(&self) -> Rgb {
        hsl_to_rgb(f64::from(self.h), f64::from(self.s), f64::from(self.l))
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Converts 8-bit RGB channels to HSL using the min/max channel method.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    // Achromatic: hue and saturation are both zero.
    if max == min {
        return Hsl::new(0, 0, clamp_int(l * 100.0, 0, 100) as u8);
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    // A hue that rounds up to 360 is the same angle as 0.
    let h = clamp_int(sector / 6.0 * 360.0, 0, 360) % 360;

    Hsl::new(
        h as u16,
        clamp_int(s * 100.0, 0, 100) as u8,
        clamp_int(l * 100.0, 0, 100) as u8,
    )
}

/// Converts an HSL color to RGB.
///
/// `h` may be any finite number of degrees and is wrapped into `[0, 360)`.
/// `s` and `l` are percentages and are clamped into `[0, 100]`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = ((h % 360.0) + 360.0) % 360.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    if s == 0.0 {
        let v = channel(l * 255.0);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hk = h / 360.0;

    Rgb::new(
        channel(hue_to_channel(p, q, hk + 1.0 / 3.0) * 255.0),
        channel(hue_to_channel(p, q, hk) * 255.0),
        channel(hue_to_channel(p, q, hk - 1.0 / 3.0) * 255.0),
    )
}

/// Piecewise channel function over a hue fraction `t`, wrapped into `[0, 1]`.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Renders `rgb(R, G, B)`.
pub fn format_rgb_text(color: Rgb) -> String {
    color.to_string()
}

/// Renders `hsl(H, S%, L%)` for an RGB color.
pub fn format_hsl_text(color: Rgb) -> String {
    color.to_hsl().to_string()
}

/// Renders `#RRGGBB` with uppercase, zero-padded digits.
pub fn format_hex(color: Rgb) -> String {
    let [r, g, b] = color.channels();
    format!(
        "#{}{}{}",
        hex_byte(f64::from(r)),
        hex_byte(f64::from(g)),
        hex_byte(f64::from(b))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_int_bounds() {
        assert_eq!(clamp_int(5.0, 0, 10), 5);
        assert_eq!(clamp_int(-1.0, 0, 255), 0);
        assert_eq!(clamp_int(300.0, 0, 255), 255);
        assert_eq!(clamp_int(f64::NAN, 0, 255), 0);
    }

    #[test]
    fn clamp_int_inverted_bounds_yield_max() {
        assert_eq!(clamp_int(5.0, 10, 0), 0);
        assert_eq!(clamp_int(-50.0, 10, 0), 0);
        assert_eq!(clamp_int(f64::NAN, 10, 0), 0);
    }

    #[test]
    fn clamp_int_rounds_half_up_before_clamping() {
        assert_eq!(clamp_int(14.5, 0, 255), 15);
        assert_eq!(clamp_int(14.49, 0, 255), 14);
        assert_eq!(clamp_int(254.5, 0, 255), 255);
        assert_eq!(clamp_int(255.6, 0, 255), 255);
        assert_eq!(clamp_int(-0.4, 0, 255), 0);
    }

    #[test]
    fn hex_byte_pads_and_clamps() {
        assert_eq!(hex_byte(15.0), "0F");
        assert_eq!(hex_byte(-1.0), "00");
        assert_eq!(hex_byte(300.0), "FF");
        assert_eq!(hex_byte(170.4), "AA");
    }

    #[test]
    fn format_hex_is_uppercase() {
        assert_eq!(format_hex(Rgb::BLACK), "#000000");
        assert_eq!(format_hex(Rgb::new(171, 205, 239)), "#ABCDEF");
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn rgb_to_hsl_primaries() {
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl::new(0, 100, 50));
        assert_eq!(rgb_to_hsl(0, 255, 0), Hsl::new(120, 100, 50));
        assert_eq!(rgb_to_hsl(0, 0, 255), Hsl::new(240, 100, 50));
    }

    #[test]
    fn rgb_to_hsl_achromatic() {
        assert_eq!(rgb_to_hsl(255, 255, 255), Hsl::new(0, 0, 100));
        assert_eq!(rgb_to_hsl(0, 0, 0), Hsl::new(0, 0, 0));
        assert_eq!(rgb_to_hsl(128, 128, 128), Hsl::new(0, 0, 50));
    }

    #[test]
    fn rgb_to_hsl_saturation_branches() {
        // Light branch: delta / (2 - max - min)
        assert_eq!(rgb_to_hsl(255, 128, 128), Hsl::new(0, 100, 75));
        // Dark branch: delta / (max + min)
        assert_eq!(rgb_to_hsl(128, 64, 64), Hsl::new(0, 33, 38));
    }

    #[test]
    fn rgb_to_hsl_hue_near_full_turn_wraps_to_zero() {
        // (g - b) / delta + 6 lands just under 360 and rounds up.
        assert_eq!(rgb_to_hsl(255, 0, 1).h, 0);
    }

    #[test]
    fn rgb_to_hsl_stays_in_range() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(15) {
                    let hsl = rgb_to_hsl(r, g, b);
                    assert!(hsl.h < 360, "hue out of range for ({r}, {g}, {b})");
                    assert!(hsl.s <= 100, "saturation out of range for ({r}, {g}, {b})");
                    assert!(hsl.l <= 100, "lightness out of range for ({r}, {g}, {b})");
                }
            }
        }
    }

    #[test]
    fn hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn hsl_to_rgb_falling_edge_branch() {
        assert_eq!(hsl_to_rgb(60.0, 100.0, 50.0), Rgb::new(255, 255, 0));
    }

    #[test]
    fn hsl_to_rgb_wraps_hue() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(hsl_to_rgb(720.0, 100.0, 50.0), red);
        assert_eq!(hsl_to_rgb(360.0, 100.0, 50.0), red);
        assert_eq!(hsl_to_rgb(-240.0, 100.0, 50.0), hsl_to_rgb(120.0, 100.0, 50.0));
    }

    #[test]
    fn hsl_to_rgb_achromatic() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), Rgb::BLACK);
        assert_eq!(hsl_to_rgb(200.0, 0.0, 100.0), Rgb::WHITE);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 50.0), Rgb::new(128, 128, 128));
    }

    #[test]
    fn hsl_to_rgb_clamps_percentages() {
        assert_eq!(hsl_to_rgb(0.0, 250.0, 50.0), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(0.0, 100.0, 150.0), Rgb::WHITE);
        assert_eq!(hsl_to_rgb(0.0, -10.0, 0.0), Rgb::BLACK);
    }

    #[test]
    fn gray_round_trip_within_one_unit() {
        for v in 0..=255u8 {
            let back = rgb_to_hsl(v, v, v).to_rgb();
            assert_eq!(back.r, back.g);
            assert_eq!(back.g, back.b);
            assert!(
                (i16::from(back.r) - i16::from(v)).abs() <= 1,
                "gray {v} came back as {}",
                back.r
            );
        }
    }

    #[test]
    fn chromatic_round_trip_error_is_bounded_by_integer_hsl() {
        // Integer hue/saturation/lightness can't hold every RGB color, so
        // chromatic colors may drift by more than one unit per channel.
        let color = Rgb::new(2, 228, 230);
        assert_eq!(color.to_hsl(), Hsl::new(181, 98, 45));
        assert_eq!(color.to_hsl().to_rgb(), Rgb::new(2, 223, 227));

        let mut worst = 0;
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let back = rgb_to_hsl(r, g, b).to_rgb();
                    for (got, want) in back.channels().into_iter().zip([r, g, b]) {
                        worst = worst.max((i16::from(got) - i16::from(want)).abs());
                    }
                }
            }
        }
        assert!(worst <= 5, "round trip drifted by {worst}");
    }

    #[test]
    fn random_colors_follow_the_generator() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let first = Rgb::random_with(&mut StdRng::seed_from_u64(7));
        let again = Rgb::random_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, again);

        let mut rng = StdRng::seed_from_u64(42);
        let colors: Vec<Rgb> = (0..64).map(|_| Rgb::random_with(&mut rng)).collect();
        assert!(colors.iter().any(|c| *c != colors[0]), "colors should vary");

        // Every random color is a valid, parseable color.
        let color = Rgb::random();
        assert_eq!(crate::parse::hex_to_rgb(&color.to_hex()), Some(color));
    }

    #[test]
    fn conversions_are_deterministic() {
        let color = Rgb::new(18, 200, 77);
        assert_eq!(color.to_hsl(), color.to_hsl());
        assert_eq!(color.to_hsl().to_rgb(), color.to_hsl().to_rgb());
    }

    #[test]
    fn formatters() {
        assert_eq!(format_rgb_text(Rgb::new(1, 2, 3)), "rgb(1, 2, 3)");
        assert_eq!(format_hsl_text(Rgb::new(255, 0, 0)), "hsl(0, 100%, 50%)");
        assert_eq!(Hsl::new(210, 50, 40).to_string(), "hsl(210, 50%, 40%)");
    }

    #[test]
    fn brightness_picks_contrast() {
        assert_eq!(Rgb::BLACK.brightness(), 0.0);
        assert!((Rgb::WHITE.brightness() - 1.0).abs() < 1e-9);
        assert!(Rgb::WHITE.is_light());
        assert!(!Rgb::new(0, 0, 255).is_light());
    }

    #[test]
    fn palette_and_image_interop() {
        let color = Rgb::new(10, 20, 30);

        let srgb: palette::Srgb<u8> = color.into();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (10, 20, 30));
        assert_eq!(Rgb::from(srgb), color);

        let pixel: image::Rgb<u8> = color.into();
        assert_eq!(pixel.0, [10, 20, 30]);
        assert_eq!(Rgb::from(pixel), color);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Rgb::new(255, 136, 0)).unwrap();
        assert_eq!(json, "\"#FF8800\"");

        let parsed: Rgb = serde_json::from_str("\"hsl(120, 100%, 50%)\"").unwrap();
        assert_eq!(parsed, Rgb::new(0, 255, 0));

        assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
    }
}
