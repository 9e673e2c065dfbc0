//! The [`Color`] value type and its conversions.
//!
//! Conversion pipeline: OKLCH ↔ Oklab ↔ linear sRGB ↔ sRGB, using the
//! matrices from Björn Ottosson's Oklab specification
//! (<https://bottosson.github.io/posts/oklab/>). HSL is derived from the
//! sRGB form with the textbook max/min algorithm.
//!
//! Out-of-gamut OKLCH values are handled by [`Color::to_gamut`], which
//! reduces chroma at fixed lightness/hue until the color fits in sRGB.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A malformed or unrecognized color string.
///
/// Carries the offending input so callers can report it. The engine never
/// substitutes a default color on parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color string: {0:?}")]
pub struct ColorParseError(pub String);

/// A color in the OKLCH color space.
///
/// OKLCH is the cylindrical form of Oklab. Equal numeric steps produce
/// equal visual steps, so palette derivation (hue rotation, lightness
/// ramps) happens here rather than in HSL, where a hue rotation alone
/// changes perceived brightness.
#[derive(Clone, Copy)]
pub struct Color {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,

    /// Chroma: 0.0 (gray) to roughly 0.37 at the most vivid sRGB colors.
    /// Unbounded in theory; the sRGB gamut limits practical values.
    pub c: f64,

    /// Hue angle in degrees, normalized to [0, 360).
    pub h: f64,
}

/// A color in HSL form: hue in degrees, saturation and lightness in
/// percent (0–100).
///
/// Supporting representation only — derivation happens in OKLCH.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from OKLCH values.
    #[inline]
    #[must_use]
    pub fn oklch(l: f64, c: f64, h: f64) -> Self {
        Self {
            l,
            c,
            h: normalize_hue(h),
        }
    }

    /// Create a color from sRGB components in the 0.0–1.0 range.
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self { l, c, h }
    }

    /// Create a color from 8-bit sRGB components.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Create a color from HSL values.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl_to_rgb(hsl);
        Self::rgb8(r, g, b)
    }

    /// Parse a hex color string.
    ///
    /// Accepts `#RGB` and `#RRGGBB`, with or without the leading `#`.
    /// Alpha forms are rejected — the engine boundary is opaque sRGB.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] naming the offending string.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        parse_hex(s).ok_or_else(|| ColorParseError(s.to_owned()))
    }

    /// Pure black.
    pub const BLACK: Self = Self {
        l: 0.0,
        c: 0.0,
        h: 0.0,
    };

    /// Pure white.
    pub const WHITE: Self = Self {
        l: 1.0,
        c: 0.0,
        h: 0.0,
    };

    /// Whether this color has no visible chroma.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-7
    }

    // ─── Perceptual operations ───────────────────────────────────────────

    /// Increase lightness by `amount`, clamped to [0, 1].
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        Self {
            l: (self.l + amount).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Decrease lightness by `amount`, clamped to [0, 1].
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        Self {
            l: (self.l - amount).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Set lightness to an absolute value, clamped to [0, 1].
    #[inline]
    #[must_use]
    pub fn set_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Increase chroma by `amount`.
    #[inline]
    #[must_use]
    pub fn saturate(self, amount: f64) -> Self {
        Self {
            c: (self.c + amount).max(0.0),
            ..self
        }
    }

    /// Decrease chroma by `amount`, floored at 0.
    #[inline]
    #[must_use]
    pub fn desaturate(self, amount: f64) -> Self {
        Self {
            c: (self.c - amount).max(0.0),
            ..self
        }
    }

    /// Set chroma to an absolute value, floored at 0.
    #[inline]
    #[must_use]
    pub fn set_chroma(self, c: f64) -> Self {
        Self {
            c: c.max(0.0),
            ..self
        }
    }

    /// Scale chroma by `factor`, floored at 0.
    #[inline]
    #[must_use]
    pub fn scale_chroma(self, factor: f64) -> Self {
        Self {
            c: (self.c * factor).max(0.0),
            ..self
        }
    }

    /// Rotate the hue by `degrees`, wrapping around 360°.
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Mix this color with another in OKLCH space.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`. Hue takes the
    /// shortest arc around the wheel; mixing with an achromatic color
    /// keeps the chromatic partner's hue.
    #[must_use]
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let h = if self.is_achromatic() {
            other.h
        } else if other.is_achromatic() {
            self.h
        } else {
            interpolate_hue(self.h, other.h, t)
        };
        Self {
            l: self.l + (other.l - self.l) * t,
            c: self.c + (other.c - self.c) * t,
            h,
        }
    }

    // ─── Conversions out ─────────────────────────────────────────────────

    /// Convert to sRGB, channels clamped to [0, 1].
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Convert to 8-bit sRGB with rounding.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Format as a lowercase `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Convert to HSL (hue degrees, saturation/lightness percent).
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_rgb8();
        rgb_to_hsl(r, g, b)
    }

    // ─── Gamut ───────────────────────────────────────────────────────────

    /// Whether this color is representable in sRGB without clamping.
    ///
    /// The channel bounds carry a tiny tolerance so colors parsed
    /// straight from hex (which land within float noise of a channel
    /// boundary) still count as in-gamut.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        const EPS: f64 = 1e-9;
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        let fits = |v: f64| (-EPS..=1.0 + EPS).contains(&v);
        fits(r) && fits(g) && fits(b)
    }

    /// Map to the nearest in-gamut sRGB color at fixed lightness and hue.
    ///
    /// Binary-searches for the largest chroma that still fits. Hue
    /// rotations and chroma boosts should pass through here before being
    /// serialized to hex.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }

        let mut lo = 0.0_f64;
        let mut hi = self.c;
        for _ in 0..24 {
            let mid = (lo + hi) * 0.5;
            if (Self { c: mid, ..self }).in_srgb_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self { c: lo, ..self }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-7;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.is_achromatic() || other.is_achromatic() || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Hue arithmetic ──────────────────────────────────────────────────────

/// Normalize a hue angle to [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference along the shortest arc.
#[inline]
#[must_use]
pub fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Interpolate between two hue angles along the shortest arc.
#[inline]
fn interpolate_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let mut diff = h2 - h1;
    if diff > 180.0 {
        diff -= 360.0;
    } else if diff < -180.0 {
        diff += 360.0;
    }
    normalize_hue(h1 + diff * t)
}

// ─── OKLCH ↔ Oklab ──────────────────────────────────────────────────────

#[inline]
fn oklch_to_oklab(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let h_rad = h.to_radians();
    (l, c * h_rad.cos(), c * h_rad.sin())
}

#[inline]
fn oklab_to_oklch(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let c = a.hypot(b);
    let h = if c < 1e-9 {
        // Achromatic: hue is undefined, pin to 0.
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    (l, c, h)
}

// ─── Oklab ↔ linear sRGB ────────────────────────────────────────────────
//
// Both directions pass through the LMS cone-response space. Matrix
// coefficients are Ottosson's published values.

fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = l_ok + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
    let m_ = l_ok - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
    let s_ = l_ok - 0.089_484_177_5 * a - 1.291_485_548_0 * b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    (
        4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s,
        -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s,
        -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s,
    )
}

fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
    let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
    let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    (
        0.210_454_255_3 * l_ + 0.793_617_785_0 * m_ - 0.004_072_046_8 * s_,
        1.977_998_495_1 * l_ - 2.428_592_205_0 * m_ + 0.450_593_709_9 * s_,
        0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766_0 * s_,
    )
}

// ─── sRGB transfer function ─────────────────────────────────────────────

/// Apply the sRGB gamma curve to a linear component.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Remove the sRGB gamma curve from a component.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Composite conversions ──────────────────────────────────────────────

fn srgb_to_oklch(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (l, a, b_ok) = linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    oklab_to_oklch(l, a, b_ok)
}

fn oklch_to_srgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let (l_ok, a, b) = oklch_to_oklab(l, c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l_ok, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── RGB ↔ HSL ──────────────────────────────────────────────────────────

/// Convert 8-bit sRGB to HSL (hue degrees, saturation/lightness percent).
#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic.
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: h / 6.0 * 360.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Convert HSL (hue degrees, saturation/lightness percent) to 8-bit sRGB.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> (u8, u8, u8) {
    let h = normalize_hue(hsl.h) / 360.0;
    let s = (hsl.s / 100.0).clamp(0.0, 1.0);
    let l = (hsl.l / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        let v = to_u8(l);
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let hue_to_rgb = |t: f64| -> f64 {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };

    (
        to_u8(hue_to_rgb(h + 1.0 / 3.0)),
        to_u8(hue_to_rgb(h)),
        to_u8(hue_to_rgb(h - 1.0 / 3.0)),
    )
}

// ─── Hex parsing ────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);

    match s.len() {
        3 => {
            let r = hex_digit(s.as_bytes()[0])?;
            let g = hex_digit(s.as_bytes()[1])?;
            let b = hex_digit(s.as_bytes()[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => {
            let r = hex_byte(&s.as_bytes()[0..2])?;
            let g = hex_byte(&s.as_bytes()[2..4])?;
            let b = hex_byte(&s.as_bytes()[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = hex_digit(bytes[0])?;
    let lo = hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a 0.0–1.0 float to u8 with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
