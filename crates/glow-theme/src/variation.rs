//! Coarse 11-step tint/shade/tone previews.
//!
//! These reproduce the classic tinycolor semantics the variation previews
//! were built on: tints mix toward white and shades toward black per RGB
//! channel, tones desaturate and darken in HSL. The tone ramp is a
//! documented approximation of "add grey", not a tonal-color-space
//! computation — keep it that way.

use std::str::FromStr;

use glow_color::color::{Hsl, hsl_to_rgb};
use glow_color::{Color, ColorParseError};

/// How to derive a variation ramp from a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariationMethod {
    /// Mix toward white.
    Tint,
    /// Mix toward black.
    Shade,
    /// Desaturate and slightly darken ("add grey").
    Tone,
}

impl FromStr for VariationMethod {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tint" => Ok(Self::Tint),
            "shade" => Ok(Self::Shade),
            "tone" => Ok(Self::Tone),
            other => Err(ColorParseError(other.to_owned())),
        }
    }
}

/// Generate the 11-color variation ramp for a seed.
///
/// Step `i` in `0..=10` applies `10 * i` percent of the method, so the
/// first entry is always the seed itself and the last is the full
/// application (white for tints, black for shades).
#[must_use]
pub fn variations(seed: Color, method: VariationMethod) -> Vec<Color> {
    (0..=10)
        .map(|i| {
            let percentage = f64::from(i) * 10.0;
            match method {
                VariationMethod::Tint => mix_rgb(seed, (255, 255, 255), percentage),
                VariationMethod::Shade => mix_rgb(seed, (0, 0, 0), percentage),
                VariationMethod::Tone => tone(seed, percentage),
            }
        })
        .collect()
}

/// Mix `percentage`% toward a target, per 8-bit RGB channel.
fn mix_rgb(color: Color, target: (u8, u8, u8), percentage: f64) -> Color {
    let t = (percentage / 100.0).clamp(0.0, 1.0);
    let (r, g, b) = color.to_rgb8();
    let channel = |from: u8, to: u8| -> u8 {
        let mixed = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            (mixed + 0.5).clamp(0.0, 255.0) as u8
        }
    };
    let (tr, tg, tb) = target;
    Color::rgb8(channel(r, tr), channel(g, tg), channel(b, tb))
}

/// Approximate a tone: drop `percentage / 2` HSL saturation points and
/// `percentage / 4` lightness points.
fn tone(color: Color, percentage: f64) -> Color {
    let hsl = color.to_hsl();
    let toned = Hsl {
        h: hsl.h,
        s: (hsl.s - percentage / 2.0).clamp(0.0, 100.0),
        l: (hsl.l - percentage / 4.0).clamp(0.0, 100.0),
    };
    let (r, g, b) = hsl_to_rgb(toned);
    Color::rgb8(r, g, b)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
