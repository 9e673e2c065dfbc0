//! Harmony generation and perceptual tint/shade ramps.
//!
//! Harmonies rotate the seed's OKLCH hue by fixed offsets while holding
//! lightness and chroma, so every member reads as "the same color,
//! elsewhere on the wheel". HSL would not give that: rotating HSL hue
//! changes perceived brightness and produces visibly uneven sets.

use std::str::FromStr;

use glow_color::Color;
use thiserror::Error;

/// An unrecognized harmony name reached the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported harmony type: {0:?}")]
pub struct UnsupportedHarmonyType(pub String);

/// A fixed hue-offset pattern for deriving related colors from a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Harmony {
    /// Seed + 180°.
    Complementary,
    /// Seed + 120° + 240°.
    Triadic,
    /// Seed ± 30°.
    Analogous,
    /// Seed + 150° + 210°.
    SplitComplementary,
    /// Seed + 90° + 180° + 270°.
    Tetradic,
}

impl Harmony {
    /// Hue offsets in degrees for the non-seed members, in output order.
    #[must_use]
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Complementary => &[180.0],
            Self::Triadic => &[120.0, 240.0],
            Self::Analogous => &[30.0, -30.0],
            Self::SplitComplementary => &[150.0, 210.0],
            Self::Tetradic => &[90.0, 180.0, 270.0],
        }
    }
}

impl FromStr for Harmony {
    type Err = UnsupportedHarmonyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complementary" => Ok(Self::Complementary),
            "triadic" => Ok(Self::Triadic),
            "analogous" => Ok(Self::Analogous),
            "split-complementary" => Ok(Self::SplitComplementary),
            "tetradic" => Ok(Self::Tetradic),
            other => Err(UnsupportedHarmonyType(other.to_owned())),
        }
    }
}

/// Generate a harmony set from a seed color, seed always first.
///
/// Lightness and chroma are held from the seed; rotated members are
/// gamut-mapped, since a hue that supports the seed's chroma may not
/// support it elsewhere on the wheel.
#[must_use]
pub fn harmony(seed: Color, kind: Harmony) -> Vec<Color> {
    let mut colors = Vec::with_capacity(1 + kind.offsets().len());
    colors.push(seed);
    for &offset in kind.offsets() {
        colors.push(seed.shift_hue(offset).to_gamut());
    }
    colors
}

/// A tint/shade ramp derived from one seed.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    /// Progressively lighter variants, nearest-to-seed first.
    pub tints: Vec<Color>,
    /// Progressively darker variants, nearest-to-seed first.
    pub shades: Vec<Color>,
}

/// Generate `steps` tints and `steps` shades of a seed color.
///
/// Step `i` (1-based) lightens or darkens by `0.15 * i` OKLCH lightness,
/// clamped at the [0, 1] boundary. Tints lose a little chroma per step
/// (`× (1 - 0.05 * i)`, floored at 0) so near-white ends don't read
/// oversaturated; shades gain a little (`× (1 + 0.05 * i)`) and are
/// gamut-mapped. Hue is held throughout. Tint lightness is non-decreasing
/// in `i` and shade lightness non-increasing, for any seed.
#[must_use]
pub fn tints_and_shades(seed: Color, steps: usize) -> Ramp {
    let mut tints = Vec::with_capacity(steps);
    let mut shades = Vec::with_capacity(steps);

    for i in 1..=steps {
        let delta = 0.15 * i as f64;
        let scale = 0.05 * i as f64;
        tints.push(seed.lighten(delta).scale_chroma((1.0 - scale).max(0.0)).to_gamut());
        shades.push(seed.darken(delta).scale_chroma(1.0 + scale).to_gamut());
    }

    Ramp { tints, shades }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
