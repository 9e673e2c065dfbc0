//! Color-vision deficiency simulation.
//!
//! Anomalous trichromacy uses the physiologically-based matrices of
//! Machado, Oliveira & Fernandes (2009), severity 0.6, applied in linear
//! sRGB. Achromatopsia is the Rec. 709 linear-luminance grayscale. All
//! transforms are deterministic and total for any in-range color.

use std::str::FromStr;

use thiserror::Error;

use crate::color::{Color, linear_to_srgb, srgb_to_linear};

/// An unrecognized deficiency name reached the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported deficiency type: {0:?}")]
pub struct UnsupportedDeficiencyType(pub String);

/// A color-vision deficiency model.
///
/// `None` is the identity — no simulation applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Deficiency {
    #[default]
    None,
    /// Reduced red sensitivity.
    Protanomaly,
    /// Reduced green sensitivity (the most common deficiency).
    Deuteranomaly,
    /// Reduced blue sensitivity.
    Tritanomaly,
    /// Total color blindness.
    Achromatopsia,
}

impl FromStr for Deficiency {
    type Err = UnsupportedDeficiencyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "protanomaly" => Ok(Self::Protanomaly),
            "deuteranomaly" => Ok(Self::Deuteranomaly),
            "tritanomaly" => Ok(Self::Tritanomaly),
            "achromatopsia" => Ok(Self::Achromatopsia),
            other => Err(UnsupportedDeficiencyType(other.to_owned())),
        }
    }
}

// Machado et al. 2009, severity 0.6, row-major on linear (r, g, b).
const PROTANOMALY: [[f64; 3]; 3] = [
    [0.385_450, 0.769_005, -0.154_455],
    [0.100_526, 0.829_802, 0.069_673],
    [-0.007_442, -0.022_190, 1.029_632],
];

const DEUTERANOMALY: [[f64; 3]; 3] = [
    [0.547_494, 0.607_765, -0.155_259],
    [0.181_692, 0.781_742, 0.036_566],
    [-0.010_410, 0.027_275, 0.983_136],
];

const TRITANOMALY: [[f64; 3]; 3] = [
    [1.104_996, -0.046_633, -0.058_363],
    [-0.032_137, 0.971_635, 0.060_503],
    [0.001_336, 0.317_922, 0.680_742],
];

/// Simulate how a color appears under the given deficiency.
///
/// Deterministic: the same input always yields the same output.
/// [`Deficiency::None`] returns the input unchanged.
#[must_use]
pub fn simulate(color: Color, deficiency: Deficiency) -> Color {
    let matrix = match deficiency {
        Deficiency::None => return color,
        Deficiency::Protanomaly => &PROTANOMALY,
        Deficiency::Deuteranomaly => &DEUTERANOMALY,
        Deficiency::Tritanomaly => &TRITANOMALY,
        Deficiency::Achromatopsia => return grayscale(color),
    };

    let (r, g, b) = color.to_srgb();
    let (lr, lg, lb) = (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));

    let apply = |row: &[f64; 3]| -> f64 {
        (row[0] * lr + row[1] * lg + row[2] * lb).clamp(0.0, 1.0)
    };

    Color::srgb(
        linear_to_srgb(apply(&matrix[0])),
        linear_to_srgb(apply(&matrix[1])),
        linear_to_srgb(apply(&matrix[2])),
    )
}

/// Collapse a color to its Rec. 709 luminance gray.
fn grayscale(color: Color) -> Color {
    let (r, g, b) = color.to_srgb();
    let y = 0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b);
    let v = linear_to_srgb(y.clamp(0.0, 1.0));
    Color::srgb(v, v, v)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
