//! Warm / cool / neutral classification of a palette.
//!
//! Classification happens on the HSL hue wheel, where the warm band
//! [0°, 90°) covers reds through yellows and the cool band [210°, 330°)
//! covers blues through purples. OKLCH hue would not work here: sRGB
//! yellow sits near 110° in OKLCH, outside any sensible warm band.

use std::fmt;

use glow_color::Color;

/// The overall temperature of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Neutral => "neutral",
        })
    }
}

/// Classify a palette as warm, cool or neutral.
///
/// Counts colors whose HSL hue falls in the warm band [0°, 90°) or the
/// cool band [210°, 330°); the palette is warm when warm colors outnumber
/// cool ones by more than 1.5×, cool in the mirrored case, and neutral
/// otherwise (including palettes of greens, near-greys and mixes).
///
/// # Panics
///
/// The palette must be non-empty; an empty palette has no temperature.
#[must_use]
pub fn temperature(palette: &[Color]) -> Temperature {
    assert!(!palette.is_empty(), "temperature of an empty palette is undefined");

    let mut warm = 0_usize;
    let mut cool = 0_usize;
    for color in palette {
        let hsl = color.to_hsl();
        // Achromatic colors report hue 0 but carry no temperature.
        if hsl.s < 1.0 {
            continue;
        }
        if (0.0..90.0).contains(&hsl.h) {
            warm += 1;
        } else if (210.0..330.0).contains(&hsl.h) {
            cool += 1;
        }
    }

    let warm = warm as f64;
    let cool = cool as f64;
    if warm > 1.5 * cool {
        Temperature::Warm
    } else if cool > 1.5 * warm {
        Temperature::Cool
    } else {
        Temperature::Neutral
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
