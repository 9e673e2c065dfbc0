//! # glow-theme — palette derivation and Power BI theme synthesis
//!
//! Everything a palette tool needs between "a seed color" and "a theme
//! file a BI tool will accept":
//!
//! ```text
//! seed Color
//!     │
//!     ├─▶ harmony.rs:     fixed hue-offset harmonies + tint/shade ramps
//!     │                   (OKLCH, gamut-mapped)
//!     │
//!     └─▶ variation.rs:   coarse 11-step tint/shade/tone previews
//!                         (RGB/HSL mixing, tinycolor-compatible)
//!
//! palette &[Color]
//!     │
//!     ├─▶ temperature.rs: warm / cool / neutral classification
//!     │
//!     └─▶ powerbi.rs:     PowerBiTheme synthesis + shape validation
//!             │
//!             └─▶ export.rs: JSON / CSS / Tailwind / tokens / SVG /
//!                            Coolors-URL serializers
//! ```
//!
//! All operations are pure and deterministic; validation returns
//! accumulated errors as data rather than failing fast.

// Lightness/chroma/hue variable names are inherently similar.
#![allow(clippy::similar_names)]
// Ramp step indices become lightness deltas (small ints, no precision loss).
#![allow(clippy::cast_precision_loss)]

pub mod export;
pub mod harmony;
pub mod powerbi;
pub mod temperature;
pub mod variation;

pub use harmony::{Harmony, Ramp, UnsupportedHarmonyType, harmony, tints_and_shades};
pub use powerbi::{PowerBiTheme, ThemeOptions, ThemeValidation, synthesize, validate};
pub use temperature::{Temperature, temperature};
pub use variation::{VariationMethod, variations};
