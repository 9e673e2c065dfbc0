//! # glow-color — OKLCH-native color science
//!
//! The leaf crate of the Glowlytics engine. Everything above it (harmony
//! generation, theme synthesis, exports) operates on the [`Color`] type
//! defined here.
//!
//! # Architecture
//!
//! ```text
//! hex string ("#1f77b4")
//!     │  Color::from_hex / Color::to_hex
//!     ▼
//! color.rs:    Color (OKLCH) ↔ Oklab ↔ linear sRGB ↔ sRGB ↔ HSL
//!     │
//!     ├─▶ contrast.rs: WCAG relative luminance, contrast ratio,
//!     │                readable-foreground selection
//!     │
//!     └─▶ simulate.rs: color-vision deficiency simulation
//!                      (Machado matrices in linear sRGB)
//! ```
//!
//! # Color space
//!
//! Colors are stored in OKLCH (perceptually uniform): rotating hue at
//! fixed lightness/chroma does not change perceived brightness, which is
//! what makes harmony and tint/shade generation produce visually even
//! results. HSL is also exposed as a lower-fidelity supporting space —
//! some classifications (color temperature) are defined on the HSL wheel.
//!
//! All operations are pure, synchronous and allocation-light; parse
//! failures surface as [`ColorParseError`] rather than silently
//! defaulting to black.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Lightness/chroma/hue variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod contrast;
pub mod simulate;

pub use color::{Color, ColorParseError, Hsl};
pub use simulate::{Deficiency, UnsupportedDeficiencyType};
