//! # Glowlytics — color science and theme-generation engine
//!
//! The engine behind the Glowlytics palette tool: color-space
//! conversion, WCAG contrast evaluation, color-vision deficiency
//! simulation, harmony/tint/shade derivation, palette temperature
//! analysis, and Power BI theme synthesis with shape validation.
//!
//! The UI shell supplies hex strings and enum values; the engine returns
//! derived colors, classifications and serializable theme records. Every
//! operation is a pure, synchronous function — no I/O, no shared state,
//! no retries.
//!
//! ```
//! use glowlytics::{Color, Harmony, ThemeOptions};
//!
//! let seed = Color::from_hex("#1f77b4")?;
//! let triad = glowlytics::harmony(seed, Harmony::Triadic);
//! let theme = glowlytics::synthesize(&triad, "Ocean", &ThemeOptions::default());
//! assert!(glowlytics::validate(&theme).valid);
//! # Ok::<(), glowlytics::ColorParseError>(())
//! ```

pub use glow_color::contrast::{
    AA_NORMAL, AAA_NORMAL, LIGHT_TEXT, best_foreground, contrast_ratio, dark_text,
    readable_foreground, relative_luminance,
};
pub use glow_color::simulate::simulate;
pub use glow_color::{Color, ColorParseError, Deficiency, Hsl, UnsupportedDeficiencyType};
pub use glow_theme::export;
pub use glow_theme::{
    Harmony, PowerBiTheme, Ramp, Temperature, ThemeOptions, ThemeValidation,
    UnsupportedHarmonyType, VariationMethod, harmony, synthesize, temperature, tints_and_shades,
    validate, variations,
};
