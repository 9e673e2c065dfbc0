//! Power BI theme synthesis and shape validation.
//!
//! A [`PowerBiTheme`] is the literal JSON schema Power BI Desktop's
//! custom-theme importer expects: twelve data colors plus a handful of
//! named semantic slots, every one a hex string. Synthesis is
//! deterministic — identical palette, name and options always produce a
//! byte-identical record.

use std::sync::LazyLock;

use glow_color::Color;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fixed semantic slots — Power BI defaults, not derived from the palette.
const GOOD: &str = "#118DFF";
const NEUTRAL: &str = "#E6E6E6";
const BAD: &str = "#FF312F";
const NULL: &str = "#FF7F00";

/// Default report background.
const DEFAULT_BACKGROUND: &str = "#ffffff";
/// Default report foreground (Power BI's near-black).
const DEFAULT_FOREGROUND: &str = "#252423";

/// A complete Power BI report theme.
///
/// Serializes to exactly the field set Power BI Desktop imports.
/// `description` is omitted entirely when absent — never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerBiTheme {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub data_colors: Vec<String>,
    pub background: String,
    pub foreground: String,
    pub table_accent: String,
    pub good: String,
    pub neutral: String,
    pub bad: String,
    pub maximum: String,
    pub center: String,
    pub minimum: String,
    pub null: String,
}

/// Style overrides for [`synthesize`]. Unset fields take the Power BI
/// defaults; `table_accent` defaults to the palette's first color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeOptions {
    pub description: Option<String>,
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub table_accent: Option<Color>,
}

/// Result of [`validate`]: `valid` iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Expand a palette into a complete Power BI theme.
///
/// Palettes shorter than 8 colors are cycle-padded to a full 12
/// `dataColors`; a palette already at 8+ is only truncated to 12, never
/// repeated. The `maximum`/`center`/`minimum` gradient stops come from
/// data colors 1–3, falling back to the first color for short palettes.
///
/// # Panics
///
/// The palette must be non-empty.
#[must_use]
pub fn synthesize(palette: &[Color], name: &str, options: &ThemeOptions) -> PowerBiTheme {
    assert!(!palette.is_empty(), "cannot synthesize a theme from an empty palette");

    let mut extended: Vec<String> = palette.iter().map(|c| c.to_hex()).collect();
    if extended.len() < 8 {
        while extended.len() < 12 {
            let cycle: Vec<String> = palette.iter().map(|c| c.to_hex()).collect();
            extended.extend(cycle);
        }
    }
    extended.truncate(12);

    let slot = |i: usize| -> String { extended.get(i).unwrap_or(&extended[0]).clone() };
    let table_accent = options.table_accent.map_or_else(|| slot(0), Color::to_hex);
    let (maximum, center, minimum) = (slot(1), slot(2), slot(3));

    PowerBiTheme {
        name: name.to_owned(),
        description: options.description.clone(),
        background: options
            .background
            .map_or_else(|| DEFAULT_BACKGROUND.to_owned(), Color::to_hex),
        foreground: options
            .foreground
            .map_or_else(|| DEFAULT_FOREGROUND.to_owned(), Color::to_hex),
        table_accent,
        good: GOOD.to_owned(),
        neutral: NEUTRAL.to_owned(),
        bad: BAD.to_owned(),
        maximum,
        center,
        minimum,
        null: NULL.to_owned(),
        data_colors: extended,
    }
}

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid hex pattern"));

/// Check a theme's shape invariants, accumulating every violation.
///
/// Advisory — gates the export action but never mutates or fails. A
/// well-formed synthesized theme always validates clean.
#[must_use]
pub fn validate(theme: &PowerBiTheme) -> ThemeValidation {
    let mut errors = Vec::new();

    if theme.name.is_empty() {
        errors.push(r#"missing or empty "name""#.to_owned());
    }
    if theme.data_colors.is_empty() {
        errors.push(r#""dataColors" must be a non-empty array"#.to_owned());
    }
    if theme.table_accent.is_empty() {
        errors.push(r#"missing or empty "tableAccent""#.to_owned());
    }

    for (i, color) in theme.data_colors.iter().enumerate() {
        if !HEX_RE.is_match(color) {
            errors.push(format!("dataColors[{i}] is not a valid hex color"));
        }
    }
    if !theme.table_accent.is_empty() && !HEX_RE.is_match(&theme.table_accent) {
        errors.push("tableAccent is not a valid hex color".to_owned());
    }

    ThemeValidation {
        valid: errors.is_empty(),
        errors,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(hexes: &[&str]) -> Vec<Color> {
        hexes.iter().map(|h| Color::from_hex(h).unwrap()).collect()
    }

    fn tableau3() -> Vec<Color> {
        palette(&["#1f77b4", "#ff7f0e", "#2ca02c"])
    }

    // ── Synthesis ───────────────────────────────────────────────────

    #[test]
    fn three_colors_expand_to_twelve() {
        let theme = synthesize(&tableau3(), "Test", &ThemeOptions::default());
        assert_eq!(theme.data_colors.len(), 12);
        // Each entry traces back to a repeated cycle of the 3 inputs.
        for (i, color) in theme.data_colors.iter().enumerate() {
            let expected = ["#1f77b4", "#ff7f0e", "#2ca02c"][i % 3];
            assert_eq!(color, expected, "dataColors[{i}]");
        }
    }

    #[test]
    fn seven_colors_cycle_pad_to_twelve() {
        let seven = palette(&[
            "#111111", "#222222", "#333333", "#444444", "#555555", "#666666", "#777777",
        ]);
        let theme = synthesize(&seven, "Test", &ThemeOptions::default());
        assert_eq!(theme.data_colors.len(), 12);
        assert_eq!(theme.data_colors[7], "#111111");
        assert_eq!(theme.data_colors[11], "#555555");
    }

    #[test]
    fn eight_plus_colors_are_not_repeated() {
        let nine = palette(&[
            "#111111", "#222222", "#333333", "#444444", "#555555", "#666666", "#777777",
            "#888888", "#999999",
        ]);
        let theme = synthesize(&nine, "Test", &ThemeOptions::default());
        assert_eq!(theme.data_colors.len(), 9);
        assert_eq!(theme.data_colors[8], "#999999");
    }

    #[test]
    fn long_palettes_truncate_to_twelve() {
        let fourteen: Vec<Color> = (0..14).map(|i| Color::rgb8(i * 10, i * 10, i * 10)).collect();
        let theme = synthesize(&fourteen, "Test", &ThemeOptions::default());
        assert_eq!(theme.data_colors.len(), 12);
    }

    #[test]
    fn defaults_applied() {
        let theme = synthesize(&tableau3(), "Test", &ThemeOptions::default());
        assert_eq!(theme.background, "#ffffff");
        assert_eq!(theme.foreground, "#252423");
        assert_eq!(theme.table_accent, "#1f77b4");
        assert_eq!(theme.good, "#118DFF");
        assert_eq!(theme.neutral, "#E6E6E6");
        assert_eq!(theme.bad, "#FF312F");
        assert_eq!(theme.null, "#FF7F00");
        assert!(theme.description.is_none());
    }

    #[test]
    fn gradient_slots_come_from_data_colors() {
        let theme = synthesize(&tableau3(), "Test", &ThemeOptions::default());
        assert_eq!(theme.maximum, "#ff7f0e");
        assert_eq!(theme.center, "#2ca02c");
        // Slot 3 exists because the palette was repeated.
        assert_eq!(theme.minimum, "#1f77b4");
    }

    #[test]
    fn single_color_falls_back_to_first() {
        let theme = synthesize(&palette(&["#1f77b4"]), "Mono", &ThemeOptions::default());
        assert_eq!(theme.maximum, "#1f77b4");
        assert_eq!(theme.center, "#1f77b4");
        assert_eq!(theme.minimum, "#1f77b4");
        assert_eq!(theme.data_colors.len(), 12);
    }

    #[test]
    fn options_override_defaults() {
        let options = ThemeOptions {
            description: Some("Quarterly review".to_owned()),
            background: Some(Color::from_hex("#fffbea").unwrap()),
            foreground: Some(Color::from_hex("#111827").unwrap()),
            table_accent: Some(Color::from_hex("#ff7f0e").unwrap()),
        };
        let theme = synthesize(&tableau3(), "Custom", &options);
        assert_eq!(theme.description.as_deref(), Some("Quarterly review"));
        assert_eq!(theme.background, "#fffbea");
        assert_eq!(theme.foreground, "#111827");
        assert_eq!(theme.table_accent, "#ff7f0e");
    }

    #[test]
    fn synthesis_is_deterministic() {
        let a = synthesize(&tableau3(), "Same", &ThemeOptions::default());
        let b = synthesize(&tableau3(), "Same", &ThemeOptions::default());
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    #[should_panic(expected = "empty palette")]
    fn empty_palette_panics() {
        let _ = synthesize(&[], "Empty", &ThemeOptions::default());
    }

    // ── Serialization shape ─────────────────────────────────────────

    #[test]
    fn description_absent_when_unset() {
        let theme = synthesize(&tableau3(), "Test", &ThemeOptions::default());
        let value = serde_json::to_value(&theme).unwrap();
        assert!(value.get("description").is_none());
        assert!(value.get("dataColors").is_some());
        assert!(value.get("tableAccent").is_some());
        assert!(value.get("null").is_some());
    }

    #[test]
    fn json_roundtrip() {
        let theme = synthesize(
            &tableau3(),
            "Round Trip",
            &ThemeOptions {
                description: Some("desc".to_owned()),
                ..ThemeOptions::default()
            },
        );
        let json = serde_json::to_string(&theme).unwrap();
        let back: PowerBiTheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }

    // ── Validation ──────────────────────────────────────────────────

    #[test]
    fn well_formed_theme_validates_clean() {
        let theme = synthesize(&tableau3(), "Valid", &ThemeOptions::default());
        let result = validate(&theme);
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn bad_data_color_is_named_by_index() {
        let mut theme = synthesize(&tableau3(), "Broken", &ThemeOptions::default());
        theme.data_colors[4] = "notacolor".to_owned();
        let result = validate(&theme);
        assert!(!result.valid);
        assert!(
            result.errors.iter().any(|e| e.contains("dataColors[4]")),
            "errors: {:?}",
            result.errors
        );
    }

    #[test]
    fn violations_accumulate() {
        let mut theme = synthesize(&tableau3(), "Broken", &ThemeOptions::default());
        theme.name.clear();
        theme.data_colors[0] = "oops".to_owned();
        theme.data_colors[1] = "#12345".to_owned();
        theme.table_accent = "blue".to_owned();
        let result = validate(&theme);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 4, "errors: {:?}", result.errors);
    }

    #[test]
    fn short_hex_and_uppercase_accepted() {
        let mut theme = synthesize(&tableau3(), "Short", &ThemeOptions::default());
        theme.data_colors[0] = "#ABC".to_owned();
        theme.data_colors[1] = "#FF7F0E".to_owned();
        assert!(validate(&theme).valid);
    }

    #[test]
    fn validate_does_not_mutate() {
        let theme = synthesize(&tableau3(), "Immutable", &ThemeOptions::default());
        let copy = theme.clone();
        let _ = validate(&theme);
        assert_eq!(theme, copy);
    }
}
