//! End-to-end scenarios: seed → harmony → theme → validated JSON.

use glowlytics::{
    Color, Deficiency, Harmony, Temperature, ThemeOptions, VariationMethod, contrast_ratio,
    export, harmony, simulate, synthesize, temperature, tints_and_shades, validate, variations,
};
use serde_json::Value;

fn palette(hexes: &[&str]) -> Vec<Color> {
    hexes.iter().map(|h| Color::from_hex(h).unwrap()).collect()
}

#[test]
fn tableau_palette_to_power_bi_theme() {
    let colors = palette(&["#1f77b4", "#ff7f0e", "#2ca02c"]);
    let options = ThemeOptions {
        background: Some(Color::from_hex("#ffffff").unwrap()),
        foreground: Some(Color::from_hex("#252423").unwrap()),
        table_accent: Some(Color::from_hex("#1f77b4").unwrap()),
        ..ThemeOptions::default()
    };

    let theme = synthesize(&colors, "Test Theme", &options);
    assert_eq!(theme.name, "Test Theme");
    assert_eq!(theme.table_accent, "#1f77b4");
    assert_eq!(theme.data_colors.len(), 12);

    let result = validate(&theme);
    assert!(result.valid, "errors: {:?}", result.errors);
}

#[test]
fn serialized_theme_matches_the_importer_schema() {
    let colors = palette(&["#1f77b4", "#ff7f0e", "#2ca02c"]);
    let theme = synthesize(&colors, "Schema Check", &ThemeOptions::default());
    let value: Value = serde_json::from_str(&export::theme_json(&theme)).unwrap();

    for field in [
        "name",
        "dataColors",
        "background",
        "foreground",
        "tableAccent",
        "good",
        "neutral",
        "bad",
        "maximum",
        "center",
        "minimum",
        "null",
    ] {
        assert!(value.get(field).is_some(), "missing field {field}");
    }
    // No description was supplied, so the key must be absent.
    assert!(value.get("description").is_none());

    // Every color field is a 7-character hex string.
    for entry in value["dataColors"].as_array().unwrap() {
        let hex = entry.as_str().unwrap();
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
    }
}

#[test]
fn harmony_seed_survives_the_whole_pipeline() {
    let seed = Color::from_hex("#9467bd").unwrap();
    let set = harmony(seed, Harmony::Tetradic);
    assert_eq!(set.len(), 4);
    assert_eq!(set[0].to_hex(), "#9467bd");

    let theme = synthesize(&set, "Tetradic", &ThemeOptions::default());
    assert_eq!(theme.data_colors[0], "#9467bd");
    assert!(validate(&theme).valid);
}

#[test]
fn temperature_scenarios() {
    assert_eq!(
        temperature(&palette(&["#FF0000", "#FF8800", "#FFFF00"])),
        Temperature::Warm
    );
    assert_eq!(
        temperature(&palette(&["#0000FF", "#00FFFF", "#0088FF"])),
        Temperature::Cool
    );
    assert_eq!(
        temperature(&palette(&["#FF0000", "#FF8800", "#0000FF", "#4400FF"])),
        Temperature::Neutral
    );
}

#[test]
fn derived_ramps_stay_parseable() {
    let seed = Color::from_hex("#17becf").unwrap();
    let ramp = tints_and_shades(seed, 5);
    for c in ramp.tints.iter().chain(&ramp.shades) {
        let hex = c.to_hex();
        assert!(Color::from_hex(&hex).is_ok(), "unparseable {hex}");
    }
    for c in variations(seed, VariationMethod::Tone) {
        assert!(Color::from_hex(&c.to_hex()).is_ok());
    }
}

#[test]
fn simulated_palette_keeps_its_contrast_bounds() {
    let colors = palette(&["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"]);
    for deficiency in [
        Deficiency::None,
        Deficiency::Protanomaly,
        Deficiency::Deuteranomaly,
        Deficiency::Tritanomaly,
        Deficiency::Achromatopsia,
    ] {
        for &color in &colors {
            let sim = simulate(color, deficiency);
            let ratio = contrast_ratio(sim, Color::WHITE);
            assert!((1.0..=21.01).contains(&ratio), "{deficiency:?}: ratio {ratio}");
        }
    }
}
