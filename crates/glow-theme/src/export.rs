//! Multi-format palette and theme serializers.
//!
//! Text formats only — rendering a palette to a raster image is an
//! external capability these hex sequences are handed to.

use glow_color::{Color, ColorParseError};
use serde_json::{Map, Value, json};

use crate::powerbi::PowerBiTheme;

/// CSS custom properties, one `--color-palette-N` per palette entry.
#[must_use]
pub fn css_variables(palette: &[Color]) -> String {
    let mut css = String::from(":root {\n");
    for (i, color) in palette.iter().enumerate() {
        css.push_str(&format!("  --color-palette-{}: {};\n", i + 1, color.to_hex()));
    }
    css.push_str("}\n");
    css
}

/// A `tailwind.config.js` snippet extending the theme with `palette-N`
/// color keys.
#[must_use]
pub fn tailwind_config(palette: &[Color]) -> String {
    let mut colors = Map::new();
    for (i, color) in palette.iter().enumerate() {
        colors.insert(format!("palette-{}", i + 1), Value::String(color.to_hex()));
    }
    let map = serde_json::to_string_pretty(&Value::Object(colors))
        .unwrap_or_else(|_| "{}".to_owned());

    format!(
        "// tailwind.config.js\nmodule.exports = {{\n  theme: {{\n    extend: {{\n      colors: {map}\n    }}\n  }}\n}};\n"
    )
}

/// Style Dictionary design tokens: `color.color-palette-N.value`.
#[must_use]
pub fn style_dictionary_tokens(palette: &[Color]) -> String {
    let mut tokens = Map::new();
    for (i, color) in palette.iter().enumerate() {
        tokens.insert(
            format!("color-palette-{}", i + 1),
            json!({ "value": color.to_hex() }),
        );
    }
    serde_json::to_string_pretty(&json!({ "color": tokens })).unwrap_or_else(|_| "{}".to_owned())
}

/// A 200×50 SVG swatch strip of equal-width rects.
#[must_use]
pub fn svg_swatch(palette: &[Color]) -> String {
    const WIDTH: f64 = 200.0;
    const HEIGHT: f64 = 50.0;

    let rect_width = if palette.is_empty() {
        WIDTH
    } else {
        WIDTH / palette.len() as f64
    };
    let rects: Vec<String> = palette
        .iter()
        .enumerate()
        .map(|(i, color)| {
            format!(
                r#"<rect x="{x}" y="0" width="{rect_width}" height="{HEIGHT}" fill="{fill}" />"#,
                x = i as f64 * rect_width,
                fill = color.to_hex(),
            )
        })
        .collect();

    format!(
        "<svg width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" xmlns=\"http://www.w3.org/2000/svg\">\n{}\n</svg>",
        rects.join("\n")
    )
}

/// Pretty-printed theme JSON — the export preview and download payload.
#[must_use]
pub fn theme_json(theme: &PowerBiTheme) -> String {
    serde_json::to_string_pretty(theme)
        .unwrap_or_else(|_| r#"{ "error": "unable to preview theme" }"#.to_owned())
}

/// A shareable `coolors.co` URL for the palette.
#[must_use]
pub fn coolors_url(palette: &[Color]) -> String {
    let joined: Vec<String> = palette
        .iter()
        .map(|c| c.to_hex().trim_start_matches('#').to_owned())
        .collect();
    format!("https://coolors.co/{}", joined.join("-"))
}

/// Parse the palette out of a `coolors.co` URL.
///
/// # Errors
///
/// Returns [`ColorParseError`] when the URL is not a coolors.co palette
/// link or any segment is not a valid hex color.
pub fn parse_coolors_url(url: &str) -> Result<Vec<Color>, ColorParseError> {
    let rest = url
        .strip_prefix("https://coolors.co/")
        .or_else(|| url.strip_prefix("http://coolors.co/"))
        .ok_or_else(|| ColorParseError(url.to_owned()))?;

    let segment = rest.rsplit('/').next().unwrap_or(rest);
    if segment.is_empty() {
        return Err(ColorParseError(url.to_owned()));
    }

    segment
        .split('-')
        .map(|part| Color::from_hex(&format!("#{part}")))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
