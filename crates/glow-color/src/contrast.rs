//! WCAG 2.1 contrast evaluation and readable-foreground selection.
//!
//! Relative luminance is computed in sRGB space per the WCAG definition;
//! the contrast ratio `(L_lighter + 0.05) / (L_darker + 0.05)` ranges
//! from 1:1 (identical) to 21:1 (black on white). 4.5:1 is the AA
//! threshold for normal body text.

use crate::color::{Color, srgb_to_linear};

/// WCAG AA contrast threshold for normal text.
pub const AA_NORMAL: f64 = 4.5;

/// WCAG AAA contrast threshold for normal text.
pub const AAA_NORMAL: f64 = 7.0;

/// The light foreground candidate: white.
pub const LIGHT_TEXT: Color = Color::WHITE;

/// The dark foreground candidate.
///
/// The canonical dark text color is `#111827` (a near-black with a faint
/// blue cast), chosen over pure `#000000`. One named constant — call
/// sites must not duplicate the literal.
pub fn dark_text() -> Color {
    // #111827
    Color::rgb8(0x11, 0x18, 0x27)
}

/// Relative luminance per WCAG 2.1, in [0, 1].
///
/// Each sRGB channel is linearized (`c / 12.92` below 0.03928, else
/// `((c + 0.055) / 1.055)^2.4`) and weighted 0.2126 / 0.7152 / 0.0722.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// WCAG contrast ratio between two colors, in [1, 21].
///
/// Symmetric: the result does not depend on argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Choose a readable foreground ([`LIGHT_TEXT`] or [`dark_text`]) for a
/// background.
///
/// Prefers whichever candidate reaches [`AA_NORMAL`]; when both or
/// neither do, the higher-contrast candidate wins. Total — always
/// returns one of the two candidates.
#[must_use]
pub fn readable_foreground(background: Color) -> Color {
    best_foreground(background, LIGHT_TEXT, dark_text())
}

/// Pick the more readable of two foreground candidates for a background.
///
/// Order-independent: swapping `a` and `b` never changes the result. A
/// candidate that reaches [`AA_NORMAL`] beats one that does not; within
/// the same band the higher ratio wins; an exact ratio tie is broken by
/// hex string so the choice stays deterministic either way around.
#[must_use]
pub fn best_foreground(background: Color, a: Color, b: Color) -> Color {
    let ra = contrast_ratio(background, a);
    let rb = contrast_ratio(background, b);

    match (ra >= AA_NORMAL, rb >= AA_NORMAL) {
        (true, false) => a,
        (false, true) => b,
        _ => {
            if ra > rb {
                a
            } else if rb > ra {
                b
            } else if a.to_hex() <= b.to_hex() {
                a
            } else {
                b
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(relative_luminance(Color::BLACK), 0.0, 1e-4));
    }

    #[test]
    fn luminance_white_is_one() {
        assert!(approx_eq(relative_luminance(Color::WHITE), 1.0, 1e-4));
    }

    #[test]
    fn luminance_channel_weights() {
        assert!(approx_eq(relative_luminance(Color::srgb(1.0, 0.0, 0.0)), 0.2126, 1e-3));
        assert!(approx_eq(relative_luminance(Color::srgb(0.0, 1.0, 0.0)), 0.7152, 1e-3));
        assert!(approx_eq(relative_luminance(Color::srgb(0.0, 0.0, 1.0)), 0.0722, 1e-3));
    }

    #[test]
    fn luminance_in_unit_interval() {
        for hex in ["#1f77b4", "#ff7f0e", "#2ca02c", "#e377c2", "#17becf"] {
            let lum = relative_luminance(Color::from_hex(hex).unwrap());
            assert!((0.0..=1.0).contains(&lum), "{hex} luminance {lum}");
        }
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn black_on_white_is_21() {
        assert!(approx_eq(contrast_ratio(Color::BLACK, Color::WHITE), 21.0, 0.05));
    }

    #[test]
    fn same_color_is_1() {
        let c = Color::from_hex("#1f77b4").unwrap();
        assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-9));
    }

    #[test]
    fn symmetric() {
        let a = Color::srgb(0.8, 0.2, 0.3);
        let b = Color::srgb(0.1, 0.1, 0.4);
        assert!(approx_eq(contrast_ratio(a, b), contrast_ratio(b, a), 1e-12));
    }

    #[test]
    fn bounded_by_1_and_21() {
        let samples = ["#000000", "#ffffff", "#1f77b4", "#ff312f", "#118dff", "#7f7f7f"];
        for a in samples {
            for b in samples {
                let ratio = contrast_ratio(
                    Color::from_hex(a).unwrap(),
                    Color::from_hex(b).unwrap(),
                );
                assert!((1.0..=21.01).contains(&ratio), "{a}/{b} ratio {ratio}");
            }
        }
    }

    // ── Foreground selection ────────────────────────────────────────

    #[test]
    fn light_text_on_dark_background() {
        let fg = readable_foreground(Color::from_hex("#16213e").unwrap());
        assert_eq!(fg.to_hex(), "#ffffff");
    }

    #[test]
    fn dark_text_on_light_background() {
        let fg = readable_foreground(Color::from_hex("#fffbea").unwrap());
        assert_eq!(fg.to_hex(), "#111827");
    }

    #[test]
    fn always_returns_a_candidate() {
        // Mid-tones where neither candidate may reach AA.
        for hex in ["#808080", "#7f7f7f", "#996633", "#668899"] {
            let fg = readable_foreground(Color::from_hex(hex).unwrap());
            let hex_fg = fg.to_hex();
            assert!(hex_fg == "#ffffff" || hex_fg == "#111827", "got {hex_fg}");
        }
    }

    #[test]
    fn candidate_order_is_irrelevant() {
        let candidates = [
            Color::WHITE,
            Color::BLACK,
            dark_text(),
            Color::from_hex("#1f77b4").unwrap(),
            Color::from_hex("#ffc300").unwrap(),
        ];
        let backgrounds = ["#ffffff", "#000000", "#808080", "#16213e", "#fffbea"];
        for bg in backgrounds {
            let bg = Color::from_hex(bg).unwrap();
            for a in candidates {
                for b in candidates {
                    assert_eq!(
                        best_foreground(bg, a, b).to_hex(),
                        best_foreground(bg, b, a).to_hex(),
                        "asymmetric for bg {} candidates {} / {}",
                        bg.to_hex(),
                        a.to_hex(),
                        b.to_hex()
                    );
                }
            }
        }
    }

    #[test]
    fn aa_candidate_beats_higher_contrast_is_not_required() {
        // When exactly one candidate reaches AA it wins even if the other
        // is closer in style; on white, #111827 passes AA and white is 1:1.
        let fg = best_foreground(Color::WHITE, Color::WHITE, dark_text());
        assert_eq!(fg.to_hex(), "#111827");
    }
}
