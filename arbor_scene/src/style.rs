// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors on top of the [`color`] crate.

use color::{AlphaColor, Srgb};

use crate::error::SceneError;

/// Straight-alpha sRGB color used for fills and strokes.
pub type Color = AlphaColor<Srgb>;

/// Fully transparent; the default fill and stroke.
pub const TRANSPARENT: Color = AlphaColor::TRANSPARENT;

/// Parse a CSS color (`"red"`, `"#ff0000"`, `"rgb(255 0 0 / 50%)"`, ...).
pub fn parse_color(token: &str) -> Result<Color, SceneError> {
    color::parse_color(token)
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|e| SceneError::InvalidColor {
            token: token.to_owned(),
            reason: e.to_string(),
        })
}

/// `color` with its alpha multiplied by `opacity`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "color channels are f32; opacity is in 0..=1"
)]
pub fn with_opacity(color: Color, opacity: f64) -> Color {
    color.multiply_alpha(opacity as f32)
}

/// Alpha channel.
pub fn alpha(color: Color) -> f32 {
    color.components[3]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_names_and_hex() {
        let red = parse_color("red").unwrap();
        assert_eq!(red, color::palette::css::RED);
        let hex = parse_color("#ff000080").unwrap();
        assert!((alpha(hex) - 128.0 / 255.0).abs() < 1e-3);
        assert_eq!(alpha(parse_color("transparent").unwrap()), 0.0);
    }

    #[test]
    fn rejects_unknown_tokens() {
        let err = parse_color("not-a-color").unwrap_err();
        assert!(matches!(err, SceneError::InvalidColor { ref token, .. } if token == "not-a-color"));
    }

    #[test]
    fn opacity_scales_alpha() {
        let c = with_opacity(color::palette::css::RED, 0.5);
        assert_eq!(alpha(c), 0.5);
        assert_eq!(alpha(with_opacity(TRANSPARENT, 1.0)), 0.0);
    }
}
