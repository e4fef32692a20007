//! src/panels/palette.rs
//!
//! CSS color strings from chart options mapped onto terminal colors.
//!
//! Terminals have no alpha channel, so translucent colors are blended onto a
//! black background.

use std::str::FromStr;

use ratatui::style::Color;

/// Parse `#RRGGBB`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
pub fn css_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') {
        return Color::from_str(s).ok();
    }
    let (body, has_alpha) = if let Some(b) = s.strip_prefix("rgba(") {
        (b, true)
    } else if let Some(b) = s.strip_prefix("rgb(") {
        (b, false)
    } else {
        return None;
    };
    let parts: Vec<&str> = body.strip_suffix(')')?.split(',').map(str::trim).collect();
    let expected = if has_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    let r = parts[0].parse::<u8>().ok()?;
    let g = parts[1].parse::<u8>().ok()?;
    let b = parts[2].parse::<u8>().ok()?;
    let alpha = if has_alpha {
        parts[3].parse::<f64>().ok()?.clamp(0.0, 1.0)
    } else {
        1.0
    };
    Some(blend(r, g, b, alpha))
}

/// Like [`css_color`] with an extra opacity applied.
pub fn css_color_with_opacity(s: &str, opacity: f64) -> Option<Color> {
    match css_color(s)? {
        Color::Rgb(r, g, b) => Some(blend(r, g, b, opacity.clamp(0.0, 1.0))),
        other => Some(other),
    }
}

fn blend(r: u8, g: u8, b: u8, alpha: f64) -> Color {
    let scale = |c: u8| (c as f64 * alpha).round() as u8;
    Color::Rgb(scale(r), scale(g), scale(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!(css_color("#FF5733"), Some(Color::Rgb(0xFF, 0x57, 0x33)));
        assert_eq!(css_color("#33a1ff"), Some(Color::Rgb(0x33, 0xA1, 0xFF)));
        assert_eq!(css_color("#GGGGGG"), None);
    }

    #[test]
    fn blends_alpha_onto_black() {
        assert_eq!(
            css_color("rgba(200, 100, 50, 0.5)"),
            Some(Color::Rgb(100, 50, 25))
        );
        assert_eq!(css_color("rgb(1,2,3)"), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(
            css_color_with_opacity("#4C4D4F", 0.5),
            Some(Color::Rgb(38, 39, 40))
        );
    }

    #[test]
    fn rejects_garbage() {
        // named colors are not part of the options vocabulary
        assert_eq!(css_color("red"), None);
        assert_eq!(css_color("rgba(1, 2, 3)"), None);
        assert_eq!(css_color("rgb(300, 0, 0)"), None);
    }
}
