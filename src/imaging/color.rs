//! Palette resolution: `#rrggbb` strings to RGB pixels, and the role each
//! named color plays on the card.

use crate::config::ColorsConfig;
use image::Rgb;

/// Parse a `#rrggbb` (or bare `rrggbb`) hex color.
///
/// Short forms like `#fff` are rejected so every palette entry is explicit.
pub fn parse_hex_color(s: &str) -> Option<Rgb<u8>> {
    let hex_digits = s.trim().trim_start_matches('#');
    if hex_digits.len() != 6 {
        return None;
    }
    let bytes = hex::decode(hex_digits).ok()?;
    Some(Rgb([bytes[0], bytes[1], bytes[2]]))
}

/// Colors by role on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb<u8>,
    pub panel: Rgb<u8>,
    pub accent: Rgb<u8>,
    pub panel_text: Rgb<u8>,
    pub title: Rgb<u8>,
    pub subtitle: Rgb<u8>,
    pub description: Rgb<u8>,
    pub badge: Rgb<u8>,
    pub badge_text: Rgb<u8>,
}

impl Palette {
    /// Map the named brand colors onto card roles.
    ///
    /// Returns the name and value of the first entry that fails to parse.
    pub fn from_config(colors: &ColorsConfig) -> Result<Self, (&'static str, String)> {
        let resolve = |name: &'static str, value: &str| {
            parse_hex_color(value).ok_or_else(|| (name, value.to_string()))
        };
        let blue = resolve("blue", &colors.blue)?;
        let orange = resolve("orange", &colors.orange)?;
        let white = resolve("white", &colors.white)?;
        let gray_dark = resolve("gray_dark", &colors.gray_dark)?;

        Ok(Self {
            background: white,
            panel: blue,
            accent: orange,
            panel_text: white,
            title: gray_dark,
            subtitle: blue,
            description: gray_dark,
            badge: orange,
            badge_text: white,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_hash() {
        assert_eq!(parse_hex_color("#0066cc"), Some(Rgb([0x00, 0x66, 0xcc])));
    }

    #[test]
    fn parse_without_hash() {
        assert_eq!(parse_hex_color("ff6600"), Some(Rgb([0xff, 0x66, 0x00])));
    }

    #[test]
    fn parse_uppercase_and_whitespace() {
        assert_eq!(parse_hex_color("  #FFFFFF "), Some(Rgb([255, 255, 255])));
    }

    #[test]
    fn parse_rejects_short_form() {
        assert_eq!(parse_hex_color("#fff"), None);
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color("blue"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn parse_rejects_alpha_channel() {
        assert_eq!(parse_hex_color("#0066ccff"), None);
    }

    #[test]
    fn default_palette_roles() {
        let palette = Palette::from_config(&ColorsConfig::default()).unwrap();
        assert_eq!(palette.background, Rgb([255, 255, 255]));
        assert_eq!(palette.panel, Rgb([0x00, 0x66, 0xcc]));
        assert_eq!(palette.accent, Rgb([0xff, 0x66, 0x00]));
        assert_eq!(palette.title, Rgb([0x33, 0x33, 0x33]));
        assert_eq!(palette.subtitle, palette.panel);
        assert_eq!(palette.badge, palette.accent);
    }

    #[test]
    fn palette_reports_bad_entry() {
        let colors = ColorsConfig {
            orange: "#ff66".to_string(),
            ..ColorsConfig::default()
        };
        let (name, value) = Palette::from_config(&colors).unwrap_err();
        assert_eq!(name, "orange");
        assert_eq!(value, "#ff66");
    }
}
