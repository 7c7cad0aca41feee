//! Color presets for the two card styles.

use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

/// Near-black used for dark interiors and light text inversions.
pub const BLACK: Color = Color(0x01, 0x01, 0x01);

/// Near-white counterpart.
pub const WHITE: Color = Color(0xFE, 0xFE, 0xFE);

/// Validated style name. Parsed once at the request boundary; everything
/// downstream works with the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeName {
    Light,
    Dark,
}

impl ThemeName {
    /// Case-insensitive parse. Anything that is not exactly `light` or
    /// `dark` (including padded input) falls back to `Dark`.
    pub fn parse(name: &str) -> ThemeName {
        match name.to_ascii_lowercase().as_str() {
            "light" => ThemeName::Light,
            "dark" => ThemeName::Dark,
            _ => ThemeName::Dark,
        }
    }
}

impl Default for ThemeName {
    fn default() -> Self {
        ThemeName::Dark
    }
}

/// The color triple a single render draws with. Every resolve returns a
/// fresh value; concurrent renders never share theme state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub text_color: Color,
    pub border_color: Color,
    pub background_color: Color,
}

impl Theme {
    pub fn resolve(name: ThemeName) -> Theme {
        match name {
            ThemeName::Dark => Theme {
                text_color: WHITE,
                border_color: BLACK,
                background_color: BLACK,
            },
            ThemeName::Light => Theme {
                text_color: BLACK,
                border_color: WHITE,
                background_color: WHITE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ThemeName::parse("LIGHT"), ThemeName::Light);
        assert_eq!(ThemeName::parse("light"), ThemeName::Light);
        assert_eq!(ThemeName::parse("Dark"), ThemeName::Dark);
    }

    #[test]
    fn test_parse_does_not_trim() {
        // Padded input is not a recognized name, so it falls back to dark.
        assert_eq!(ThemeName::parse(" dark "), ThemeName::Dark);
        assert_eq!(ThemeName::parse(" light"), ThemeName::Dark);
    }

    #[test]
    fn test_parse_unknown_falls_back_to_dark() {
        assert_eq!(ThemeName::parse("sepia"), ThemeName::Dark);
        assert_eq!(ThemeName::parse(""), ThemeName::Dark);
    }

    #[test]
    fn test_dark_is_white_on_black() {
        let theme = Theme::resolve(ThemeName::Dark);
        assert_eq!(theme.text_color, WHITE);
        assert_eq!(theme.border_color, BLACK);
        assert_eq!(theme.background_color, BLACK);
    }

    #[test]
    fn test_light_is_inverted() {
        let theme = Theme::resolve(ThemeName::Light);
        assert_eq!(theme.text_color, BLACK);
        assert_eq!(theme.border_color, WHITE);
        assert_eq!(theme.background_color, WHITE);
    }

    #[test]
    fn test_resolve_returns_fresh_values() {
        let a = Theme::resolve(ThemeName::Light);
        let b = Theme::resolve(ThemeName::Light);
        assert_eq!(a, b);
    }
}
