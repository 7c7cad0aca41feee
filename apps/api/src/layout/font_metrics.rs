//! Measurement capability contract and card geometry.
//!
//! Bearing-based metrics are an intentional approximation — the canvas
//! backend reports glyph bounding boxes, not exact advance widths. Wrap
//! decisions only need a consistent estimate, so `left_bearing +
//! right_bearing` stands in for the true line width.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Glyph metrics
// ────────────────────────────────────────────────────────────────────────────

/// Bounding-box metrics for a measured string, relative to the text origin
/// on the baseline. All values in pixels at the requested font size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlyphMetrics {
    /// Extent to the left of the text origin (positive going left).
    pub left_bearing: f32,
    /// Extent to the right of the text origin.
    pub right_bearing: f32,
    /// Extent above the baseline (positive going up).
    pub ascent: f32,
    /// Extent below the baseline (positive going down).
    pub descent: f32,
}

impl GlyphMetrics {
    /// Estimated rendered width of the measured string.
    pub fn est_width(&self) -> f32 {
        self.left_bearing + self.right_bearing
    }

    /// Estimated rendered height of the measured string.
    pub fn est_height(&self) -> f32 {
        self.ascent + self.descent
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font selection
// ────────────────────────────────────────────────────────────────────────────

/// The two faces the card renderer draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    /// Quote body text.
    Regular,
    /// Author attribution line.
    Italic,
}

/// A concrete face + size request passed to the measurement and drawing
/// capabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub style: FontStyle,
    pub size_px: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Card configuration
// ────────────────────────────────────────────────────────────────────────────

/// Geometry and limits for a single rendered card.
///
/// Supplied to the layout core as a value — the core holds no canvas
/// constants of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    pub width_px: u32,
    pub height_px: u32,
    pub border_px: f32,
    /// Interior padding subtracted from both sides of the text width budget.
    pub padding_px: f32,
    pub font_size_px: f32,
    /// Author face size as a fraction of the quote face size.
    pub author_font_scale: f32,
    /// Fixed gap between adjacent lines, on top of the tallest line's height.
    pub line_gap_px: f32,
    /// Maximum normalized quote length in `char`s. Not emoji-aware.
    pub max_text_chars: usize,
}

impl CardConfig {
    /// Face used for the quote body.
    pub fn quote_font(&self) -> FontSpec {
        FontSpec {
            style: FontStyle::Regular,
            size_px: self.font_size_px,
        }
    }

    /// Face used for the author line: italic, scaled down and floored to a
    /// whole pixel size.
    pub fn author_font(&self) -> FontSpec {
        FontSpec {
            style: FontStyle::Italic,
            size_px: (self.font_size_px * self.author_font_scale).floor(),
        }
    }

    /// Horizontal pixel budget available to the line breaker.
    pub fn available_text_width(&self) -> f32 {
        self.width_px as f32 - 2.0 * self.padding_px
    }
}

/// Returns the default card config: 1080×1080 canvas, 10px border, 30px
/// padding, 50px quote face with a 0.85-scale italic author face, 20px line
/// gap, 300-char quote ceiling.
pub fn default_card_config() -> CardConfig {
    CardConfig {
        width_px: 1080,
        height_px: 1080,
        border_px: 10.0,
        padding_px: 30.0,
        font_size_px: 50.0,
        author_font_scale: 0.85,
        line_gap_px: 20.0,
        max_text_chars: 300,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Measurement capability
// ────────────────────────────────────────────────────────────────────────────

/// Text-measurement capability injected into the layout core.
///
/// Implementations must be deterministic: identical `(text, font)` pairs
/// return identical metrics for the lifetime of the value.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<GlyphMetrics, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

/// Fixed-metric measurer shared by the layout and render tests: every char
/// is `char_width_px` wide (all width on the right bearing) and every
/// non-empty string is `ascent_px + descent_px` tall, regardless of face.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    pub struct FixedMeasurer {
        pub char_width_px: f32,
        pub ascent_px: f32,
        pub descent_px: f32,
    }

    impl FixedMeasurer {
        /// 10px-per-char grid with a 40+10px line height. With the default
        /// card (1020px budget) a line fits 102 measured chars.
        pub fn standard() -> Self {
            FixedMeasurer {
                char_width_px: 10.0,
                ascent_px: 40.0,
                descent_px: 10.0,
            }
        }
    }

    impl TextMeasurer for FixedMeasurer {
        fn measure(&self, text: &str, _font: &FontSpec) -> Result<GlyphMetrics, AppError> {
            if text.is_empty() {
                return Ok(GlyphMetrics::default());
            }
            Ok(GlyphMetrics {
                left_bearing: 0.0,
                right_bearing: self.char_width_px * text.chars().count() as f32,
                ascent: self.ascent_px,
                descent: self.descent_px,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FixedMeasurer;
    use super::*;

    #[test]
    fn test_est_width_sums_bearings() {
        let m = GlyphMetrics {
            left_bearing: 3.0,
            right_bearing: 47.0,
            ascent: 30.0,
            descent: 8.0,
        };
        assert!((m.est_width() - 50.0).abs() < 1e-6);
        assert!((m.est_height() - 38.0).abs() < 1e-6);
    }

    #[test]
    fn test_quote_font_uses_base_size() {
        let card = default_card_config();
        let font = card.quote_font();
        assert_eq!(font.style, FontStyle::Regular);
        assert!((font.size_px - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_author_font_scaled_and_floored() {
        let card = default_card_config();
        let font = card.author_font();
        assert_eq!(font.style, FontStyle::Italic);
        // floor(50 × 0.85) = 42, a whole pixel size
        assert!((font.size_px - 42.0).abs() < 1e-6);
    }

    #[test]
    fn test_available_text_width_subtracts_both_paddings() {
        let card = default_card_config();
        assert!((card.available_text_width() - 1020.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_card_config_sanity() {
        let card = default_card_config();
        assert_eq!(card.width_px, 1080);
        assert_eq!(card.height_px, 1080);
        assert!((card.border_px - 10.0).abs() < 1e-6);
        assert!((card.padding_px - 30.0).abs() < 1e-6);
        assert!((card.line_gap_px - 20.0).abs() < 1e-6);
        assert_eq!(card.max_text_chars, 300);
    }

    #[test]
    fn test_fixed_measurer_is_deterministic() {
        let m = FixedMeasurer::standard();
        let font = default_card_config().quote_font();
        let a = m.measure("hello world", &font).unwrap();
        let b = m.measure("hello world", &font).unwrap();
        assert_eq!(a, b);
        assert!((a.est_width() - 110.0).abs() < 1e-6);
    }
}
