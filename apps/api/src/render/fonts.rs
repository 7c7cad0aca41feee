//! Font loading and rusttype-backed text measurement.

use std::path::{Path, PathBuf};

use rusttype::{point, Font, Scale};
use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::layout::font_metrics::{FontSpec, FontStyle, GlyphMetrics, TextMeasurer};

const REGULAR_FILE: &str = "JosefinSans-Regular.ttf";
const ITALIC_FILE: &str = "JosefinSans-Italic.ttf";

/// The two faces the renderer draws with, loaded once at startup and shared
/// across requests behind an `Arc`.
pub struct FontStore {
    regular: Font<'static>,
    italic: Font<'static>,
}

impl FontStore {
    /// Loads both faces from `config.font_dir`. Fails fast when either file
    /// is missing or not a parseable TTF.
    pub fn load(config: &Config) -> Result<FontStore, AppError> {
        let dir = PathBuf::from(&config.font_dir);
        let store = FontStore {
            regular: load_font(&dir.join(REGULAR_FILE))?,
            italic: load_font(&dir.join(ITALIC_FILE))?,
        };
        info!("fonts loaded from {}", config.font_dir);
        Ok(store)
    }

    pub fn get(&self, style: FontStyle) -> &Font<'static> {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Italic => &self.italic,
        }
    }
}

fn load_font(path: &Path) -> Result<Font<'static>, AppError> {
    let data = std::fs::read(path)
        .map_err(|e| AppError::Font(format!("cannot read {}: {e}", path.display())))?;
    Font::try_from_vec(data)
        .ok_or_else(|| AppError::Font(format!("{} is not a valid TTF", path.display())))
}

impl TextMeasurer for FontStore {
    /// Measures via glyph pixel bounding boxes around a baseline at y=0:
    /// left/right bearing from the min/max x extents, ascent/descent from
    /// the min/max y extents. Whitespace-only strings report zero extents.
    fn measure(&self, text: &str, font: &FontSpec) -> Result<GlyphMetrics, AppError> {
        let face = self.get(font.style);
        let scale = Scale::uniform(font.size_px);

        let mut min_x = f32::MAX;
        let mut max_x = f32::MIN;
        let mut min_y = f32::MAX;
        let mut max_y = f32::MIN;
        let mut seen = false;

        for glyph in face.layout(text, scale, point(0.0, 0.0)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                min_x = min_x.min(bb.min.x as f32);
                max_x = max_x.max(bb.max.x as f32);
                min_y = min_y.min(bb.min.y as f32);
                max_y = max_y.max(bb.max.y as f32);
                seen = true;
            }
        }

        if !seen {
            return Ok(GlyphMetrics::default());
        }
        Ok(GlyphMetrics {
            left_bearing: (-min_x).max(0.0),
            right_bearing: max_x,
            ascent: (-min_y).max(0.0),
            descent: max_y.max(0.0),
        })
    }
}
