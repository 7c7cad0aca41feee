//! RGBA raster canvas and its painter.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use rusttype::{point, Scale};

use crate::errors::AppError;
use crate::layout::font_metrics::FontSpec;
use crate::layout::paint::Painter;
use crate::layout::theme::Color;

use super::fonts::FontStore;

fn rgba(color: Color) -> Rgba<u8> {
    Rgba([color.0, color.1, color.2, 255])
}

/// Fixed-size RGBA pixel buffer. Rect fills clamp to the canvas bounds.
pub struct RasterCanvas {
    img: RgbaImage,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32) -> RasterCanvas {
        RasterCanvas {
            img: RgbaImage::new(width, height),
        }
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let px = rgba(color);
        let x0 = x.max(0.0) as u32;
        let y0 = y.max(0.0) as u32;
        let x1 = ((x + w).max(0.0) as u32).min(self.img.width());
        let y1 = ((y + h).max(0.0) as u32).min(self.img.height());
        for yy in y0..y1 {
            for xx in x0..x1 {
                self.img.put_pixel(xx, yy, px);
            }
        }
    }

    /// Blends `coverage` (0.0..=1.0) of `color` over the pixel at (x, y).
    /// Out-of-bounds writes are dropped.
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= self.img.width() as i32 || y >= self.img.height() as i32 {
            return;
        }
        let v = coverage.clamp(0.0, 1.0);
        let src = [color.0, color.1, color.2];
        let dst = self.img.get_pixel_mut(x as u32, y as u32);
        for c in 0..3 {
            dst.0[c] = (src[c] as f32 * v + dst.0[c] as f32 * (1.0 - v)).round() as u8;
        }
        dst.0[3] = 255;
    }

    pub fn into_png(self) -> Result<Vec<u8>, AppError> {
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(self.img)
            .write_to(&mut buf, ImageFormat::Png)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("png encoding failed: {e}")))?;
        Ok(buf.into_inner())
    }

    #[cfg(test)]
    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.img.get_pixel(x, y)
    }
}

/// Computes the `(start, length)` runs of the "on" phase when walking an
/// edge of `total` length with a dash `pattern`. Cycling an odd-length
/// pattern flips the phase each pass, which reproduces canvas
/// `setLineDash` semantics (an odd pattern behaves as itself doubled).
fn dash_segments(total: f32, pattern: &[f32]) -> Vec<(f32, f32)> {
    if pattern.is_empty() || pattern.iter().sum::<f32>() <= 0.0 {
        return vec![(0.0, total)];
    }
    let mut segments = Vec::new();
    let mut pos = 0.0_f32;
    let mut on = true;
    let mut i = 0usize;
    while pos < total {
        let len = pattern[i % pattern.len()];
        if on && len > 0.0 {
            segments.push((pos, len.min(total - pos)));
        }
        pos += len;
        i += 1;
        on = !on;
    }
    segments
}

/// Paints onto a [`RasterCanvas`] using the loaded fonts for glyph
/// rasterization. Borrows both for the duration of one render.
pub struct RasterPainter<'a> {
    canvas: &'a mut RasterCanvas,
    fonts: &'a FontStore,
}

impl<'a> RasterPainter<'a> {
    pub fn new(canvas: &'a mut RasterCanvas, fonts: &'a FontStore) -> RasterPainter<'a> {
        RasterPainter { canvas, fonts }
    }
}

impl Painter for RasterPainter<'_> {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.canvas.fill_rect(x, y, w, h, color);
    }

    fn stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
        line_width: f32,
        dash: &[f32],
    ) {
        let t = line_width / 2.0;
        // Top and bottom edges.
        for (start, len) in dash_segments(w, dash) {
            self.canvas.fill_rect(x + start, y - t, len, line_width, color);
            self.canvas
                .fill_rect(x + start, y + h - t, len, line_width, color);
        }
        // Left and right edges.
        for (start, len) in dash_segments(h, dash) {
            self.canvas.fill_rect(x - t, y + start, line_width, len, color);
            self.canvas
                .fill_rect(x + w - t, y + start, line_width, len, color);
        }
    }

    /// Draws `text` centered on `x` with its baseline at `y`, blending
    /// glyph coverage into the canvas. Centering uses the advance width of
    /// the laid-out string.
    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &FontSpec,
        color: Color,
    ) -> Result<(), AppError> {
        let face = self.fonts.get(font.style);
        let scale = Scale::uniform(font.size_px);

        let advance = face
            .layout(text, scale, point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);
        let start_x = x - advance / 2.0;

        for glyph in face.layout(text, scale, point(start_x, y)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    self.canvas
                        .blend_pixel(gx as i32 + bb.min.x, gy as i32 + bb.min.y, color, v);
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::theme::{BLACK, WHITE};

    #[test]
    fn test_dash_segments_canvas_semantics() {
        // [5, 15, 30] over a 100px edge: on 5, off 15, on 30, off 5,
        // on 15, off 30 — the odd pattern repeats with flipped phase.
        let segments = dash_segments(100.0, &[5.0, 15.0, 30.0]);
        assert_eq!(segments, vec![(0.0, 5.0), (20.0, 30.0), (55.0, 15.0)]);
    }

    #[test]
    fn test_dash_segments_empty_pattern_is_solid() {
        assert_eq!(dash_segments(40.0, &[]), vec![(0.0, 40.0)]);
        assert_eq!(dash_segments(40.0, &[0.0, 0.0]), vec![(0.0, 40.0)]);
    }

    #[test]
    fn test_dash_segments_clip_final_run() {
        // on 8 / off 8 over 20px: the second on-run is clipped to 4px.
        assert_eq!(
            dash_segments(20.0, &[8.0, 8.0]),
            vec![(0.0, 8.0), (16.0, 4.0)]
        );
    }

    #[test]
    fn test_fill_rect_sets_interior_pixels_only() {
        let mut canvas = RasterCanvas::new(10, 10);
        canvas.fill_rect(2.0, 2.0, 4.0, 4.0, WHITE);
        assert_eq!(canvas.pixel(2, 2), Rgba([0xFE, 0xFE, 0xFE, 255]));
        assert_eq!(canvas.pixel(5, 5), Rgba([0xFE, 0xFE, 0xFE, 255]));
        assert_eq!(canvas.pixel(6, 6), Rgba([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(1, 2), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_fill_rect_clamps_to_bounds() {
        let mut canvas = RasterCanvas::new(4, 4);
        canvas.fill_rect(-5.0, -5.0, 100.0, 100.0, BLACK);
        assert_eq!(canvas.pixel(0, 0), Rgba([0x01, 0x01, 0x01, 255]));
        assert_eq!(canvas.pixel(3, 3), Rgba([0x01, 0x01, 0x01, 255]));
    }

    #[test]
    fn test_blend_pixel_full_coverage_replaces() {
        let mut canvas = RasterCanvas::new(2, 2);
        canvas.fill_rect(0.0, 0.0, 2.0, 2.0, BLACK);
        canvas.blend_pixel(1, 1, WHITE, 1.0);
        assert_eq!(canvas.pixel(1, 1), Rgba([0xFE, 0xFE, 0xFE, 255]));
        // Zero coverage leaves the background untouched.
        canvas.blend_pixel(0, 0, WHITE, 0.0);
        assert_eq!(canvas.pixel(0, 0), Rgba([0x01, 0x01, 0x01, 255]));
    }

    #[test]
    fn test_blend_pixel_ignores_out_of_bounds() {
        let mut canvas = RasterCanvas::new(2, 2);
        canvas.blend_pixel(-1, 0, WHITE, 1.0);
        canvas.blend_pixel(0, 5, WHITE, 1.0);
        // No panic, nothing written.
        assert_eq!(canvas.pixel(0, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_png_encoding_produces_png_magic() {
        let canvas = RasterCanvas::new(8, 8);
        let bytes = canvas.into_png().unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
