//! Drawing capability contract consumed by the layout engine.

use crate::errors::AppError;
use crate::layout::font_metrics::FontSpec;
use crate::layout::theme::Color;

/// Drawing surface injected into the render pass.
///
/// Coordinates are in pixels with the origin at the top-left. `fill_text`
/// centers the string horizontally on `x` and places its baseline at `y`.
pub trait Painter {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Strokes the rectangle outline with the given line width and dash
    /// pattern (alternating on/off lengths, canvas semantics: odd-length
    /// patterns repeat with flipped phase). An empty pattern draws solid.
    fn stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
        line_width: f32,
        dash: &[f32],
    );

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &FontSpec,
        color: Color,
    ) -> Result<(), AppError>;
}
