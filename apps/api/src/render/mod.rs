//! Render orchestration: validation, frame drawing, and the compose pass
//! that turns a request into draw calls.

pub mod canvas;
pub mod fonts;

use tracing::debug;

use crate::errors::AppError;
use crate::layout::paint::Painter;
use crate::layout::theme::Theme;
use crate::layout::{
    break_into_lines, draw_plan, normalize_text, plan_layout, CardConfig, TextMeasurer, ThemeName,
};

use self::canvas::{RasterCanvas, RasterPainter};
use self::fonts::FontStore;

/// Dash pattern for the inner frame stroke, in pixels.
const FRAME_DASH: [f32; 3] = [5.0, 15.0, 30.0];

/// One card render request. All fields are request-scoped values; nothing
/// survives the render.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub quote_text: String,
    pub author_name: String,
    pub theme: ThemeName,
}

/// Draws the card backdrop: border-colored canvas, background-colored
/// interior inset by the border width, and a dashed text-colored stroke
/// around the interior at half the border width.
fn draw_frame<P: Painter + ?Sized>(painter: &mut P, card: &CardConfig, theme: &Theme) {
    let w = card.width_px as f32;
    let h = card.height_px as f32;
    let b = card.border_px;

    painter.fill_rect(0.0, 0.0, w, h, theme.border_color);
    painter.fill_rect(b, b, w - 2.0 * b, h - 2.0 * b, theme.background_color);
    painter.stroke_rect(
        b,
        b,
        w - 2.0 * b,
        h - 2.0 * b,
        theme.text_color,
        b / 2.0,
        &FRAME_DASH,
    );
}

/// Validates and renders one card onto `painter`.
///
/// Normalizes quote and author, rejects an empty or over-length quote with
/// an [`AppError::Validation`], resolves the theme to a fresh color triple,
/// then draws the frame, the wrapped lines and the author line. Pure over
/// its inputs: interleaved calls with different themes cannot observe each
/// other's colors.
pub fn compose<M, P>(
    measurer: &M,
    painter: &mut P,
    card: &CardConfig,
    request: &RenderRequest,
) -> Result<(), AppError>
where
    M: TextMeasurer + ?Sized,
    P: Painter + ?Sized,
{
    let text = normalize_text(&request.quote_text);
    let author = normalize_text(&request.author_name);

    if text.is_empty() {
        return Err(AppError::Validation("quote text cannot be empty".into()));
    }
    let text_chars = text.chars().count();
    if text_chars > card.max_text_chars {
        return Err(AppError::Validation(format!(
            "quote text is {text_chars} characters; the limit is {}",
            card.max_text_chars
        )));
    }

    let theme = Theme::resolve(request.theme);
    draw_frame(painter, card, &theme);

    let lines = break_into_lines(
        measurer,
        &text,
        card.available_text_width(),
        &card.quote_font(),
    )?;
    let plan = plan_layout(measurer, &lines, &author, card)?;
    draw_plan(&plan, painter, theme.text_color)?;

    debug!(chars = text_chars, lines = plan.lines.len(), "card composed");
    Ok(())
}

/// Full render against the raster backend: composes onto a fresh canvas and
/// encodes it as PNG. The canvas and painter live only for this call and
/// are dropped on any early error return.
pub fn render_png(
    fonts: &FontStore,
    card: &CardConfig,
    request: &RenderRequest,
) -> Result<Vec<u8>, AppError> {
    let mut canvas = RasterCanvas::new(card.width_px, card.height_px);
    {
        let mut painter = RasterPainter::new(&mut canvas, fonts);
        compose(fonts, &mut painter, card, request)?;
    }
    canvas.into_png()
}
