//! Vertical/horizontal centering of wrapped lines and the author line.

use tracing::debug;

use crate::errors::AppError;
use crate::layout::font_metrics::{CardConfig, FontSpec, TextMeasurer};
use crate::layout::paint::Painter;
use crate::layout::text::pad_left_with_spaces;
use crate::layout::theme::Color;

/// One string placed on the canvas: centered on `x`, baseline at `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: FontSpec,
}

/// The full placement for one card, built once per render and immutable
/// afterwards. `lines` keeps the line breaker's order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub lines: Vec<PlacedText>,
    pub author: Option<PlacedText>,
}

/// Computes line and author placement for a card.
///
/// Lines are stacked symmetrically around the vertical center: with
/// `mid = lines.len() / 2`, line `i` sits at `center - offset*(mid - i)`
/// above the middle and `center + offset*(i - mid)` at or below it. An odd
/// count puts line `mid` exactly at center; an even count puts line `mid`
/// at center with one more line above than below. The per-line offset is
/// the fixed gap plus the tallest measured line height.
///
/// A non-empty `author` is prefixed with `- ` (unless it already starts
/// with a dash), left-padded with spaces to the longest line's char count
/// and placed one offset below the bottom line in the italic face. Padding
/// by char count is a crude visual-centering approximation; an author
/// string longer than the bound loses its head (see
/// [`pad_left_with_spaces`]).
pub fn plan_layout<M: TextMeasurer + ?Sized>(
    measurer: &M,
    lines: &[String],
    author: &str,
    card: &CardConfig,
) -> Result<LayoutPlan, AppError> {
    let x_center = card.width_px as f32 / 2.0;
    let y_center = card.height_px as f32 / 2.0;
    let quote_font = card.quote_font();

    let mut max_line_height = 0.0_f32;
    for line in lines {
        let metrics = measurer.measure(line, &quote_font)?;
        max_line_height = max_line_height.max(metrics.est_height());
    }
    let offset = card.line_gap_px + max_line_height;

    let mid = lines.len() / 2;
    let mut placed = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let y = if i < mid {
            y_center - offset * (mid - i) as f32
        } else {
            y_center + offset * (i - mid) as f32
        };
        placed.push(PlacedText {
            text: line.clone(),
            x: x_center,
            y,
            font: quote_font.clone(),
        });
    }

    let author = if author.is_empty() {
        None
    } else {
        let name = if author.starts_with('-') {
            author.to_string()
        } else {
            format!("- {author}")
        };
        let bound = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let last_line_y = placed.last().map(|p| p.y).unwrap_or(y_center);
        Some(PlacedText {
            text: pad_left_with_spaces(&name, bound),
            x: x_center,
            y: last_line_y + offset,
            font: card.author_font(),
        })
    };

    debug!(
        lines = placed.len(),
        has_author = author.is_some(),
        "layout plan computed"
    );
    Ok(LayoutPlan {
        lines: placed,
        author,
    })
}

/// Issues one centered `fill_text` per placement, quote lines first, author
/// last. Draw order does not affect the output; placements never overlap.
pub fn draw_plan<P: Painter + ?Sized>(
    plan: &LayoutPlan,
    painter: &mut P,
    text_color: Color,
) -> Result<(), AppError> {
    for placed in &plan.lines {
        painter.fill_text(&placed.text, placed.x, placed.y, &placed.font, text_color)?;
    }
    if let Some(author) = &plan.author {
        painter.fill_text(&author.text, author.x, author.y, &author.font, text_color)?;
    }
    Ok(())
}
