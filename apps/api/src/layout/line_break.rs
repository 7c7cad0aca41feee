//! Greedy word-wrap against a pixel-width budget.

use tracing::debug;

use crate::errors::AppError;
use crate::layout::font_metrics::{FontSpec, TextMeasurer};

/// Breaks normalized `text` into lines no wider than `available_width_px`.
///
/// Greedy and word-level with no backtracking: each word is appended to the
/// current line candidate, the candidate is measured, and the line is
/// committed as soon as a candidate exceeds the budget (strictly greater —
/// a candidate exactly at the budget still fits). A single word wider than
/// the budget is never split; it lands alone on its own line and may
/// overflow visually.
///
/// The candidate is always `current + " " + word`, so the very first
/// candidate of the text carries a leading space that counts toward its
/// measured width. Committed lines are trimmed of that space.
///
/// Empty text yields no lines. `available_width_px` is the canvas width
/// minus both paddings; the caller supplies it.
pub fn break_into_lines<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    available_width_px: f32,
    font: &FontSpec,
) -> Result<Vec<String>, AppError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let candidate = format!("{current} {word}");
        let metrics = measurer.measure(&candidate, font)?;

        if metrics.est_width() > available_width_px {
            if !current.is_empty() {
                lines.push(current.trim_start().to_string());
            }
            current = word.to_string();
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current.trim_start().to_string());
    }

    debug!("text split into {} lines", lines.len());
    Ok(lines)
}
