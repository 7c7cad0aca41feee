// Text-layout core: normalization, greedy line breaking, centered placement,
// theme resolution. Pure over the injected measurement/drawing capabilities.
// CPU-bound rasterization must run inside tokio::task::spawn_blocking.

pub mod engine;
pub mod font_metrics;
pub mod line_break;
pub mod paint;
pub mod text;
pub mod theme;

// Re-export the public API consumed by other modules (render, handlers).
pub use engine::{draw_plan, plan_layout, LayoutPlan};
pub use font_metrics::{default_card_config, CardConfig, FontSpec, GlyphMetrics, TextMeasurer};
pub use line_break::break_into_lines;
pub use paint::Painter;
pub use text::normalize_text;
pub use theme::{Theme, ThemeName};
