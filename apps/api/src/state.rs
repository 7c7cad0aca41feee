use std::sync::Arc;

use crate::config::Config;
use crate::layout::CardConfig;
use crate::render::fonts::FontStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable after startup; renders share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Card geometry and limits threaded into every render.
    pub card: CardConfig,
    /// Loaded faces, shared across requests for measurement and rasterization.
    pub fonts: Arc<FontStore>,
}
