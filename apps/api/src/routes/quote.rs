//! Quote-card endpoints: query-string GET and JSON POST variants of the
//! same render. Rendering is CPU-bound, so it runs in `spawn_blocking`.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;

use crate::errors::AppError;
use crate::render::{render_png, RenderRequest};
use crate::layout::ThemeName;
use crate::state::AppState;

/// GET /api/imagequote?quote=...&author=...&style=...
#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    pub quote: Option<String>,
    pub author: Option<String>,
    pub style: Option<String>,
}

pub async fn handle_get_quote(
    State(state): State<AppState>,
    Query(params): Query<QuoteParams>,
) -> Result<Response, AppError> {
    render_response(
        state,
        params.quote.unwrap_or_default(),
        params.author.unwrap_or_default(),
        params.style.unwrap_or_default(),
    )
    .await
}

/// POST /api/imagequote — the front-end form contract.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteForm {
    #[serde(default)]
    pub quote_text: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub style_name: String,
}

pub async fn handle_post_quote(
    State(state): State<AppState>,
    Json(form): Json<QuoteForm>,
) -> Result<Response, AppError> {
    render_response(state, form.quote_text, form.author_name, form.style_name).await
}

async fn render_response(
    state: AppState,
    quote: String,
    author: String,
    style: String,
) -> Result<Response, AppError> {
    let request = RenderRequest {
        quote_text: quote,
        author_name: author,
        theme: ThemeName::parse(&style),
    };
    let fonts = state.fonts.clone();
    let card = state.card.clone();

    let png = tokio::task::spawn_blocking(move || render_png(&fonts, &card, &request))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))??;

    Ok(([(header::CONTENT_TYPE, "image/png")], Bytes::from(png)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parse_matches_renderer_default() {
        // Unknown and missing styles fall back to the renderer's dark
        // default instead of a handler-local preset.
        assert_eq!(ThemeName::parse(""), ThemeName::Dark);
        assert_eq!(ThemeName::parse("LIGHT"), ThemeName::Light);
    }

    #[test]
    fn test_form_deserializes_front_end_field_names() {
        let form: QuoteForm = serde_json::from_str(
            r#"{"quoteText": "q", "authorName": "a", "styleName": "light"}"#,
        )
        .unwrap();
        assert_eq!(form.quote_text, "q");
        assert_eq!(form.author_name, "a");
        assert_eq!(form.style_name, "light");
    }

    #[test]
    fn test_form_fields_default_when_missing() {
        let form: QuoteForm = serde_json::from_str(r#"{"quoteText": "q"}"#).unwrap();
        assert_eq!(form.author_name, "");
        assert_eq!(form.style_name, "");
    }
}
