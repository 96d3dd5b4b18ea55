use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{Language, TextRequest, TranslationResponse};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/translation", post(translate_text))
        .route("/tree", post(render_tree))
        .route("/api/health", get(health_check))
}

/// `POST /translation`: annotate the English source, translate it to
/// French, annotate the translation, then hand the source text to the
/// translation memory. The memory update is enqueue-only; if even that
/// fails the response still succeeds, with a warning attached.
async fn translate_text(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let Json(request) = payload.map_err(|err| ApiError::InvalidInput(err.body_text()))?;

    let original_text_analysis = state
        .annotator
        .annotate(&request.text, Language::English)
        .await?;

    let translated_text = state.translator.translate(&request.text).await?;

    let translated_text_analysis = state
        .annotator
        .annotate(&translated_text, Language::French)
        .await?;

    let warning = match state.memory.record(request.text.clone()) {
        Ok(()) => None,
        Err(err) => {
            warn!("could not enqueue memory update: {err}");
            Some("translation memory unavailable; new words were not recorded".to_string())
        }
    };

    debug!(
        "translated {} source words into {} target words",
        original_text_analysis.words_count, translated_text_analysis.words_count
    );

    Ok(Json(TranslationResponse {
        original_text: request.text,
        original_text_analysis,
        translated_text,
        translated_text_analysis,
        warning,
    }))
}

/// `POST /tree`: raw PNG bytes of the syntactic chunk tree.
async fn render_tree(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|err| ApiError::InvalidInput(err.body_text()))?;

    let image = state.tree_renderer.render(&request.text).await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], image))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let inference_healthy = state.inference.health_check().await.unwrap_or(false);
    Json(json!({
        "status": "ok",
        "inference_service": inference_healthy,
    }))
}
