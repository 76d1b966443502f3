//! Editor, vibe-check, and post-saving handlers.

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use sparkstream_core::{SocialPost, ViewState};
use sparkstream_studio::{Studio, Ticket, Variation};

use crate::middleware::RequestId;

use super::{map_studio_error, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct UpdateEditorRequest {
    pub content: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SaveVariationRequest {
    pub index: usize,
    pub caption: Option<String>,
    pub hashtags: Option<String>,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct EditorData {
    view: ViewState,
    content: String,
    platform: String,
    loading: bool,
    variations: Vec<Variation>,
}

impl EditorData {
    pub(in crate::api) fn of(studio: &Studio) -> Self {
        let editor = studio.editor();
        Self {
            view: studio.view(),
            content: editor.content().to_owned(),
            platform: editor.platform().to_owned(),
            loading: editor.variations().is_loading(),
            variations: editor.variations().items().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct VibeCheckData {
    ticket: Ticket,
    applied: bool,
    #[serde(flatten)]
    editor: EditorData,
}

/// GET /api/v1/editor
pub(super) async fn get_editor(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<EditorData>> {
    let data = EditorData::of(&*state.studio.lock().await);
    ApiResponse::new(req_id, data)
}

/// PUT /api/v1/editor: replace the draft text and/or platform.
pub(super) async fn update_editor(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<UpdateEditorRequest>,
) -> Result<Json<ApiResponse<EditorData>>, ApiError> {
    let mut studio = state.studio.lock().await;
    let editor = studio
        .editor_mut()
        .map_err(|e| map_studio_error(&req_id.0, &e))?;
    if let Some(platform) = body.platform.as_deref() {
        editor
            .set_platform(platform)
            .map_err(|e| map_studio_error(&req_id.0, &e))?;
    }
    if let Some(content) = body.content {
        editor.set_content(content);
    }
    let data = EditorData::of(&studio);
    drop(studio);
    Ok(ApiResponse::new(req_id, data))
}

/// POST /api/v1/vibe-check: check the current draft.
pub(super) async fn vibe_check(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<VibeCheckData>>, ApiError> {
    let pending = state
        .studio
        .lock()
        .await
        .begin_vibe_check()
        .map_err(|e| map_studio_error(&req_id.0, &e))?;

    let results = state.genai.generate(&pending.prompt).await;

    let mut studio = state.studio.lock().await;
    let applied = studio.finish_vibe_check(pending.ticket, results);
    let data = VibeCheckData {
        ticket: pending.ticket,
        applied,
        editor: EditorData::of(&studio),
    };
    drop(studio);
    Ok(ApiResponse::new(req_id, data))
}

/// POST /api/v1/posts: save the draft as-is.
pub(super) async fn save_original(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<(StatusCode, Json<ApiResponse<SocialPost>>), ApiError> {
    let post = state
        .studio
        .lock()
        .await
        .save_original()
        .map_err(|e| map_studio_error(&req_id.0, &e))?
        .clone();
    Ok((StatusCode::CREATED, ApiResponse::new(req_id, post)))
}

/// POST /api/v1/posts/variation: save one vibe-check variation.
pub(super) async fn save_variation(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SaveVariationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SocialPost>>), ApiError> {
    let post = state
        .studio
        .lock()
        .await
        .save_variation(body.index, body.caption, body.hashtags)
        .map_err(|e| map_studio_error(&req_id.0, &e))?
        .clone();
    Ok((StatusCode::CREATED, ApiResponse::new(req_id, post)))
}
