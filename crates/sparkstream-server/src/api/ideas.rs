//! Idea generation and the hand-off from an idea to the editor.

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use sparkstream_core::Idea;

use crate::middleware::RequestId;

use super::editor::EditorData;
use super::{map_studio_error, ApiError, ApiResponse, AppState, SlotSnapshot};

#[derive(Debug, Deserialize)]
pub(super) struct IdeasRequest {
    pub topic: String,
    pub niche: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SelectIdeaRequest {
    pub index: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct IdeasData {
    topic: String,
    niche: String,
    #[serde(flatten)]
    slot: SlotSnapshot<Idea>,
}

/// POST /api/v1/ideas
///
/// Always 200 with a list once admitted; model failures show up as an
/// empty list.
pub(super) async fn generate_ideas(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<IdeasRequest>,
) -> Result<Json<ApiResponse<IdeasData>>, ApiError> {
    let pending = state
        .studio
        .lock()
        .await
        .begin_ideas(&body.topic, body.niche.as_deref())
        .map_err(|e| map_studio_error(&req_id.0, &e))?;

    let ideas = state.genai.generate(&pending.prompt).await;

    let mut studio = state.studio.lock().await;
    let applied = studio.finish_ideas(pending.ticket, ideas);
    let data = IdeasData {
        topic: studio.idea_topic().to_owned(),
        niche: studio.idea_niche().to_owned(),
        slot: SlotSnapshot::of(studio.ideas(), pending.ticket, applied),
    };
    drop(studio);
    Ok(ApiResponse::new(req_id, data))
}

/// POST /api/v1/ideas/select
pub(super) async fn select_idea(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SelectIdeaRequest>,
) -> Result<Json<ApiResponse<EditorData>>, ApiError> {
    let mut studio = state.studio.lock().await;
    studio
        .select_idea(body.index)
        .map_err(|e| map_studio_error(&req_id.0, &e))?;
    let data = EditorData::of(&studio);
    drop(studio);
    Ok(ApiResponse::new(req_id, data))
}

/// POST /api/v1/drafts/new
pub(super) async fn create_new(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<EditorData>>, ApiError> {
    let mut studio = state.studio.lock().await;
    studio
        .create_new()
        .map_err(|e| map_studio_error(&req_id.0, &e))?;
    let data = EditorData::of(&studio);
    drop(studio);
    Ok(ApiResponse::new(req_id, data))
}
