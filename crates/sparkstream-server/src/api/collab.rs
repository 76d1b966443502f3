//! Collaborator search and simulated connection.

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use sparkstream_core::Collaborator;
use sparkstream_studio::{CollabHub, ConnectOutcome, Ticket};

use crate::middleware::RequestId;

use super::{map_studio_error, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct FindCollaboratorsRequest {
    pub niche: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ConnectRequest {
    pub index: usize,
    /// Answer to the payment confirmation for paid tiers. Ignored for free.
    #[serde(default)]
    pub confirm_payment: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct CollaboratorItem {
    #[serde(flatten)]
    collaborator: Collaborator,
    connected: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct CollaboratorsData {
    ticket: Ticket,
    applied: bool,
    loading: bool,
    niche: String,
    items: Vec<CollaboratorItem>,
}

#[derive(Debug, Serialize)]
pub(super) struct ConnectData {
    #[serde(flatten)]
    outcome: ConnectOutcome,
    /// The confirmation text that was answered, for paid tiers.
    payment_prompt: Option<String>,
}

fn items(hub: &CollabHub) -> Vec<CollaboratorItem> {
    hub.results()
        .items()
        .iter()
        .map(|c| CollaboratorItem {
            connected: hub.is_connected(c),
            collaborator: c.clone(),
        })
        .collect()
}

/// POST /api/v1/collaborators
///
/// Without a niche the last one searched is reused.
pub(super) async fn find_collaborators(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<FindCollaboratorsRequest>,
) -> Result<Json<ApiResponse<CollaboratorsData>>, ApiError> {
    let pending = state
        .studio
        .lock()
        .await
        .begin_collab_search(body.niche.as_deref())
        .map_err(|e| map_studio_error(&req_id.0, &e))?;

    let results = state.genai.generate(&pending.prompt).await;

    let mut studio = state.studio.lock().await;
    let applied = studio.finish_collab_search(pending.ticket, results);
    let hub = studio.collab();
    let data = CollaboratorsData {
        ticket: pending.ticket,
        applied,
        loading: hub.results().is_loading(),
        niche: hub.niche().to_owned(),
        items: items(hub),
    };
    drop(studio);
    Ok(ApiResponse::new(req_id, data))
}

/// POST /api/v1/collaborators/connect
pub(super) async fn connect(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ConnectRequest>,
) -> Result<Json<ApiResponse<ConnectData>>, ApiError> {
    let mut payment_prompt = None;
    let outcome = state
        .studio
        .lock()
        .await
        .connect_collaborator(body.index, |message| {
            payment_prompt = Some(message.to_owned());
            body.confirm_payment
        })
        .map_err(|e| map_studio_error(&req_id.0, &e))?;
    Ok(ApiResponse::new(
        req_id,
        ConnectData {
            outcome,
            payment_prompt,
        },
    ))
}
