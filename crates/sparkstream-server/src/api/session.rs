//! Simulated session and navigation handlers.

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use sparkstream_core::{User, ViewState};
use sparkstream_studio::Studio;

use crate::middleware::RequestId;

use super::{map_studio_error, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct NavigateRequest {
    pub view: ViewState,
}

#[derive(Debug, Serialize)]
pub(super) struct SessionData {
    user: Option<User>,
    view: ViewState,
}

impl SessionData {
    fn of(studio: &Studio) -> Self {
        Self {
            user: studio.user().cloned(),
            view: studio.view(),
        }
    }
}

/// GET /api/v1/session
pub(super) async fn current_session(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<SessionData>> {
    let data = SessionData::of(&*state.studio.lock().await);
    ApiResponse::new(req_id, data)
}

/// POST /api/v1/session/guest
pub(super) async fn login_guest(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<SessionData>> {
    let mut studio = state.studio.lock().await;
    studio.login_guest();
    let data = SessionData::of(&studio);
    drop(studio);
    ApiResponse::new(req_id, data)
}

/// POST /api/v1/session/admin: fixed-pair simulation, not authentication.
pub(super) async fn login_admin(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<AdminLoginRequest>,
) -> Result<Json<ApiResponse<SessionData>>, ApiError> {
    let mut studio = state.studio.lock().await;
    studio
        .login_admin(&body.username, &body.password)
        .map_err(|e| map_studio_error(&req_id.0, &e))?;
    let data = SessionData::of(&studio);
    drop(studio);
    Ok(ApiResponse::new(req_id, data))
}

/// DELETE /api/v1/session
pub(super) async fn logout(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<SessionData>> {
    let mut studio = state.studio.lock().await;
    studio.logout();
    let data = SessionData::of(&studio);
    drop(studio);
    ApiResponse::new(req_id, data)
}

/// POST /api/v1/view
pub(super) async fn navigate(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<NavigateRequest>,
) -> Result<Json<ApiResponse<SessionData>>, ApiError> {
    let mut studio = state.studio.lock().await;
    studio
        .navigate(body.view)
        .map_err(|e| map_studio_error(&req_id.0, &e))?;
    let data = SessionData::of(&studio);
    drop(studio);
    Ok(ApiResponse::new(req_id, data))
}
