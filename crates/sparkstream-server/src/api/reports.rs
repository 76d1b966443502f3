//! Read-only dashboard, analytics, and admin endpoints.

use axum::{extract::State, Extension, Json};
use sparkstream_studio::{AdminOverview, AnalyticsReport, DashboardSummary};

use crate::middleware::RequestId;

use super::{map_studio_error, ApiError, ApiResponse, AppState};

/// GET /api/v1/dashboard
pub(super) async fn dashboard(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<DashboardSummary>>, ApiError> {
    let summary = state
        .studio
        .lock()
        .await
        .dashboard()
        .map_err(|e| map_studio_error(&req_id.0, &e))?;
    Ok(ApiResponse::new(req_id, summary))
}

/// GET /api/v1/analytics
pub(super) async fn analytics(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<AnalyticsReport>>, ApiError> {
    let report = state
        .studio
        .lock()
        .await
        .analytics()
        .map_err(|e| map_studio_error(&req_id.0, &e))?;
    Ok(ApiResponse::new(req_id, report))
}

/// GET /api/v1/admin
pub(super) async fn admin_overview(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<AdminOverview>>, ApiError> {
    let overview = state
        .studio
        .lock()
        .await
        .admin_overview()
        .map_err(|e| map_studio_error(&req_id.0, &e))?;
    Ok(ApiResponse::new(req_id, overview))
}
