mod collab;
mod editor;
mod ideas;
mod reports;
mod session;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sparkstream_genai::{GeminiClient, GenAi};
use sparkstream_studio::{Slot, Studio, StudioError, Ticket};
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

/// Shared server state.
///
/// The studio lock is never held across a model call: AI handlers lock to
/// admit the request, release, await the model, then lock again to apply
/// the result. Overlapping requests for the same view are resolved by the
/// slot tickets, not by the lock.
#[derive(Clone)]
pub struct AppState {
    pub studio: Arc<Mutex<Studio>>,
    pub genai: Arc<GenAi<GeminiClient>>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    model: String,
    api_key_configured: bool,
}

/// A slot's state after a request: whether this request's result landed,
/// plus whatever the slot now shows.
#[derive(Debug, Serialize)]
pub(super) struct SlotSnapshot<T: Serialize> {
    ticket: Ticket,
    applied: bool,
    loading: bool,
    items: Vec<T>,
}

impl<T: Serialize + Clone> SlotSnapshot<T> {
    pub(super) fn of(slot: &Slot<T>, ticket: Ticket, applied: bool) -> Self {
        Self {
            ticket,
            applied,
            loading: slot.is_loading(),
            items: slot.items().to_vec(),
        }
    }
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(req_id: RequestId, data: T) -> Json<Self> {
        Json(Self {
            data,
            meta: ResponseMeta::new(req_id.0),
        })
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "unauthorized" => StatusCode::UNAUTHORIZED,
            "forbidden" => StatusCode::FORBIDDEN,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_studio_error(request_id: &str, error: &StudioError) -> ApiError {
    let code = match error {
        StudioError::NotLoggedIn | StudioError::InvalidAdminCredentials => "unauthorized",
        StudioError::ViewNotAllowed(_) => "forbidden",
        StudioError::EmptyInput(_) | StudioError::UnknownPlatform(_) => "validation_error",
        StudioError::NoSuchItem { .. } => "not_found",
    };
    tracing::debug!(error = %error, code, "studio rejected request");
    ApiError::new(request_id, code, error.to_string())
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route(
            "/api/v1/session",
            get(session::current_session).delete(session::logout),
        )
        .route("/api/v1/session/guest", post(session::login_guest))
        .route("/api/v1/session/admin", post(session::login_admin))
        .route("/api/v1/view", post(session::navigate))
        .route("/api/v1/dashboard", get(reports::dashboard))
        .route("/api/v1/analytics", get(reports::analytics))
        .route("/api/v1/admin", get(reports::admin_overview))
        .route("/api/v1/ideas", post(ideas::generate_ideas))
        .route("/api/v1/ideas/select", post(ideas::select_idea))
        .route("/api/v1/drafts/new", post(ideas::create_new))
        .route(
            "/api/v1/editor",
            get(editor::get_editor).put(editor::update_editor),
        )
        .route("/api/v1/vibe-check", post(editor::vibe_check))
        .route("/api/v1/posts", post(editor::save_original))
        .route("/api/v1/posts/variation", post(editor::save_variation))
        .route("/api/v1/collaborators", post(collab::find_collaborators))
        .route("/api/v1/collaborators/connect", post(collab::connect))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let client = state.genai.invoker();
    ApiResponse::new(
        req_id,
        HealthData {
            status: "ok",
            model: client.model().to_owned(),
            api_key_configured: client.has_api_key(),
        },
    )
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
