//! REST surface
//!
//! Thin handlers over [`VisionSession`]: every request is marshaled onto the
//! blocking pool (the facade holds a blocking lock across FFI calls) and the
//! facade's outcome is mapped onto HTTP statuses — `Option::None` becomes
//! 503 with an explanatory body, lifecycle failures become 400 or 500
//! depending on whether the caller can fix them.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use vision_core::{ApiMessage, Result as VisionResult};

use crate::session::VisionSession;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<VisionSession>,
}

/// Build the full API router.
pub fn router(session: Arc<VisionSession>) -> Router {
    Router::new()
        // Camera lifecycle
        .route("/api/camera/status", get(camera_status))
        .route("/api/camera/start", post(camera_start))
        .route("/api/camera/stop", post(camera_stop))
        .route("/api/camera/cascade", post(load_cascade))
        // Detection
        .route("/api/detection/color", get(detect_color))
        .route("/api/detection/faces", get(detect_faces))
        .route("/api/detection/circles", get(detect_circles))
        .route("/api/detection/edges", get(detect_edges))
        // Frame access
        .route("/api/frame/info", get(frame_info))
        .route("/api/frame/rgb", get(frame_rgb))
        .route("/api/frame/image", get(frame_image))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(AppState { session })
}

/// Run a facade call on the blocking pool. The lock is held across native
/// engine calls, so it must never be taken from an async worker directly.
async fn with_session<T, F>(session: Arc<VisionSession>, f: F) -> std::result::Result<T, Response>
where
    F: FnOnce(&VisionSession) -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&session))
        .await
        .map_err(|e| {
            error!(error = %e, "session task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiMessage::new("internal error")),
            )
                .into_response()
        })
}

/// 200 with the operation's message, or 400/500 with the failure reason.
fn message_response(result: VisionResult<String>) -> Response {
    match result {
        Ok(message) => (StatusCode::OK, Json(ApiMessage::new(message))).into_response(),
        Err(e) => {
            let code = if e.is_bad_input() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (code, Json(ApiMessage::new(e.to_string()))).into_response()
        }
    }
}

/// 200 with the payload, or 503 explaining the unmet precondition.
fn available_response<T: Serialize>(result: Option<T>, unavailable: &str) -> Response {
    match result {
        Some(payload) => Json(payload).into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiMessage::new(unavailable)),
        )
            .into_response(),
    }
}

// ===== Camera lifecycle =====

async fn camera_status(State(state): State<AppState>) -> Response {
    match with_session(state.session, |s| s.status()).await {
        Ok(status) => Json(status).into_response(),
        Err(resp) => resp,
    }
}

async fn camera_start(State(state): State<AppState>) -> Response {
    match with_session(state.session, |s| s.start()).await {
        Ok(result) => message_response(result),
        Err(resp) => resp,
    }
}

async fn camera_stop(State(state): State<AppState>) -> Response {
    match with_session(state.session, |s| s.stop()).await {
        Ok(result) => message_response(result),
        Err(resp) => resp,
    }
}

#[derive(Debug, Deserialize)]
struct CascadeQuery {
    path: Option<String>,
}

async fn load_cascade(
    State(state): State<AppState>,
    Query(query): Query<CascadeQuery>,
) -> Response {
    match with_session(state.session, move |s| {
        s.load_cascade(query.path.as_deref().map(std::path::Path::new))
    })
    .await
    {
        Ok(result) => message_response(result),
        Err(resp) => resp,
    }
}

// ===== Detection =====

async fn detect_color(State(state): State<AppState>) -> Response {
    match with_session(state.session, |s| s.detect_color()).await {
        Ok(result) => available_response(result, "camera not active"),
        Err(resp) => resp,
    }
}

async fn detect_faces(State(state): State<AppState>) -> Response {
    match with_session(state.session, |s| s.detect_faces()).await {
        Ok(result) => available_response(
            result,
            "camera not active or no cascade loaded; POST /api/camera/cascade first",
        ),
        Err(resp) => resp,
    }
}

async fn detect_circles(State(state): State<AppState>) -> Response {
    match with_session(state.session, |s| s.detect_circles()).await {
        Ok(result) => available_response(result, "camera not active"),
        Err(resp) => resp,
    }
}

async fn detect_edges(State(state): State<AppState>) -> Response {
    match with_session(state.session, |s| s.detect_edges()).await {
        Ok(result) => available_response(result, "camera not active"),
        Err(resp) => resp,
    }
}

// ===== Frame access =====

async fn frame_info(State(state): State<AppState>) -> Response {
    match with_session(state.session, |s| s.frame_info()).await {
        Ok(result) => available_response(result, "camera not active or no frame available"),
        Err(resp) => resp,
    }
}

async fn frame_rgb(State(state): State<AppState>) -> Response {
    match with_session(state.session, |s| s.frame_rgb()).await {
        Ok(result) => available_response(result, "no frame available"),
        Err(resp) => resp,
    }
}

async fn frame_image(State(state): State<AppState>) -> Response {
    match with_session(state.session, |s| s.frame_bmp()).await {
        Ok(Some(bytes)) => (
            [
                (header::CONTENT_TYPE, "image/bmp"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"frame.bmp\"",
                ),
            ],
            bytes,
        )
            .into_response(),
        Ok(None) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiMessage::new("no frame available")),
        )
            .into_response(),
        Err(resp) => resp,
    }
}
