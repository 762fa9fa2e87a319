//! HTTP routes and handlers

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::Html,
    routing::get,
    Router,
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{debug, info};

use crate::extract::extract_text;
use crate::render::{format_response, render_page};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route(
            "/emotionDetector",
            get(emotion_detector).post(emotion_detector),
        )
        .fallback(fallback)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Analyze the submitted text and render the result sentence
async fn emotion_detector(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Html<String> {
    metrics::counter!("emodetect_requests_total").increment(1);

    let text = extract_text(&method, &uri, &headers, body).await;
    debug!(%method, text = %text, "Analyzing text");

    let result = state.detector.detect(&text).await;

    let outcome = if result.is_absent() { "absent" } else { "detected" };
    metrics::counter!("emodetect_detections_total", "outcome" => outcome).increment(1);
    info!(
        detector = state.detector.name(),
        outcome,
        dominant = ?result.dominant_emotion(),
        "Detection complete"
    );

    Html(render_page(&format_response(&result)))
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
