use axum::{extract::State, response::Json, routing::post, Router};
use shared::{LogRequest, LogResponse};
use tracing::{debug, error, info, warn};

use crate::AppState;

/// Create a router for the frontend log sink
pub fn router() -> Router<AppState> {
    Router::new().route("/logs", post(log_message))
}

/// Re-emit a browser log line through the server's tracing output
pub async fn log_message(
    State(_app_state): State<AppState>,
    Json(request): Json<LogRequest>,
) -> Json<LogResponse> {
    let component = request.component.as_deref().unwrap_or("frontend");

    match request.level.to_lowercase().as_str() {
        "debug" => debug!(target: "frontend", "[{}] {}", component, request.message),
        "warn" => warn!(target: "frontend", "[{}] {}", component, request.message),
        "error" => error!(target: "frontend", "[{}] {}", component, request.message),
        _ => info!(target: "frontend", "[{}] {}", component, request.message),
    }

    Json(LogResponse { success: true })
}
