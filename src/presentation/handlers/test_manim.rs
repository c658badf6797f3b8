use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::LlmClient;
use crate::application::services::RendererStatus;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct RendererCheckResponse {
    pub success: bool,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub message: String,
}

/// Reports the renderer status found by the startup probe.
pub async fn test_manim_handler<L>(State(state): State<AppState<L>>) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    let response = match state.render_orchestrator.status() {
        RendererStatus::Available { command, version } => RendererCheckResponse {
            success: true,
            available: true,
            command: Some(command.to_string()),
            version: Some(version.clone()),
            message: "Manim is working correctly".to_string(),
        },
        RendererStatus::Unavailable => RendererCheckResponse {
            success: false,
            available: false,
            command: None,
            version: None,
            message: "Manim is not available. Please install it first.".to_string(),
        },
    };

    (StatusCode::OK, Json(response))
}
