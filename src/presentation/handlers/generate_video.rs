use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::domain::{ConceptRecord, CurrentVideo, SessionId};
use crate::presentation::state::AppState;

use super::error::error_response;

#[derive(Debug, Deserialize)]
pub struct GenerateVideoRequest {
    pub concept_index: Option<usize>,
    #[serde(default)]
    pub concepts: Vec<ConceptRecord>,
}

#[derive(Serialize)]
pub struct GenerateVideoResponse {
    pub success: bool,
    pub video_path: String,
    pub concept: ConceptRecord,
    pub message: String,
}

#[tracing::instrument(skip(state, payload), fields(session_id = %session_id))]
pub async fn generate_video_handler<L>(
    State(state): State<AppState<L>>,
    Extension(session_id): Extension<SessionId>,
    payload: Result<Json<GenerateVideoRequest>, JsonRejection>,
) -> Response
where
    L: LlmClient + 'static,
{
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected generate request");
            return error_response(StatusCode::BAD_REQUEST, "Invalid concept selection");
        }
    };

    let concept = match request
        .concept_index
        .and_then(|index| request.concepts.get(index))
    {
        Some(concept) => concept.clone(),
        None => {
            tracing::warn!(
                index = ?request.concept_index,
                available = request.concepts.len(),
                "Concept index out of range"
            );
            return error_response(StatusCode::BAD_REQUEST, "Invalid concept selection");
        }
    };

    let mut session = match state.session_store.load(session_id).await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load session");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Video generation failed");
        }
    };

    tracing::info!(title = %concept.title, "Generating video");
    let video = match state
        .render_orchestrator
        .create_video(&concept, session.document_text())
        .await
    {
        Ok(video) => video,
        Err(e) => {
            tracing::error!(error = %e, "Video generation failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    session.current_video = Some(CurrentVideo {
        path: video.path.clone(),
        concept: concept.clone(),
        generated_at: chrono::Utc::now(),
    });
    if let Err(e) = state.session_store.save(session_id, session).await {
        tracing::error!(error = %e, "Failed to save session");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Video generation failed");
    }

    (
        StatusCode::OK,
        Json(GenerateVideoResponse {
            success: true,
            video_path: video.public_url(),
            concept,
            message: "Video generated successfully".to_string(),
        }),
    )
        .into_response()
}
