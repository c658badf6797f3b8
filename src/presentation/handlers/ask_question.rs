use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::domain::SessionId;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::error_response;

#[derive(Debug, Deserialize)]
pub struct AskQuestionRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Serialize)]
pub struct AskQuestionResponse {
    pub success: bool,
    pub answer: String,
    pub question: String,
}

#[tracing::instrument(skip(state, payload), fields(session_id = %session_id))]
pub async fn ask_question_handler<L>(
    State(state): State<AppState<L>>,
    Extension(session_id): Extension<SessionId>,
    payload: Result<Json<AskQuestionRequest>, JsonRejection>,
) -> Response
where
    L: LlmClient + 'static,
{
    let question = match payload {
        Ok(Json(request)) => request.question.trim().to_string(),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected question payload");
            String::new()
        }
    };

    if question.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Please provide a question");
    }

    let session = match state.session_store.load(session_id).await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load session");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to answer question",
            );
        }
    };

    let Some(video) = session.current_video.as_ref() else {
        return error_response(StatusCode::NOT_FOUND, "No video context available");
    };

    tracing::info!(question = %sanitize_prompt(&question), "Answering question");

    let result = state
        .question_answerer
        .answer(&question, &video.concept, session.document_text())
        .await;

    match result {
        Ok(answer) => (
            StatusCode::OK,
            Json(AskQuestionResponse {
                success: true,
                answer,
                question,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Question answering failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to answer question",
            )
        }
    }
}
