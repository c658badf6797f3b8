use std::io;

use axum::Extension;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use crate::application::ports::LlmClient;
use crate::domain::SessionId;
use crate::presentation::state::AppState;

use super::error::error_response;
use super::video_file::{Disposition, download_name_for, stream_video};

/// Sends the session's most recent video as an attachment.
#[tracing::instrument(skip(state), fields(session_id = %session_id))]
pub async fn download_video_handler<L>(
    State(state): State<AppState<L>>,
    Extension(session_id): Extension<SessionId>,
) -> Response
where
    L: LlmClient + 'static,
{
    let session = match state.session_store.load(session_id).await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load session");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Download failed");
        }
    };

    let Some(video) = session.current_video else {
        return error_response(StatusCode::NOT_FOUND, "No video available for download");
    };

    let download_name = download_name_for(&video.concept.title);
    match stream_video(&video.path, &download_name, Disposition::Attachment).await {
        Ok(response) => response,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %video.path.display(), "Video file missing");
            error_response(StatusCode::NOT_FOUND, "Video file not found")
        }
        Err(e) => {
            tracing::error!(error = %e, "Download failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Download failed")
        }
    }
}
