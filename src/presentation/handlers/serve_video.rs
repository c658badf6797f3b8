use std::io;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::application::ports::LlmClient;
use crate::presentation::state::AppState;

use super::error::error_response;
use super::video_file::{Disposition, is_traversal, stream_video};

#[tracing::instrument(skip(state))]
pub async fn serve_video_handler<L>(
    State(state): State<AppState<L>>,
    Path(filename): Path<String>,
) -> Response
where
    L: LlmClient + 'static,
{
    if filename.is_empty() || is_traversal(&filename) {
        tracing::warn!("Rejected video filename");
        return error_response(StatusCode::BAD_REQUEST, "Invalid filename");
    }

    let path = state.render_orchestrator.output_dir().join(&filename);
    match stream_video(&path, &filename, Disposition::Inline).await {
        Ok(response) => response,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            error_response(StatusCode::NOT_FOUND, "Video file not found")
        }
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "Failed to serve video");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error serving video")
        }
    }
}
