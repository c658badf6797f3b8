use std::io;
use std::path::PathBuf;

use axum::extract::{Multipart, State};
use axum::extract::multipart::Field;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use futures::{StreamExt, TryStreamExt};
use serde::Serialize;

use crate::application::ports::{DocumentStoreError, LlmClient};
use crate::application::services::AnalysisError;
use crate::domain::{ConceptRecord, ContentType, SessionDocument, SessionId, StoragePath};
use crate::presentation::state::AppState;

use super::error::error_response;

#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub concepts: Vec<ConceptRecord>,
    pub message: String,
}

struct StoredUpload {
    filename: String,
    path: PathBuf,
}

#[tracing::instrument(skip(state, multipart), fields(session_id = %session_id))]
pub async fn upload_handler<L>(
    State(state): State<AppState<L>>,
    Extension(session_id): Extension<SessionId>,
    mut multipart: Multipart,
) -> Response
where
    L: LlmClient + 'static,
{
    let stored = loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                tracing::warn!("No file in request");
                return error_response(StatusCode::BAD_REQUEST, "No file selected");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        };

        if field.name() == Some("file") {
            break store_upload(&state, field).await;
        }
    };

    let stored = match stored {
        Ok(stored) => stored,
        Err(response) => return response,
    };

    let analyzed = match state.analysis_service.analyze(&stored.path).await {
        Ok(analyzed) => analyzed,
        Err(AnalysisError::Identification(e)) => {
            tracing::error!(error = %e, "Content analysis failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Content analysis failed");
        }
        Err(e) => {
            tracing::error!(error = %e, "PDF processing failed");
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    let mut session = match state.session_store.load(session_id).await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load session");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Upload failed");
        }
    };
    session.document = Some(SessionDocument {
        text: analyzed.text,
        path: stored.path,
    });
    if let Err(e) = state.session_store.save(session_id, session).await {
        tracing::error!(error = %e, "Failed to save session");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Upload failed");
    }

    let count = analyzed.concepts.len();
    tracing::info!(filename = %stored.filename, concepts = count, "PDF processed");

    (
        StatusCode::OK,
        Json(UploadResponse {
            success: true,
            concepts: analyzed.concepts,
            message: format!("Found {} concepts suitable for video generation", count),
        }),
    )
        .into_response()
}

/// Validates the upload's name and streams it into the document store.
/// Nothing is written for a rejected file.
async fn store_upload<L>(
    state: &AppState<L>,
    field: Field<'_>,
) -> Result<StoredUpload, Response>
where
    L: LlmClient + 'static,
{
    let filename = field.file_name().unwrap_or_default().to_string();
    if filename.is_empty() {
        tracing::warn!("Empty filename");
        return Err(error_response(StatusCode::BAD_REQUEST, "No file selected"));
    }

    let Some(content_type) = ContentType::from_filename(&filename) else {
        tracing::warn!(filename = %filename, "Invalid file type");
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Invalid file type. Please upload a PDF file.",
        ));
    };

    let storage_path = StoragePath::for_upload(&chrono::Local::now(), &filename);
    tracing::info!(
        filename = %filename,
        content_type = content_type.as_mime(),
        path = %storage_path,
        "Saving upload"
    );

    let stream = field.map_err(io::Error::other).boxed();
    let bytes = match state.document_store.store(&storage_path, stream).await {
        Ok(bytes) => bytes,
        Err(DocumentStoreError::Io(e)) => {
            tracing::warn!(error = %e, "Upload stream interrupted");
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read file: {}", e),
            ));
        }
        Err(e) => {
            tracing::error!(error = %e, "File save failed");
            return Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "File save failed",
            ));
        }
    };

    let path = state.document_store.local_path(&storage_path).map_err(|e| {
        tracing::error!(error = %e, "Stored file has no local path");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "File save failed")
    })?;

    tracing::debug!(bytes, path = %path.display(), "Upload stored");
    Ok(StoredUpload { filename, path })
}
