use std::io;
use std::path::Path;

use axum::body::Body;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tokio_util::io::ReaderStream;

const VIDEO_MIME: &str = "video/mp4";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Inline,
    Attachment,
}

/// Streams an mp4 from disk. `io::ErrorKind::NotFound` means the file is gone.
pub async fn stream_video(
    path: &Path,
    download_name: &str,
    disposition: Disposition,
) -> io::Result<Response> {
    let file = tokio::fs::File::open(path).await?;
    let length = file.metadata().await?.len();
    let body = Body::from_stream(ReaderStream::new(file));

    let kind = match disposition {
        Disposition::Inline => "inline",
        Disposition::Attachment => "attachment",
    };
    let disposition_value = HeaderValue::from_str(&format!(
        "{kind}; filename=\"{}\"",
        header_safe_name(download_name)
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, HeaderValue::from_static(VIDEO_MIME)),
            (CONTENT_LENGTH, HeaderValue::from(length)),
            (CONTENT_DISPOSITION, disposition_value),
        ],
        body,
    )
        .into_response())
}

/// `math_video_<title with spaces as underscores>.mp4`
pub fn download_name_for(title: &str) -> String {
    format!("math_video_{}.mp4", title.replace(' ', "_"))
}

fn header_safe_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_graphic() && !matches!(c, '"' | '\\'))
        .collect()
}

/// Filenames may not climb out of the video directory.
pub fn is_traversal(filename: &str) -> bool {
    filename.contains("..") || filename.contains('/') || filename.contains('\\')
}
