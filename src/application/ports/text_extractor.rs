use std::path::Path;

use async_trait::async_trait;

/// Turns a stored document into plain text, pages in order.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, path: &Path) -> Result<String, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text found in document: {0}")]
    NoTextFound(String),
}
