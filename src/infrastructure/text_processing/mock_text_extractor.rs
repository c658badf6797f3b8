use std::path::Path;

use crate::application::ports::{TextExtractor, TextExtractorError};

/// Reads the stored file as UTF-8, so tests can upload plain text as a "PDF".
pub struct MockTextExtractor;

#[async_trait::async_trait]
impl TextExtractor for MockTextExtractor {
    async fn extract_text(&self, path: &Path) -> Result<String, TextExtractorError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TextExtractorError::ExtractionFailed(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(TextExtractorError::NoTextFound(path.display().to_string()));
        }
        Ok(text)
    }
}
