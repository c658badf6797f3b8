use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{TextExtractor, TextExtractorError};

/// Uses `primary`, and `secondary` when the primary fails. When both fail the
/// document counts as having no extractable text.
pub struct FallbackTextExtractor {
    primary: Arc<dyn TextExtractor>,
    secondary: Arc<dyn TextExtractor>,
}

impl FallbackTextExtractor {
    pub fn new(primary: Arc<dyn TextExtractor>, secondary: Arc<dyn TextExtractor>) -> Self {
        Self { primary, secondary }
    }
}

#[async_trait]
impl TextExtractor for FallbackTextExtractor {
    async fn extract_text(&self, path: &Path) -> Result<String, TextExtractorError> {
        let primary_error = match self.primary.extract_text(path).await {
            Ok(text) => return Ok(text),
            Err(e) => e,
        };
        tracing::warn!(error = %primary_error, "Primary extractor failed, falling back");

        self.secondary.extract_text(path).await.map_err(|secondary_error| {
            tracing::error!(error = %secondary_error, "Fallback extractor failed");
            TextExtractorError::NoTextFound(path.display().to_string())
        })
    }
}
