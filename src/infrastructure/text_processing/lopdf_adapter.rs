use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{TextExtractor, TextExtractorError};

use super::pdf_adapter::EXTRACTION_TIMEOUT;
use super::text_sanitizer::join_pages;

/// Secondary extractor, backed by `lopdf`. Walks pages by page number and
/// skips pages it cannot decode instead of failing the whole document.
#[derive(Default)]
pub struct LopdfAdapter;

impl LopdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<Vec<String>, TextExtractorError> {
        let doc = lopdf::Document::load(path).map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("lopdf failed to load PDF: {e}"))
        })?;

        let pages = doc.get_pages();
        let mut texts = Vec::with_capacity(pages.len());

        for page_number in pages.keys() {
            match doc.extract_text(&[*page_number]) {
                Ok(text) => {
                    tracing::debug!(page = page_number, chars = text.len(), "lopdf extracted page");
                    texts.push(text);
                }
                Err(e) => {
                    tracing::warn!(page = page_number, error = %e, "lopdf could not extract page");
                }
            }
        }

        Ok(texts)
    }
}

#[async_trait]
impl TextExtractor for LopdfAdapter {
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn extract_text(&self, path: &Path) -> Result<String, TextExtractorError> {
        let owned: PathBuf = path.to_path_buf();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned)),
        )
        .await
        .map_err(|_| TextExtractorError::ExtractionFailed("lopdf extraction timed out".to_string()))?
        .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        join_pages(pages)
            .ok_or_else(|| TextExtractorError::NoTextFound(path.display().to_string()))
    }
}
