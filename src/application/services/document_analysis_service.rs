use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{LlmClient, TextExtractor, TextExtractorError};
use crate::domain::ConceptRecord;

use super::concept_identifier::{ConceptIdentifier, ConceptIdentifierError};

#[derive(Debug, Clone)]
pub struct AnalyzedDocument {
    pub text: String,
    pub concepts: Vec<ConceptRecord>,
}

/// Extraction followed by concept identification for one uploaded document.
pub struct DocumentAnalysisService<L: LlmClient> {
    extractor: Arc<dyn TextExtractor>,
    identifier: ConceptIdentifier<L>,
}

impl<L: LlmClient> DocumentAnalysisService<L> {
    pub fn new(extractor: Arc<dyn TextExtractor>, identifier: ConceptIdentifier<L>) -> Self {
        Self {
            extractor,
            identifier,
        }
    }

    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    pub async fn analyze(&self, path: &Path) -> Result<AnalyzedDocument, AnalysisError> {
        let text = match self.extractor.extract_text(path).await {
            Ok(text) => text,
            Err(TextExtractorError::NoTextFound(_)) => return Err(AnalysisError::NoText),
            Err(e) => return Err(AnalysisError::Extraction(e)),
        };

        if text.trim().is_empty() {
            return Err(AnalysisError::NoText);
        }
        tracing::info!(chars = text.chars().count(), "Extracted document text");

        let concepts = self
            .identifier
            .identify(&text)
            .await
            .map_err(AnalysisError::Identification)?;
        tracing::info!(count = concepts.len(), "Analysis complete");

        Ok(AnalyzedDocument { text, concepts })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("No text could be extracted from the PDF")]
    NoText,
    #[error("extraction: {0}")]
    Extraction(TextExtractorError),
    #[error("identification: {0}")]
    Identification(ConceptIdentifierError),
}
