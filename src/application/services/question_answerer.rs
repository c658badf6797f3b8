use std::sync::Arc;

use crate::application::ports::{CompletionRequest, LlmClient, LlmClientError};
use crate::domain::ConceptRecord;

use super::excerpt::leading_chars;

const QA_TEMPERATURE: f32 = 0.3;
const DOCUMENT_EXCERPT_CHARS: usize = 1000;

const SYSTEM_PROMPT: &str = "You are a helpful mathematics tutor answering questions about educational videos and mathematical concepts.";

pub struct QuestionAnswerer<L: LlmClient> {
    llm_client: Arc<L>,
}

impl<L: LlmClient> QuestionAnswerer<L> {
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    #[tracing::instrument(skip_all, fields(title = %concept.title))]
    pub async fn answer(
        &self,
        question: &str,
        concept: &ConceptRecord,
        document_text: &str,
    ) -> Result<String, QuestionError> {
        let context = build_context(concept, document_text);
        let request = CompletionRequest::new(
            SYSTEM_PROMPT,
            format!("Context: {context}\n\nQuestion: {question}"),
            QA_TEMPERATURE,
        );

        let answer = self
            .llm_client
            .complete(&request)
            .await
            .map_err(QuestionError::Completion)?;

        tracing::info!(answer_chars = answer.len(), "Answer generated");
        Ok(answer)
    }
}

pub fn build_context(concept: &ConceptRecord, document_text: &str) -> String {
    format!(
        "Video concept: {}\nDescription: {}\nType: {}\nKey concepts: {}\n\nOriginal PDF content: {}",
        concept.title,
        concept.description,
        concept.kind,
        concept.key_concepts_joined(),
        leading_chars(document_text, DOCUMENT_EXCERPT_CHARS)
    )
}

#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    #[error("completion: {0}")]
    Completion(LlmClientError),
}
