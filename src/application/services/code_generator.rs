use std::sync::Arc;

use crate::application::ports::{CompletionRequest, LlmClient, LlmClientError};
use crate::domain::ConceptRecord;

use super::excerpt::leading_chars;

pub const CONTEXT_CHAR_BUDGET: usize = 1000;
const GENERATION_TEMPERATURE: f32 = 0.2;

const SYSTEM_PROMPT: &str =
    "You are an expert in creating educational Manim animations. Generate clean, well-commented code.";

pub struct CodeGenerator<L: LlmClient> {
    llm_client: Arc<L>,
}

impl<L: LlmClient> CodeGenerator<L> {
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    /// Returns the raw model response; it usually wraps the scene in a fenced
    /// code block and is not checked for validity.
    #[tracing::instrument(skip(self, concept, context), fields(title = %concept.title))]
    pub async fn generate(
        &self,
        concept: &ConceptRecord,
        context: &str,
    ) -> Result<String, CodeGenerationError> {
        let request = CompletionRequest::new(
            SYSTEM_PROMPT,
            build_prompt(concept, context),
            GENERATION_TEMPERATURE,
        );

        tracing::info!("Sending Manim code generation request");
        let code = self
            .llm_client
            .complete(&request)
            .await
            .map_err(CodeGenerationError::Completion)?;

        if code.trim().is_empty() {
            return Err(CodeGenerationError::EmptyResponse);
        }

        tracing::info!(code_chars = code.len(), "Generated Manim code");
        Ok(code)
    }
}

pub fn build_prompt(concept: &ConceptRecord, context: &str) -> String {
    format!(
        "Generate high-quality Manim code for the following mathematical concept:

Title: {title}
Type: {kind}
Description: {description}
Complexity: {complexity}
Key Concepts: {key_concepts}

Context from PDF: {context}

Requirements:
1. Create a complete Manim scene class
2. Use high-quality animations and transitions
3. Include clear mathematical notation using MathTex
4. Add explanatory text where appropriate
5. Use appropriate colors and styling
6. Include smooth camera movements if needed
7. Target duration: {duration} seconds

Return only the Python code for the Manim scene.",
        title = concept.title,
        kind = concept.kind,
        description = concept.description,
        complexity = concept.complexity,
        key_concepts = concept.key_concepts_joined(),
        context = leading_chars(context, CONTEXT_CHAR_BUDGET),
        duration = concept.estimated_duration,
    )
}

#[derive(Debug, thiserror::Error)]
pub enum CodeGenerationError {
    #[error("completion: {0}")]
    Completion(LlmClientError),
    #[error("model returned no code")]
    EmptyResponse,
}
