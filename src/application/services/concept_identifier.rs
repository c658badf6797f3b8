use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::application::ports::{CompletionRequest, LlmClient, LlmClientError};
use crate::domain::ConceptRecord;

use super::excerpt::leading_chars;

pub const ANALYSIS_CHAR_BUDGET: usize = 4000;
pub const MAX_CONCEPTS: usize = 10;
const ANALYSIS_TEMPERATURE: f32 = 0.3;

const SYSTEM_PROMPT: &str = "You are an expert mathematics educator who identifies content suitable for educational videos.";

const ANALYSIS_PROMPT: &str = "Analyze the following mathematical text and identify concepts that would be suitable for educational videos.
Look for:
1. Definitions of mathematical concepts
2. Theorems and proofs
3. Worked examples with step-by-step solutions
4. Geometric constructions
5. Graph plotting or function visualization
6. Algorithm demonstrations

For each suitable concept, provide:
- title: Brief descriptive title
- type: \"definition\", \"theorem\", \"example\", \"construction\", \"visualization\", \"algorithm\"
- description: 2-3 sentence description of what the video would show
- complexity: \"basic\", \"intermediate\", \"advanced\"
- estimated_duration: estimated video length in seconds
- key_concepts: list of mathematical concepts involved

Return as JSON array. Maximum 10 items.

Text to analyze:
";

static JSON_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("static pattern compiles"));

pub struct ConceptIdentifier<L: LlmClient> {
    llm_client: Arc<L>,
}

impl<L: LlmClient> ConceptIdentifier<L> {
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    /// Asks the model for animation-worthy concepts in `text`.
    ///
    /// Only the first [`ANALYSIS_CHAR_BUDGET`] characters are sent. A response
    /// without a usable JSON array yields an empty list, not an error.
    #[tracing::instrument(skip(self, text), fields(text_chars = text.chars().count()))]
    pub async fn identify(&self, text: &str) -> Result<Vec<ConceptRecord>, ConceptIdentifierError> {
        let prompt = format!(
            "{ANALYSIS_PROMPT}{}",
            leading_chars(text, ANALYSIS_CHAR_BUDGET)
        );
        let request = CompletionRequest::new(SYSTEM_PROMPT, prompt, ANALYSIS_TEMPERATURE);

        tracing::info!("Sending content analysis request");
        let response = self
            .llm_client
            .complete(&request)
            .await
            .map_err(ConceptIdentifierError::Completion)?;
        tracing::debug!(response_chars = response.len(), "Received analysis response");

        match parse_concepts(&response) {
            Ok(concepts) => {
                tracing::info!(count = concepts.len(), "Parsed concepts from response");
                for (index, concept) in concepts.iter().enumerate() {
                    tracing::debug!(index, title = %concept.title, kind = %concept.kind, "Concept");
                }
                Ok(concepts)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Treating analysis response as containing no concepts");
                Ok(Vec::new())
            }
        }
    }
}

/// Decodes the first greedy `[...]` span of a free-form model response.
///
/// Elements that do not form a complete [`ConceptRecord`] are dropped and the
/// result is capped at [`MAX_CONCEPTS`].
pub fn parse_concepts(response: &str) -> Result<Vec<ConceptRecord>, ConceptParseError> {
    let array = JSON_ARRAY
        .find(response)
        .ok_or(ConceptParseError::NoArrayFound)?;

    let values: Vec<serde_json::Value> = serde_json::from_str(array.as_str())
        .map_err(|e| ConceptParseError::MalformedJson(e.to_string()))?;

    let concepts = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(concept) => Some(concept),
            Err(e) => {
                tracing::debug!(index, error = %e, "Dropping incomplete concept");
                None
            }
        })
        .take(MAX_CONCEPTS)
        .collect();

    Ok(concepts)
}

#[derive(Debug, thiserror::Error)]
pub enum ConceptParseError {
    #[error("no JSON array found in response")]
    NoArrayFound,
    #[error("malformed JSON array: {0}")]
    MalformedJson(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConceptIdentifierError {
    #[error("completion: {0}")]
    Completion(LlmClientError),
}
