mod code_generator;
mod code_normalizer;
mod concept_identifier;
mod document_analysis_service;
mod excerpt;
mod output_locator;
mod question_answerer;
mod render_orchestrator;
mod render_plan;

pub use code_generator::{CONTEXT_CHAR_BUDGET, CodeGenerationError, CodeGenerator, build_prompt};
pub use code_normalizer::{FRAMEWORK_IMPORT, normalize_source};
pub use concept_identifier::{
    ANALYSIS_CHAR_BUDGET, ConceptIdentifier, ConceptIdentifierError, ConceptParseError,
    MAX_CONCEPTS, parse_concepts,
};
pub use document_analysis_service::{AnalysisError, AnalyzedDocument, DocumentAnalysisService};
pub use excerpt::leading_chars;
pub use output_locator::{OutputLocator, VideoCandidate, select_candidate};
pub use question_answerer::{QuestionAnswerer, QuestionError, build_context};
pub use render_orchestrator::{
    RenderError, RenderOptions, RenderOrchestrator, RendererStatus, probe_renderer,
};
pub use render_plan::{RenderAttempt, RenderPlan, RenderQuality, RendererCommand};
