use std::sync::Arc;

use crate::application::ports::{DocumentStore, LlmClient, SessionStore};
use crate::application::services::{DocumentAnalysisService, QuestionAnswerer, RenderOrchestrator};

pub struct AppState<L>
where
    L: LlmClient,
{
    pub analysis_service: Arc<DocumentAnalysisService<L>>,
    pub render_orchestrator: Arc<RenderOrchestrator<L>>,
    pub question_answerer: Arc<QuestionAnswerer<L>>,
    pub document_store: Arc<dyn DocumentStore>,
    pub session_store: Arc<dyn SessionStore>,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            render_orchestrator: Arc::clone(&self.render_orchestrator),
            question_answerer: Arc::clone(&self.question_answerer),
            document_store: Arc::clone(&self.document_store),
            session_store: Arc::clone(&self.session_store),
        }
    }
}
