use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use mathcast::application::ports::{CommandRunner, DocumentStore, SessionStore, TextExtractor};
use mathcast::application::services::{
    CodeGenerator, ConceptIdentifier, DocumentAnalysisService, QuestionAnswerer,
    RenderOrchestrator, RendererStatus,
};
use mathcast::infrastructure::llm::OpenAiClient;
use mathcast::infrastructure::observability::init_tracing;
use mathcast::infrastructure::process::TokioCommandRunner;
use mathcast::infrastructure::session::InMemorySessionStore;
use mathcast::infrastructure::storage::LocalDocumentStore;
use mathcast::infrastructure::text_processing::{FallbackTextExtractor, LopdfAdapter, PdfAdapter};
use mathcast::presentation::{AppState, Environment, SessionCookie, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&settings.logging, environment);
    tracing::info!(environment = %environment, "Starting mathcast");

    settings
        .storage
        .ensure_directories()
        .context("Failed to create storage directories")?;

    let llm_client = Arc::new(
        OpenAiClient::new(
            &settings.llm.base_url,
            settings.llm.api_key.clone(),
            settings.llm.model.clone(),
            Duration::from_secs(settings.llm.request_timeout_secs),
        )
        .context("Failed to build LLM client")?,
    );

    let extractor: Arc<dyn TextExtractor> = Arc::new(FallbackTextExtractor::new(
        Arc::new(PdfAdapter::new()),
        Arc::new(LopdfAdapter::new()),
    ));
    let analysis_service = Arc::new(DocumentAnalysisService::new(
        extractor,
        ConceptIdentifier::new(Arc::clone(&llm_client)),
    ));

    let runner: Arc<dyn CommandRunner> = Arc::new(TokioCommandRunner::new());
    let render_orchestrator = Arc::new(
        RenderOrchestrator::initialize(
            CodeGenerator::new(Arc::clone(&llm_client)),
            runner,
            settings.render_options(),
        )
        .await,
    );

    match render_orchestrator.status() {
        RendererStatus::Available { command, version } => {
            tracing::info!(command = %command, version = %version, "Renderer ready");
        }
        RendererStatus::Unavailable if settings.renderer.require_available => {
            anyhow::bail!("Renderer is required but none of the configured commands responded");
        }
        RendererStatus::Unavailable => {
            tracing::warn!("Renderer unavailable; video generation requests will fail");
        }
    }

    let question_answerer = Arc::new(QuestionAnswerer::new(Arc::clone(&llm_client)));

    let document_store: Arc<dyn DocumentStore> = Arc::new(
        LocalDocumentStore::new(settings.storage.upload_dir.clone())
            .context("Failed to open upload directory")?,
    );
    let session_store: Arc<dyn SessionStore> =
        Arc::new(InMemorySessionStore::new(settings.session.idle_timeout()));

    let state = AppState {
        analysis_service,
        render_orchestrator,
        question_answerer,
        document_store,
        session_store,
    };

    let router = create_router(
        state,
        SessionCookie(settings.session.cookie_name.clone()),
        settings.server.max_upload_bytes(),
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
