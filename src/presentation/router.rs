use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::LlmClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    ask_question_handler, download_video_handler, generate_video_handler, health_handler,
    serve_video_handler, test_manim_handler, upload_handler,
};
use crate::presentation::session::{SessionCookie, session_middleware};
use crate::presentation::state::AppState;

pub fn create_router<L>(
    state: AppState<L>,
    session_cookie: SessionCookie,
    max_upload_bytes: usize,
) -> Router
where
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler::<L>))
        .route("/upload", post(upload_handler::<L>))
        .route("/generate_video", post(generate_video_handler::<L>))
        .route("/download_video", get(download_video_handler::<L>))
        .route("/videos/{filename}", get(serve_video_handler::<L>))
        .route("/ask_question", post(ask_question_handler::<L>))
        .route("/test_manim", get(test_manim_handler::<L>))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .layer(middleware::from_fn_with_state(
            session_cookie,
            session_middleware,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
