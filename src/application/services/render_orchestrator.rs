use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::Timelike;
use tokio::sync::Mutex;

use crate::application::ports::{CommandRunner, LlmClient};
use crate::domain::{ConceptRecord, RenderedVideo, SceneId};

use super::code_generator::{CodeGenerationError, CodeGenerator};
use super::code_normalizer::normalize_source;
use super::output_locator::{OutputLocator, VideoCandidate};
use super::render_plan::{RenderPlan, RendererCommand};

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub output_dir: PathBuf,
    /// Invocation spellings in probe order.
    pub candidates: Vec<RendererCommand>,
    pub probe_timeout: Duration,
    pub render_timeout: Duration,
    pub recent_window: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererStatus {
    Available {
        command: RendererCommand,
        version: String,
    },
    Unavailable,
}

impl RendererStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, RendererStatus::Available { .. })
    }
}

/// Turns a concept into a video on disk.
///
/// Renderer availability is probed once, in [`RenderOrchestrator::initialize`].
/// Renders are serialized: the output search relies on "newest file wins",
/// which only holds while a single render writes into the output directory.
pub struct RenderOrchestrator<L: LlmClient> {
    code_generator: CodeGenerator<L>,
    runner: Arc<dyn CommandRunner>,
    options: RenderOptions,
    locator: OutputLocator,
    status: RendererStatus,
    plan: Option<RenderPlan>,
    last_scene: Mutex<Option<SceneId>>,
}

impl<L: LlmClient> RenderOrchestrator<L> {
    pub async fn initialize(
        code_generator: CodeGenerator<L>,
        runner: Arc<dyn CommandRunner>,
        mut options: RenderOptions,
    ) -> Self {
        // The renderer runs with the output dir as cwd, so every path handed
        // to it must be absolute.
        options.output_dir = absolute_output_dir(&options.output_dir);

        let status = probe_renderer(runner.as_ref(), &options.candidates, options.probe_timeout).await;
        let plan = match &status {
            RendererStatus::Available { command, .. } => {
                Some(RenderPlan::new(command, &options.candidates))
            }
            RendererStatus::Unavailable => None,
        };
        let locator = OutputLocator::new(options.output_dir.clone(), options.recent_window);

        Self {
            code_generator,
            runner,
            options,
            locator,
            status,
            plan,
            last_scene: Mutex::new(None),
        }
    }

    pub fn status(&self) -> &RendererStatus {
        &self.status
    }

    pub fn output_dir(&self) -> &Path {
        &self.options.output_dir
    }

    #[tracing::instrument(skip(self, concept, context), fields(title = %concept.title))]
    pub async fn create_video(
        &self,
        concept: &ConceptRecord,
        context: &str,
    ) -> Result<RenderedVideo, RenderError> {
        let plan = self.plan.as_ref().ok_or(RenderError::RendererUnavailable)?;

        let generated = self
            .code_generator
            .generate(concept, context)
            .await
            .map_err(RenderError::CodeGeneration)?;

        let source = normalize_source(&generated);
        tracing::debug!(
            raw_chars = generated.len(),
            normalized_chars = source.len(),
            "Normalized generated code"
        );

        let mut last_scene = self.last_scene.lock().await;
        let scene = next_scene_id(last_scene.as_ref()).await;
        *last_scene = Some(scene.clone());
        tracing::info!(scene = %scene, "Render job started");

        let source_path = self.write_source(&scene, &source).await?;
        self.run_attempts(plan, &scene, &source_path).await?;

        let candidate = self.find_output(&scene).await?;
        let path = self.promote(&candidate, &scene).await?;

        tracing::info!(scene = %scene, path = %path.display(), "Video generation completed");
        Ok(RenderedVideo {
            scene_id: scene,
            path,
        })
    }

    async fn write_source(&self, scene: &SceneId, source: &str) -> Result<PathBuf, RenderError> {
        let path = self.options.output_dir.join(scene.source_file_name());
        tokio::fs::write(&path, source)
            .await
            .map_err(|e| RenderError::WriteSource(e.to_string()))?;
        tracing::info!(path = %path.display(), bytes = source.len(), "Wrote scene source");
        Ok(path)
    }

    async fn run_attempts(
        &self,
        plan: &RenderPlan,
        scene: &SceneId,
        source_path: &Path,
    ) -> Result<(), RenderError> {
        let mut last_failure = String::from("no render attempt was made");

        for (index, attempt) in plan.attempts().iter().enumerate() {
            let spec = attempt.command.render(
                attempt.quality,
                &self.options.output_dir,
                source_path,
                scene,
            );
            tracing::info!(attempt = index + 1, quality = %attempt.quality, command = %spec, "Running renderer");

            match self.runner.run(&spec, self.options.render_timeout).await {
                Ok(output) if output.success() => {
                    tracing::debug!(stdout = %output.stdout, "Renderer succeeded");
                    return Ok(());
                }
                Ok(output) => {
                    tracing::warn!(
                        attempt = index + 1,
                        exit_code = ?output.exit_code,
                        stderr = %output.stderr,
                        "Render attempt failed"
                    );
                    last_failure = if output.stderr.trim().is_empty() {
                        format!("exit code {:?}", output.exit_code)
                    } else {
                        output.stderr.trim().to_string()
                    };
                }
                Err(e) => {
                    tracing::warn!(attempt = index + 1, error = %e, "Render attempt could not run");
                    last_failure = e.to_string();
                }
            }
        }

        Err(RenderError::AllAttemptsFailed {
            attempts: plan.attempts().len(),
            last_error: last_failure,
        })
    }

    async fn find_output(&self, scene: &SceneId) -> Result<VideoCandidate, RenderError> {
        let locator = self.locator.clone();
        let search_scene = scene.clone();
        let found = tokio::task::spawn_blocking(move || locator.locate(&search_scene))
            .await
            .map_err(|e| RenderError::Search(format!("task join error: {e}")))?;

        match found {
            Some(candidate) => {
                tracing::info!(path = %candidate.path.display(), "Selected rendered video");
                Ok(candidate)
            }
            None => {
                for directory in self.locator.search_directories(scene) {
                    if directory.is_dir() {
                        tracing::info!(directory = %directory.display(), "Searched directory");
                    }
                }
                Err(RenderError::NoOutputFound)
            }
        }
    }

    async fn promote(
        &self,
        candidate: &VideoCandidate,
        scene: &SceneId,
    ) -> Result<PathBuf, RenderError> {
        let final_path = scene.canonical_video_path(&self.options.output_dir);

        let copied = if candidate.path == final_path {
            Ok(())
        } else {
            tokio::fs::copy(&candidate.path, &final_path)
                .await
                .map(|_| ())
        };

        match copied {
            Ok(()) => {
                let size = file_size(&final_path).await;
                if size == 0 {
                    return Err(RenderError::EmptyOutput(final_path));
                }
                tracing::debug!(bytes = size, "Promoted video to canonical path");
                Ok(final_path)
            }
            Err(e) => {
                tracing::error!(error = %e, from = %candidate.path.display(), "Failed to copy video");
                if file_size(&candidate.path).await > 0 {
                    tracing::info!("Using original video location");
                    Ok(candidate.path.clone())
                } else {
                    Err(RenderError::CopyFailed(e.to_string()))
                }
            }
        }
    }
}

/// Tries each spelling's `--version`; the first that exits cleanly wins.
pub async fn probe_renderer(
    runner: &dyn CommandRunner,
    candidates: &[RendererCommand],
    timeout: Duration,
) -> RendererStatus {
    for command in candidates {
        let spec = command.version_probe();
        tracing::info!(command = %spec, "Probing renderer");

        match runner.run(&spec, timeout).await {
            Ok(output) if output.success() => {
                let version = output.stdout.trim().to_string();
                tracing::info!(command = %command, version = %version, "Renderer found");
                return RendererStatus::Available {
                    command: command.clone(),
                    version,
                };
            }
            Ok(output) => {
                tracing::warn!(command = %command, exit_code = ?output.exit_code, stderr = %output.stderr, "Renderer probe failed");
            }
            Err(e) => {
                tracing::warn!(command = %command, error = %e, "Renderer probe could not run");
            }
        }
    }

    tracing::error!("Renderer not found in any configured location");
    RendererStatus::Unavailable
}

/// A fresh scene id, distinct from `previous`. Ids have one-second
/// resolution, so this may sleep until the clock ticks over.
async fn next_scene_id(previous: Option<&SceneId>) -> SceneId {
    loop {
        let now = chrono::Local::now();
        let scene = SceneId::from_timestamp(&now);
        if previous != Some(&scene) {
            return scene;
        }
        let elapsed_ms = u64::from(now.nanosecond() / 1_000_000).min(999);
        tokio::time::sleep(Duration::from_millis(1000 - elapsed_ms)).await;
    }
}

fn absolute_output_dir(output_dir: &Path) -> PathBuf {
    match std::path::absolute(output_dir) {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!(error = %e, path = %output_dir.display(), "Could not resolve output directory");
            output_dir.to_path_buf()
        }
    }
}

async fn file_size(path: &Path) -> u64 {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.len())
        .unwrap_or(0)
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Manim is not installed or not available in PATH")]
    RendererUnavailable,
    #[error("Failed to generate Manim code: {0}")]
    CodeGeneration(CodeGenerationError),
    #[error("Failed to write temporary file: {0}")]
    WriteSource(String),
    #[error("Manim execution failed after {attempts} attempts. Last error: {last_error}")]
    AllAttemptsFailed { attempts: usize, last_error: String },
    #[error("Output search failed: {0}")]
    Search(String),
    #[error("No suitable video file found after generation")]
    NoOutputFound,
    #[error("Final video file is empty or missing: {}", .0.display())]
    EmptyOutput(PathBuf),
    #[error("Failed to copy video and original is invalid: {0}")]
    CopyFailed(String),
}
