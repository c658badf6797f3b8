use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use mathcast::application::ports::CommandRunner;
use mathcast::application::services::{
    CodeGenerator, RenderOptions, RenderOrchestrator, RendererCommand,
};
use mathcast::domain::ConceptRecord;
use mathcast::infrastructure::llm::MockLlmClient;
use mathcast::infrastructure::process::TokioCommandRunner;

/// Stand-in for the renderer CLI. Positional args after `sh -c <script> <name>`:
/// `$1` quality, `$2` `--media_dir`, `$3` media dir, `$4` source, `$5` scene.
const FAKE_RENDERER: &str = r#"
if [ "$1" = "--version" ]; then echo "Fake Renderer 1.0"; exit 0; fi
test -f "$4" || { echo "no such file: $4 (cwd $(pwd))" >&2; exit 2; }
mkdir -p "$3/videos/1080p60" && printf 'mp4 bytes' > "$3/videos/1080p60/$5.mp4"
"#;

const GENERATED_CODE: &str = "```python\nclass Demo(Scene):\n    def construct(self):\n        self.wait()\n```";

/// Relative directory under the package root, removed on drop.
struct RelativeOutputDir(PathBuf);

impl RelativeOutputDir {
    fn create() -> Self {
        let path = PathBuf::from("target").join(format!("render-test-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&path).unwrap();
        Self(path)
    }
}

impl Drop for RelativeOutputDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

fn fake_renderer() -> RendererCommand {
    let parts: Vec<String> = ["sh", "-c", FAKE_RENDERER, "fake-renderer"]
        .into_iter()
        .map(String::from)
        .collect();
    RendererCommand::from_parts(&parts).unwrap()
}

fn sample_concept() -> ConceptRecord {
    serde_json::from_str(
        r#"{"title": "Sine Wave", "type": "visualization", "description": "Plots sin(x).", "complexity": "basic", "estimated_duration": 30, "key_concepts": ["periodicity"]}"#,
    )
    .unwrap()
}

#[tokio::test]
async fn given_relative_output_dir_when_rendering_with_real_process_then_video_is_promoted() {
    let output_dir = RelativeOutputDir::create();
    assert!(output_dir.0.is_relative());

    let llm = Arc::new(MockLlmClient::scripted([GENERATED_CODE]));
    let runner: Arc<dyn CommandRunner> = Arc::new(TokioCommandRunner::new());
    let orchestrator = RenderOrchestrator::initialize(
        CodeGenerator::new(llm),
        runner,
        RenderOptions {
            output_dir: output_dir.0.clone(),
            candidates: vec![fake_renderer()],
            probe_timeout: Duration::from_secs(5),
            render_timeout: Duration::from_secs(30),
            recent_window: Duration::from_secs(300),
        },
    )
    .await;
    assert!(orchestrator.status().is_available());
    assert!(orchestrator.output_dir().is_absolute());

    let video = orchestrator
        .create_video(&sample_concept(), "")
        .await
        .unwrap();

    assert!(video.path.is_absolute());
    assert_eq!(
        video.path,
        video.scene_id.canonical_video_path(orchestrator.output_dir())
    );
    assert_eq!(std::fs::read(&video.path).unwrap(), b"mp4 bytes");
}
