use std::fmt;
use std::path::Path;

use crate::application::ports::CommandSpec;
use crate::domain::SceneId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderQuality {
    High,
    Medium,
    Low,
}

impl RenderQuality {
    pub fn flag(&self) -> &'static str {
        match self {
            RenderQuality::High => "-qh",
            RenderQuality::Medium => "-qm",
            RenderQuality::Low => "-ql",
        }
    }
}

impl fmt::Display for RenderQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RenderQuality::High => "high",
            RenderQuality::Medium => "medium",
            RenderQuality::Low => "low",
        };
        f.write_str(label)
    }
}

/// A renderer invocation prefix such as `python -m manim`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererCommand {
    program: String,
    prefix_args: Vec<String>,
}

impl RendererCommand {
    /// `None` when `parts` is empty.
    pub fn from_parts(parts: &[String]) -> Option<Self> {
        let (program, prefix_args) = parts.split_first()?;
        Some(Self {
            program: program.clone(),
            prefix_args: prefix_args.to_vec(),
        })
    }

    pub fn version_probe(&self) -> CommandSpec {
        CommandSpec::new(&self.program)
            .args(self.prefix_args.iter().cloned())
            .arg("--version")
    }

    pub fn render(
        &self,
        quality: RenderQuality,
        media_dir: &Path,
        source_file: &Path,
        scene: &SceneId,
    ) -> CommandSpec {
        CommandSpec::new(&self.program)
            .args(self.prefix_args.iter().cloned())
            .arg(quality.flag())
            .arg("--media_dir")
            .arg(media_dir.to_string_lossy())
            .arg(source_file.to_string_lossy())
            .arg(scene.as_str())
            .current_dir(media_dir)
    }
}

impl fmt::Display for RendererCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.prefix_args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderAttempt {
    pub command: RendererCommand,
    pub quality: RenderQuality,
}

/// Ordered attempts: the probed command at high, medium and low quality, then
/// every other configured spelling at high quality.
#[derive(Debug, Clone)]
pub struct RenderPlan {
    attempts: Vec<RenderAttempt>,
}

impl RenderPlan {
    pub fn new(resolved: &RendererCommand, candidates: &[RendererCommand]) -> Self {
        let mut attempts: Vec<RenderAttempt> =
            [RenderQuality::High, RenderQuality::Medium, RenderQuality::Low]
                .into_iter()
                .map(|quality| RenderAttempt {
                    command: resolved.clone(),
                    quality,
                })
                .collect();

        attempts.extend(
            candidates
                .iter()
                .filter(|candidate| *candidate != resolved)
                .map(|candidate| RenderAttempt {
                    command: candidate.clone(),
                    quality: RenderQuality::High,
                }),
        );

        Self { attempts }
    }

    pub fn attempts(&self) -> &[RenderAttempt] {
        &self.attempts
    }
}
