use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{CommandError, CommandOutput, CommandRunner, CommandSpec};

type RenderHook = Box<dyn Fn(&CommandSpec) -> bool + Send + Sync>;

/// Stand-in renderer. Answers `--version` probes according to `available`
/// and delegates every other invocation to a hook that may write files and
/// decides the exit status.
pub struct MockCommandRunner {
    available: bool,
    version: String,
    on_render: RenderHook,
    invocations: Mutex<Vec<CommandSpec>>,
}

impl MockCommandRunner {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            version: String::new(),
            on_render: Box::new(|_| false),
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn available(version: impl Into<String>) -> Self {
        Self {
            available: true,
            version: version.into(),
            on_render: Box::new(|_| true),
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn on_render<F>(mut self, hook: F) -> Self
    where
        F: Fn(&CommandSpec) -> bool + Send + Sync + 'static,
    {
        self.on_render = Box::new(hook);
        self
    }

    pub fn invocations(&self) -> Vec<CommandSpec> {
        self.invocations
            .lock()
            .map(|i| i.clone())
            .unwrap_or_default()
    }

    pub fn render_invocations(&self) -> Vec<CommandSpec> {
        self.invocations()
            .into_iter()
            .filter(|spec| !is_version_probe(spec))
            .collect()
    }
}

fn is_version_probe(spec: &CommandSpec) -> bool {
    spec.args.last().is_some_and(|a| a == "--version")
}

#[async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run(
        &self,
        spec: &CommandSpec,
        _timeout: Duration,
    ) -> Result<CommandOutput, CommandError> {
        if let Ok(mut invocations) = self.invocations.lock() {
            invocations.push(spec.clone());
        }

        if is_version_probe(spec) {
            return if self.available {
                Ok(CommandOutput {
                    exit_code: Some(0),
                    stdout: format!("{}\n", self.version),
                    stderr: String::new(),
                })
            } else {
                Err(CommandError::NotFound(spec.program.clone()))
            };
        }

        let succeeded = (self.on_render)(spec);
        Ok(CommandOutput {
            exit_code: Some(if succeeded { 0 } else { 1 }),
            stdout: String::new(),
            stderr: if succeeded {
                String::new()
            } else {
                "mock render failure".to_string()
            },
        })
    }
}
