use std::io;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{CommandError, CommandOutput, CommandRunner, CommandSpec};

/// Runs commands with `tokio::process`. A timed-out child is killed when its
/// future is dropped.
#[derive(Default)]
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(
        &self,
        spec: &CommandSpec,
        timeout: Duration,
    ) -> Result<CommandOutput, CommandError> {
        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &spec.working_dir {
            command.current_dir(dir);
        }

        let output = tokio::time::timeout(timeout, command.output())
            .await
            .map_err(|_| CommandError::TimedOut(timeout))?
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => CommandError::NotFound(spec.program.clone()),
                _ => CommandError::Io(e.to_string()),
            })?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
