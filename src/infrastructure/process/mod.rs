mod mock_command_runner;
mod tokio_command_runner;

pub use mock_command_runner::MockCommandRunner;
pub use tokio_command_runner::TokioCommandRunner;
