mod command_runner;
mod document_store;
mod llm_client;
mod session_store;
mod text_extractor;

pub use command_runner::{CommandError, CommandOutput, CommandRunner, CommandSpec};
pub use document_store::{DocumentStore, DocumentStoreError};
pub use llm_client::{CompletionRequest, LlmClient, LlmClientError};
pub use session_store::{SessionStore, SessionStoreError};
pub use text_extractor::{TextExtractor, TextExtractorError};
