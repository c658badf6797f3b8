mod init_tracing;
mod prompt_sanitizer;
mod request_id;

pub use init_tracing::init_tracing;
pub use prompt_sanitizer::sanitize_prompt;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
