pub mod llm;
pub mod observability;
pub mod process;
pub mod session;
pub mod storage;
pub mod text_processing;
