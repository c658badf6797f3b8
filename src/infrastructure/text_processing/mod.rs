mod fallback_text_extractor;
mod lopdf_adapter;
mod mock_text_extractor;
mod pdf_adapter;
mod text_sanitizer;

pub use fallback_text_extractor::FallbackTextExtractor;
pub use lopdf_adapter::LopdfAdapter;
pub use mock_text_extractor::MockTextExtractor;
pub use pdf_adapter::PdfAdapter;
pub use text_sanitizer::{join_pages, sanitize_extracted_text};
