use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use mathcast::application::ports::{TextExtractor, TextExtractorError};
use mathcast::infrastructure::text_processing::FallbackTextExtractor;

struct FixedExtractor {
    result: Result<&'static str, &'static str>,
    calls: AtomicUsize,
}

impl FixedExtractor {
    fn ok(text: &'static str) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(text),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(message),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait::async_trait]
impl TextExtractor for FixedExtractor {
    async fn extract_text(&self, _path: &Path) -> Result<String, TextExtractorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .map(String::from)
            .map_err(|e| TextExtractorError::ExtractionFailed(e.to_string()))
    }
}

#[tokio::test]
async fn given_primary_succeeds_when_extracting_then_secondary_is_not_used() {
    let primary = FixedExtractor::ok("primary text");
    let secondary = FixedExtractor::ok("secondary text");
    let extractor = FallbackTextExtractor::new(primary.clone(), secondary.clone());

    let text = extractor.extract_text(Path::new("doc.pdf")).await.unwrap();

    assert_eq!(text, "primary text");
    assert_eq!(secondary.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_primary_fails_when_extracting_then_uses_secondary() {
    let extractor = FallbackTextExtractor::new(
        FixedExtractor::failing("broken xref"),
        FixedExtractor::ok("secondary text"),
    );

    let text = extractor.extract_text(Path::new("doc.pdf")).await.unwrap();

    assert_eq!(text, "secondary text");
}

#[tokio::test]
async fn given_both_fail_when_extracting_then_reports_no_text() {
    let extractor = FallbackTextExtractor::new(
        FixedExtractor::failing("broken xref"),
        FixedExtractor::failing("encrypted"),
    );

    let result = extractor.extract_text(Path::new("doc.pdf")).await;

    assert!(matches!(result, Err(TextExtractorError::NoTextFound(_))));
}
