use std::path::{Path, PathBuf};
use std::sync::Arc;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use mathcast::application::ports::{TextExtractor, TextExtractorError};
use mathcast::infrastructure::text_processing::{FallbackTextExtractor, LopdfAdapter, PdfAdapter};

/// Writes a one-page PDF showing `text` in Courier.
fn write_sample_pdf(dir: &Path, text: &str) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![100.into(), 600.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join("sample.pdf");
    doc.save(&path).unwrap();
    path
}

fn write_garbage(dir: &Path) -> PathBuf {
    let path = dir.join("corrupt.pdf");
    std::fs::write(&path, b"not a pdf at all").unwrap();
    path
}

#[tokio::test]
async fn given_valid_pdf_when_extracting_with_lopdf_then_returns_page_text() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_sample_pdf(dir.path(), "Euler identity");

    let text = LopdfAdapter::new().extract_text(&path).await.unwrap();

    assert!(text.contains("Euler identity"));
}

#[tokio::test]
async fn given_valid_pdf_when_extracting_through_fallback_chain_then_returns_text() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_sample_pdf(dir.path(), "Euler identity");
    let extractor =
        FallbackTextExtractor::new(Arc::new(PdfAdapter::new()), Arc::new(LopdfAdapter::new()));

    let text = extractor.extract_text(&path).await.unwrap();

    assert!(text.contains("Euler"));
}

#[tokio::test]
async fn given_corrupt_file_when_extracting_pdf_then_returns_extraction_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_garbage(dir.path());

    let primary = PdfAdapter::new().extract_text(&path).await;
    let secondary = LopdfAdapter::new().extract_text(&path).await;

    assert!(matches!(primary, Err(TextExtractorError::ExtractionFailed(_))));
    assert!(matches!(secondary, Err(TextExtractorError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_corrupt_file_when_both_extractors_fail_then_reports_no_text() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_garbage(dir.path());
    let extractor =
        FallbackTextExtractor::new(Arc::new(PdfAdapter::new()), Arc::new(LopdfAdapter::new()));

    let result = extractor.extract_text(&path).await;

    assert!(matches!(result, Err(TextExtractorError::NoTextFound(_))));
}
