use std::sync::Arc;

use mathcast::application::services::{QuestionAnswerer, build_context};
use mathcast::domain::ConceptRecord;
use mathcast::infrastructure::llm::MockLlmClient;

fn sample_concept() -> ConceptRecord {
    serde_json::from_str(
        r#"{"title": "Integration by Parts", "type": "theorem", "description": "Derives the product rule inverse.", "complexity": "advanced", "estimated_duration": 90, "key_concepts": ["product rule", "antiderivative"]}"#,
    )
    .unwrap()
}

#[test]
fn given_concept_and_document_when_building_context_then_includes_both() {
    let context = build_context(&sample_concept(), "Chapter 7: Techniques of Integration");

    assert!(context.contains("Video concept: Integration by Parts"));
    assert!(context.contains("Type: theorem"));
    assert!(context.contains("Key concepts: product rule, antiderivative"));
    assert!(context.contains("Original PDF content: Chapter 7"));
}

#[test]
fn given_long_document_when_building_context_then_truncates_excerpt() {
    let document = format!("{}DOC_TAIL", "y".repeat(1000));

    let context = build_context(&sample_concept(), &document);

    assert!(!context.contains("DOC_TAIL"));
}

#[tokio::test]
async fn given_question_when_answering_then_sends_context_and_question() {
    let llm = Arc::new(MockLlmClient::scripted(["Because u dv = uv - v du."]));
    let answerer = QuestionAnswerer::new(Arc::clone(&llm));

    let answer = answerer
        .answer("Why does it work?", &sample_concept(), "notes")
        .await
        .unwrap();

    assert_eq!(answer, "Because u dv = uv - v du.");
    let request = &llm.requests()[0];
    assert!(request.user.starts_with("Context: Video concept: Integration by Parts"));
    assert!(request.user.ends_with("Question: Why does it work?"));
}

#[tokio::test]
async fn given_llm_failure_when_answering_then_returns_error() {
    let llm = Arc::new(MockLlmClient::failing("timeout"));
    let answerer = QuestionAnswerer::new(llm);

    assert!(
        answerer
            .answer("Why?", &sample_concept(), "")
            .await
            .is_err()
    );
}
