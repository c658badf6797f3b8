use std::sync::Arc;

use mathcast::application::services::{CONTEXT_CHAR_BUDGET, CodeGenerator, build_prompt};
use mathcast::domain::ConceptRecord;
use mathcast::infrastructure::llm::MockLlmClient;

fn sample_concept() -> ConceptRecord {
    serde_json::from_str(
        r#"{"title": "Unit Circle", "type": "visualization", "description": "Traces sine and cosine.", "complexity": "basic", "estimated_duration": 30, "key_concepts": ["sine", "cosine"]}"#,
    )
    .unwrap()
}

#[test]
fn given_concept_when_building_prompt_then_includes_its_fields() {
    let prompt = build_prompt(&sample_concept(), "angles in radians");

    assert!(prompt.contains("Title: Unit Circle"));
    assert!(prompt.contains("Type: visualization"));
    assert!(prompt.contains("sine, cosine"));
    assert!(prompt.contains("angles in radians"));
}

#[test]
fn given_long_context_when_building_prompt_then_truncates_it() {
    let context = format!("{}CONTEXT_TAIL", "x".repeat(CONTEXT_CHAR_BUDGET));

    let prompt = build_prompt(&sample_concept(), &context);

    assert!(!prompt.contains("CONTEXT_TAIL"));
}

#[tokio::test]
async fn given_model_reply_when_generating_then_returns_it_verbatim() {
    let reply = "```python\nclass S(Scene):\n    pass\n```";
    let llm = Arc::new(MockLlmClient::scripted([reply]));
    let generator = CodeGenerator::new(Arc::clone(&llm));

    let code = generator.generate(&sample_concept(), "").await.unwrap();

    assert_eq!(code, reply);
    assert!((llm.requests()[0].temperature - 0.2).abs() < f32::EPSILON);
}

#[tokio::test]
async fn given_blank_reply_when_generating_then_fails() {
    let llm = Arc::new(MockLlmClient::scripted(["   "]));
    let generator = CodeGenerator::new(llm);

    assert!(generator.generate(&sample_concept(), "").await.is_err());
}
