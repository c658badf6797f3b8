use mathcast::domain::{Complexity, ConceptKind, ConceptRecord};

fn sample_json() -> &'static str {
    r#"{
        "title": "Pythagorean Theorem",
        "type": "theorem",
        "description": "Relates the sides of a right triangle",
        "complexity": "basic",
        "estimated_duration": 45,
        "key_concepts": ["right triangle", "hypotenuse"]
    }"#
}

#[test]
fn given_valid_json_when_deserializing_then_all_fields_are_populated() {
    let concept: ConceptRecord = serde_json::from_str(sample_json()).unwrap();

    assert_eq!(concept.title, "Pythagorean Theorem");
    assert_eq!(concept.kind, ConceptKind::Theorem);
    assert_eq!(concept.complexity, Complexity::Basic);
    assert_eq!(concept.estimated_duration.get(), 45);
    assert_eq!(concept.key_concepts.len(), 2);
}

#[test]
fn given_concept_when_serializing_then_kind_is_written_as_type() {
    let concept: ConceptRecord = serde_json::from_str(sample_json()).unwrap();
    let value = serde_json::to_value(&concept).unwrap();

    assert_eq!(value["type"], "theorem");
    assert!(value.get("kind").is_none());
}

#[test]
fn given_unknown_kind_when_deserializing_then_fails() {
    let json = sample_json().replace("\"theorem\"", "\"lemma\"");
    assert!(serde_json::from_str::<ConceptRecord>(&json).is_err());
}

#[test]
fn given_zero_duration_when_deserializing_then_fails() {
    let json = sample_json().replace("45", "0");
    assert!(serde_json::from_str::<ConceptRecord>(&json).is_err());
}

#[test]
fn given_key_concepts_when_joining_then_uses_comma_separator() {
    let concept: ConceptRecord = serde_json::from_str(sample_json()).unwrap();
    assert_eq!(concept.key_concepts_joined(), "right triangle, hypotenuse");
}
