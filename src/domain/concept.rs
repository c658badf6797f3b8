use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// One mathematical idea worth animating, as proposed by the language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRecord {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ConceptKind,
    pub description: String,
    pub complexity: Complexity,
    /// Target video length in seconds.
    pub estimated_duration: NonZeroU32,
    pub key_concepts: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConceptKind {
    Definition,
    Theorem,
    Example,
    Construction,
    Visualization,
    Algorithm,
}

impl ConceptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConceptKind::Definition => "definition",
            ConceptKind::Theorem => "theorem",
            ConceptKind::Example => "example",
            ConceptKind::Construction => "construction",
            ConceptKind::Visualization => "visualization",
            ConceptKind::Algorithm => "algorithm",
        }
    }
}

impl fmt::Display for ConceptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Basic => "basic",
            Complexity::Intermediate => "intermediate",
            Complexity::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConceptRecord {
    pub fn key_concepts_joined(&self) -> String {
        self.key_concepts.join(", ")
    }
}
