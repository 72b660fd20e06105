use serde::{Deserialize, Serialize};

/// One runnable code sample belonging to a diagram type.
///
/// The `code` field is opaque to this crate: it is handed to an external
/// rendering engine by the consumer and never parsed or validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    /// Unique within the parent diagram type's example list.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Literal diagram-notation source text.
    pub code: String,
    pub level: Option<Level>,
    /// Free-text labels for searchability and filtering.
    pub tags: Option<Vec<String>>,
}

/// Difficulty level of an example.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}
