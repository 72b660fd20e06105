use serde::{Deserialize, Serialize};

use super::category::Category;
use super::example::Example;
use super::learning_mode::LearningMode;
use super::syntax::SyntaxEntry;

/// One supported diagram notation, with its curated examples and syntax
/// reference.
///
/// This is the main entity of the catalog. The `examples` list is ordered
/// by difficulty progression and the `syntax` table follows a canonical
/// reference ordering, so both orders are preserved as authored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramType {
    /// Stable identifier, used as the catalog key (e.g. `flowchart`).
    pub id: String,
    /// Display name (e.g. `Flowchart`).
    pub name: String,
    pub category: Category,
    /// Short description of what this diagram type is used for.
    pub description: String,
    /// Long-form explanation with use cases.
    pub detailed_description: Option<String>,
    /// Icon or emoji representing this diagram type.
    pub icon: Option<String>,
    pub examples: Vec<Example>,
    pub syntax: Vec<SyntaxEntry>,
    /// Link to the notation's official documentation.
    pub docs_url: Option<String>,
    pub use_cases: Option<Vec<String>>,
    /// Best practices and tips.
    pub tips: Option<Vec<String>>,
    pub status: DiagramStatus,
}

impl DiagramType {
    /// The examples a consumer should display under `mode`: the leading
    /// slice of the difficulty progression, capped at the mode's example
    /// count, or all of them for [`LearningMode::All`].
    pub fn examples_for(&self, mode: LearningMode) -> &[Example] {
        match mode.info().example_count {
            Some(count) => &self.examples[..count.min(self.examples.len())],
            None => &self.examples,
        }
    }
}

/// Maturity of a diagram type's support.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagramStatus {
    Stable,
    Experimental,
    Beta,
}

impl DiagramStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Experimental => "experimental",
            Self::Beta => "beta",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "stable" => Some(Self::Stable),
            "experimental" => Some(Self::Experimental),
            "beta" => Some(Self::Beta),
            _ => None,
        }
    }
}
