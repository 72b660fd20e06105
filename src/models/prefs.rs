use serde::{Deserialize, Serialize};

use super::learning_mode::LearningMode;

/// State a consumer can encode externally (e.g. in a share URL).
///
/// The catalog does not persist this; it only validates the ids it
/// references, via [`Catalog::resolve`](crate::catalog::Catalog::resolve).
/// Field names follow the camelCase wire format the UI layer encodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareableState {
    /// Diagram type id.
    pub diagram_type: String,
    #[serde(default)]
    pub example_id: Option<String>,
    /// Custom code, for shared user-modified examples.
    #[serde(default)]
    pub custom_code: Option<String>,
    #[serde(default)]
    pub mode: Option<LearningMode>,
}

/// User settings a consumer persists locally (e.g. in local storage).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub learning_mode: Option<LearningMode>,
    #[serde(default)]
    pub dark_mode: Option<bool>,
    /// Id of the last visited diagram type.
    #[serde(default)]
    pub last_diagram_type: Option<String>,
    /// Bookmarked example ids.
    #[serde(default)]
    pub bookmarks: Option<Vec<String>>,
    #[serde(default)]
    pub completed_examples: Option<Vec<String>>,
}
