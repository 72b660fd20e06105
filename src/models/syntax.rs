use serde::{Deserialize, Serialize};

/// One row of a diagram type's syntax-reference table.
///
/// Rows follow a canonical reference ordering, so the containing `Vec`
/// order is meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxEntry {
    /// The syntax pattern or element name (e.g. `A[Text]`).
    pub syntax: String,
    pub description: String,
    /// Minimal code snippet demonstrating the pattern.
    pub example: String,
    pub notes: Option<String>,
}
