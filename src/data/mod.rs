//! Built-in catalog content.
//!
//! One module per diagram type. New notations are added by writing a module
//! here and listing its constructor in [`builtin`].

mod flowchart;

pub use flowchart::flowchart;

use crate::catalog::Catalog;

/// The catalog shipped with this crate.
///
/// # Panics
///
/// Panics if the built-in literals violate a registry invariant (duplicate
/// id). That is a defect in this module, not a runtime condition.
pub fn builtin() -> Catalog {
    Catalog::new(vec![flowchart()]).expect("built-in catalog data violates registry invariants")
}
