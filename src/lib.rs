//! diagramdex: an educational catalog of diagram notations.
//!
//! Each supported notation is a [`models::DiagramType`] carrying curated,
//! runnable examples and a syntax-reference table. The [`catalog::Catalog`]
//! is a construct-once, read-only registry with lookup, filtering, search,
//! grouping, and random-sampling queries. [`data::builtin`] returns the
//! catalog shipped with this crate.
//!
//! The crate neither parses nor renders diagram code; example `code` fields
//! are opaque text handed to an external rendering engine by consumers.

pub mod catalog;
pub mod data;
pub mod models;
