//! Domain models for the diagram catalog.
//!
//! # Core Concepts
//!
//! ## Catalog Entities
//!
//! - [`DiagramType`]: One supported notation, with its ordered examples and
//!   syntax-reference table. Keyed by `id` in the [`Catalog`](crate::catalog::Catalog).
//! - [`Example`]: One runnable code sample, tagged with a difficulty [`Level`].
//! - [`SyntaxEntry`]: One row of a syntax-reference table.
//!
//! ## Static Enumerations
//!
//! Closed enums with total metadata tables; an out-of-enumeration value is
//! unrepresentable:
//!
//! - [`Category`]: The four fixed groupings, each with [`CategoryInfo`].
//! - [`LearningMode`]: Display presets, each with [`LearningModeInfo`].
//!
//! ## UI Data Contracts
//!
//! - [`ShareableState`] / [`UserPreferences`]: Structures the UI layer
//!   encodes externally. The catalog only validates the ids they carry.

mod category;
mod diagram;
mod example;
mod learning_mode;
mod prefs;
mod syntax;

pub use category::*;
pub use diagram::*;
pub use example::*;
pub use learning_mode::*;
pub use prefs::*;
pub use syntax::*;
