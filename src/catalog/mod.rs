//! The catalog: an immutable, insertion-ordered registry of diagram types
//! and every read operation over it.
//!
//! A [`Catalog`] is built once from a list of [`DiagramType`] values and
//! never mutated afterwards. Queries return references or freshly built
//! collections; nothing hands out mutable access to the registry, so a
//! constructed catalog can be shared across threads without locking.
//! "Not found" is an [`Option::None`] or an empty `Vec`, never an error.
//! The only entropy consumed is the caller-supplied [`Rng`] of the two
//! random-sampling queries.

use indexmap::IndexMap;
use rand::{Rng, RngExt};
use thiserror::Error;

use crate::models::{Category, DiagramType, Example, ShareableState};

/// Construction-time defects. A catalog refuses to finish constructing
/// rather than let one same-keyed entry silently shadow another.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate diagram type id `{id}`")]
    DuplicateId { id: String },
}

/// Immutable keyed collection of all diagram types.
///
/// Entries are keyed by their own `id`, so the key/field-agreement
/// invariant holds by construction. Iteration order is insertion order
/// and is stable across calls.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: IndexMap<String, DiagramType>,
}

impl Catalog {
    /// Builds a catalog from `diagrams`, preserving their order.
    ///
    /// Fails with [`CatalogError::DuplicateId`] if two entries share an id.
    pub fn new(diagrams: Vec<DiagramType>) -> Result<Self, CatalogError> {
        let mut entries = IndexMap::with_capacity(diagrams.len());
        for diagram in diagrams {
            let id = diagram.id.clone();
            if entries.insert(id.clone(), diagram).is_some() {
                return Err(CatalogError::DuplicateId { id });
            }
        }
        Ok(Self { entries })
    }

    /// Looks up a diagram type by id. Unknown ids are a normal outcome.
    pub fn get(&self, id: &str) -> Option<&DiagramType> {
        self.entries.get(id)
    }

    /// All diagram types in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &DiagramType> {
        self.entries.values()
    }

    /// All catalog keys, in the same order as [`Catalog::all`].
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Diagram types whose category equals `category`, in catalog order.
    pub fn by_category(&self, category: Category) -> Vec<&DiagramType> {
        self.all().filter(|d| d.category == category).collect()
    }

    /// Case-insensitive substring search over `name`, `description`, and
    /// `id`. An empty query matches everything. Matching is plain substring
    /// containment, not tokenized or fuzzy.
    pub fn search(&self, query: &str) -> Vec<&DiagramType> {
        let query = query.to_lowercase();
        self.all()
            .filter(|d| {
                d.name.to_lowercase().contains(&query)
                    || d.description.to_lowercase().contains(&query)
                    || d.id.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Sum of example counts across all diagram types.
    pub fn total_example_count(&self) -> usize {
        self.all().map(|d| d.examples.len()).sum()
    }

    /// Diagram types grouped by category, catalog order within each group.
    ///
    /// Every bucket is seeded up front, so a category with no members maps
    /// to an empty `Vec` rather than being absent. Consumers index the
    /// result by category unconditionally.
    pub fn grouped_by_category(&self) -> IndexMap<Category, Vec<&DiagramType>> {
        let mut grouped: IndexMap<Category, Vec<&DiagramType>> = Category::ALL
            .iter()
            .map(|&category| (category, Vec::new()))
            .collect();

        for diagram in self.all() {
            grouped[&diagram.category].push(diagram);
        }

        grouped
    }

    /// A uniformly random diagram type, or `None` if the catalog is empty.
    pub fn random_diagram<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&DiagramType> {
        if self.entries.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.entries.len());
        self.entries.get_index(index).map(|(_, diagram)| diagram)
    }

    /// A uniformly random example of the diagram type `id`, or `None` if
    /// the id is unknown or the type has no examples.
    pub fn random_example<R: Rng + ?Sized>(&self, id: &str, rng: &mut R) -> Option<&Example> {
        let diagram = self.get(id)?;
        if diagram.examples.is_empty() {
            return None;
        }
        let index = rng.random_range(0..diagram.examples.len());
        diagram.examples.get(index)
    }

    /// Resolves the ids referenced by an externally persisted
    /// [`ShareableState`] against the catalog.
    ///
    /// Returns `None` if the diagram type is unknown, or if an example id
    /// is present but not found on that type.
    pub fn resolve(&self, state: &ShareableState) -> Option<(&DiagramType, Option<&Example>)> {
        let diagram = self.get(&state.diagram_type)?;
        let example = match &state.example_id {
            Some(example_id) => {
                Some(diagram.examples.iter().find(|e| &e.id == example_id)?)
            }
            None => None,
        };
        Some((diagram, example))
    }
}
