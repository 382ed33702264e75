//! Social graph storage.

pub mod memory;

use crate::types::PersonId;

/// Read-only view of a social graph used by the query engines.
///
/// Implementations must guarantee deterministic ordering of results:
/// `person_ids` follows insertion order, relation lookups are ordered by
/// `PersonId`.
pub trait SocialStore {
    /// Number of people in the graph.
    fn person_count(&self) -> usize;

    /// All person ids in insertion order.
    fn person_ids(&self) -> Vec<PersonId>;

    /// Exact-name lookup. Never errors; unknown names yield `None`.
    fn find_node(&self, name: &str) -> Option<PersonId>;

    /// Name of a person.
    fn name_of(&self, id: PersonId) -> Option<&str>;

    /// Friends of a person (ordered by PersonId).
    fn friends_of(&self, id: PersonId) -> Vec<PersonId>;

    /// People this person plots against (ordered by PersonId).
    fn plot_targets_of(&self, id: PersonId) -> Vec<PersonId>;

    /// Whether `plotter` plots directly against `target`.
    fn plots_against(&self, plotter: PersonId, target: PersonId) -> bool {
        self.plot_targets_of(plotter).contains(&target)
    }
}

pub use memory::{InMemorySocialGraph, GraphError};
