//! Person types for the social graph.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Dense identifier for a person inside one graph.
///
/// Ids are assigned in insertion order, so sorting by `PersonId` reproduces
/// the order in which people first appeared in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(u32);

impl PersonId {
    /// Create a new PersonId from an insertion index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Position of this person in the graph's insertion order.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named individual and their outgoing relations.
///
/// The name is the identity key: it is compared exactly, including case and
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique name.
    pub name: String,
    /// Friends (symmetric relation, maintained by the graph).
    pub friends: BTreeSet<PersonId>,
    /// People this person plots against (directed relation).
    pub plots_against: BTreeSet<PersonId>,
}

impl Person {
    /// Create a person with no relations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            friends: BTreeSet::new(),
            plots_against: BTreeSet::new(),
        }
    }

    /// Whether this person plots directly against `target`.
    pub fn plots_against(&self, target: PersonId) -> bool {
        self.plots_against.contains(&target)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
