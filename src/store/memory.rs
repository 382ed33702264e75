//! In-memory social graph.

use std::collections::HashMap;

use crate::types::{Person, PersonId, RelationKind};
use super::SocialStore;

/// Error type for graph construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A person cannot relate to themselves.
    #[error("Invalid {relation} relation: {name} cannot relate to themselves")]
    InvalidRelation {
        /// Name of the offending person.
        name: String,
        /// Relation that was being added.
        relation: RelationKind,
    },
    /// Raw add of a name that already exists.
    #[error("Duplicate person: {0}")]
    DuplicateNode(String),
    /// Conspiracy pair references someone absent from the friendships.
    #[error("{name} not found in friendships file")]
    MissingEndpoint {
        /// The missing name.
        name: String,
    },
    /// Id does not belong to this graph.
    #[error("Unknown person id: {0}")]
    UnknownPerson(PersonId),
}

/// Insertion-ordered social graph held entirely in memory.
///
/// People are stored in a `Vec` indexed by `PersonId`; a name index gives
/// O(1) lookup and upsert. Relation sets are `BTreeSet`s so every
/// traversal sees neighbours in a stable order.
#[derive(Debug, Clone, Default)]
pub struct InMemorySocialGraph {
    /// People by id.
    people: Vec<Person>,
    /// Name -> id.
    index: HashMap<String, PersonId>,
}

impl InMemorySocialGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from friendship pairs, then conspiracy pairs.
    pub fn from_pairs<F, C, S, T>(friendships: F, conspiracies: C) -> Result<Self, GraphError>
    where
        F: IntoIterator<Item = (S, S)>,
        C: IntoIterator<Item = (T, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut graph = Self::new();
        graph.ingest_friendships(friendships)?;
        graph.ingest_conspiracies(conspiracies)?;
        Ok(graph)
    }

    /// Add a person, failing if the name is already taken.
    pub fn add_node(&mut self, name: impl Into<String>) -> Result<PersonId, GraphError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(GraphError::DuplicateNode(name));
        }
        let id = PersonId::new(self.people.len() as u32);
        self.index.insert(name.clone(), id);
        self.people.push(Person::new(name));
        Ok(id)
    }

    /// Return the existing id for `name`, or append a new person.
    pub fn upsert_node(&mut self, name: &str) -> PersonId {
        if let Some(id) = self.index.get(name) {
            return *id;
        }
        let id = PersonId::new(self.people.len() as u32);
        self.index.insert(name.to_string(), id);
        self.people.push(Person::new(name));
        id
    }

    /// Add a symmetric friendship. Re-adding an existing friendship is a no-op.
    pub fn add_friend(&mut self, a: PersonId, b: PersonId) -> Result<(), GraphError> {
        self.check_relation(a, b, RelationKind::Friendship)?;
        self.people[a.index()].friends.insert(b);
        self.people[b.index()].friends.insert(a);
        Ok(())
    }

    /// Add a directed conspiracy `a -> b`. Never mirrored onto `b`.
    pub fn add_conspiracy(&mut self, a: PersonId, b: PersonId) -> Result<(), GraphError> {
        self.check_relation(a, b, RelationKind::Conspiracy)?;
        self.people[a.index()].plots_against.insert(b);
        Ok(())
    }

    fn check_relation(&self, a: PersonId, b: PersonId, relation: RelationKind) -> Result<(), GraphError> {
        let person = self.person(a).ok_or(GraphError::UnknownPerson(a))?;
        if self.person(b).is_none() {
            return Err(GraphError::UnknownPerson(b));
        }
        if a == b {
            return Err(GraphError::InvalidRelation {
                name: person.name.clone(),
                relation,
            });
        }
        Ok(())
    }

    /// Ingest friendship pairs, creating people on first sight.
    pub fn ingest_friendships<I, S>(&mut self, pairs: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut count = 0usize;
        for (left, right) in pairs {
            let a = self.upsert_node(left.as_ref());
            let b = self.upsert_node(right.as_ref());
            self.add_friend(a, b)?;
            count += 1;
        }
        tracing::debug!(pairs = count, people = self.people.len(), "friendships ingested");
        Ok(())
    }

    /// Ingest conspiracy pairs between people already present.
    ///
    /// Fails on the first pair naming someone unknown; conspiracy input never
    /// creates people.
    pub fn ingest_conspiracies<I, S>(&mut self, pairs: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut count = 0usize;
        for (left, right) in pairs {
            let (left, right) = (left.as_ref(), right.as_ref());
            let a = self.find_node(left).ok_or_else(|| GraphError::MissingEndpoint {
                name: left.to_string(),
            })?;
            let b = self.find_node(right).ok_or_else(|| GraphError::MissingEndpoint {
                name: right.to_string(),
            })?;
            self.add_conspiracy(a, b)?;
            count += 1;
        }
        tracing::debug!(pairs = count, "conspiracies ingested");
        Ok(())
    }

    /// Get a person by id.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id.index())
    }

    /// All people in insertion order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// All names sorted lexicographically.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.people.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of distinct friendships (each counted once).
    pub fn num_friendships(&self) -> usize {
        self.people.iter().map(|p| p.friends.len()).sum::<usize>() / 2
    }

    /// Number of distinct conspiracy edges.
    pub fn num_conspiracies(&self) -> usize {
        self.people.iter().map(|p| p.plots_against.len()).sum()
    }
}

impl SocialStore for InMemorySocialGraph {
    fn person_count(&self) -> usize {
        self.people.len()
    }

    fn person_ids(&self) -> Vec<PersonId> {
        (0..self.people.len() as u32).map(PersonId::new).collect()
    }

    fn find_node(&self, name: &str) -> Option<PersonId> {
        self.index.get(name).copied()
    }

    fn name_of(&self, id: PersonId) -> Option<&str> {
        self.person(id).map(|p| p.name.as_str())
    }

    fn friends_of(&self, id: PersonId) -> Vec<PersonId> {
        self.person(id)
            .map(|p| p.friends.iter().copied().collect())
            .unwrap_or_default()
    }

    fn plot_targets_of(&self, id: PersonId) -> Vec<PersonId> {
        self.person(id)
            .map(|p| p.plots_against.iter().copied().collect())
            .unwrap_or_default()
    }

    fn plots_against(&self, plotter: PersonId, target: PersonId) -> bool {
        self.person(plotter).is_some_and(|p| p.plots_against(target))
    }
}
