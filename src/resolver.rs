//! End-to-end plot resolution.
//!
//! The resolver finds the queen, measures friendship distances from her,
//! searches one chain per direct plotter and allocates them disjointly.
//!
//! ## Algorithm
//!
//! 1. Look up the queen; if she is absent the outcome is `NoQueen`
//! 2. Compute friendship distances from the queen
//! 3. Collect everyone who plots directly against her, sorted by name
//! 4. For each plotter, search the best conspiracy chain
//! 5. Allocate chains so no intermediate is shared

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::allocator::{allocate, Allocation};
use crate::bfs::{all_distances, distances_by_name};
use crate::canonical::canonical_hash_hex;
use crate::chain::ChainFinder;
use crate::policy::PlotPolicy;
use crate::store::SocialStore;
use crate::types::{ConspiracyChain, PersonId};

/// Overall verdict of a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every direct plotter received a chain.
    Resolved,
    /// At least one direct plotter has no chain.
    Contested,
    /// The queen is not in the graph; nothing can be resolved.
    NoQueen,
}

impl Outcome {
    /// Whether the queen is safe.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolved => write!(f, "resolved"),
            Self::Contested => write!(f, "contested"),
            Self::NoQueen => write!(f, "no_queen"),
        }
    }
}

/// Result of resolving the plots against one queen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Policy version used.
    pub policy_id: String,
    /// Hash of the policy parameters used.
    pub params_hash: String,
    /// Queen name as configured.
    pub queen: String,
    /// Overall verdict.
    pub outcome: Outcome,
    /// Friendship distance from the queen, by name. Empty for `NoQueen`.
    pub distances_from_queen: BTreeMap<String, u32>,
    /// Direct plotters against the queen, sorted by name.
    pub direct_plotters: Vec<String>,
    /// Committed chains and unassignable plotters.
    pub allocation: Allocation,
}

impl Resolution {
    /// Whether every direct plotter received a chain.
    pub fn is_resolved(&self) -> bool {
        self.outcome.is_resolved()
    }

    /// Committed chains ordered by length, then by name sequence.
    pub fn chains_in_report_order(&self) -> Vec<&ConspiracyChain> {
        let mut chains: Vec<_> = self.allocation.assigned.values().collect();
        chains.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.names().cmp(b.names())));
        chains
    }

    /// Deterministic fingerprint of the whole resolution.
    pub fn fingerprint(&self) -> String {
        canonical_hash_hex(self)
    }
}

/// Resolves plots against the policy's queen over a social graph.
pub struct PlotResolver<'a, S: SocialStore + ?Sized> {
    store: &'a S,
    policy: PlotPolicy,
}

impl<'a, S: SocialStore + ?Sized> PlotResolver<'a, S> {
    /// Create a new resolver.
    pub fn new(store: &'a S, policy: PlotPolicy) -> Self {
        Self { store, policy }
    }

    /// People plotting directly against `queen`, sorted by name.
    pub fn direct_plotters(&self, queen: PersonId) -> Vec<PersonId> {
        let mut plotters: Vec<PersonId> = self
            .store
            .person_ids()
            .into_iter()
            .filter(|id| self.store.plots_against(*id, queen))
            .collect();
        plotters.sort_by_key(|id| self.store.name_of(*id));
        plotters
    }

    /// Run the full resolution.
    pub fn resolve(&self) -> Resolution {
        let mut resolution = Resolution {
            policy_id: self.policy.policy_id().to_string(),
            params_hash: self.policy.params_hash(),
            queen: self.policy.queen.clone(),
            outcome: Outcome::NoQueen,
            distances_from_queen: BTreeMap::new(),
            direct_plotters: Vec::new(),
            allocation: Allocation::default(),
        };

        let Some(queen) = self.store.find_node(&self.policy.queen) else {
            tracing::debug!(queen = %self.policy.queen, "queen not in graph");
            return resolution;
        };

        let distances = all_distances(self.store, queen);
        let finder = ChainFinder::new(
            self.store,
            queen,
            &distances,
            self.policy.max_ally_distance,
            self.policy.limits,
        );

        let mut candidates: BTreeMap<String, ConspiracyChain> = BTreeMap::new();
        let mut plotter_names = Vec::new();
        for plotter in self.direct_plotters(queen) {
            let Some(name) = self.store.name_of(plotter) else {
                continue;
            };
            if let Some(chain) = finder.find(plotter) {
                candidates.insert(name.to_string(), chain);
            }
            plotter_names.push(name.to_string());
        }

        let allocation = allocate(plotter_names.as_slice(), &candidates);
        resolution.outcome = if allocation.is_fully_resolved() {
            Outcome::Resolved
        } else {
            Outcome::Contested
        };

        tracing::debug!(
            queen = %self.policy.queen,
            allies = finder.allies().len(),
            bounded = self.policy.limits.is_bounded(),
            plotters = plotter_names.len(),
            assigned = allocation.assigned.len(),
            outcome = %resolution.outcome,
            "plot resolution finished"
        );

        resolution.distances_from_queen = distances_by_name(self.store, &distances);
        resolution.direct_plotters = plotter_names;
        resolution.allocation = allocation;
        resolution
    }
}
