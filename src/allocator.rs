//! Disjoint chain allocation across the queen's direct plotters.
//!
//! Greedy, single pass in alphabetical plotter order: a plotter keeps its
//! candidate chain unless one of the chain's intermediates was already
//! committed to an earlier plotter. Targets are exempt from the check since
//! several chains may converge on the same enemy. The order is fixed, not
//! optimized for coverage: an earlier name always wins a contested person.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::types::ConspiracyChain;

/// Outcome of allocating chains to plotters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Plotter name -> committed chain.
    pub assigned: BTreeMap<String, ConspiracyChain>,
    /// Plotters left without a chain.
    pub unassignable: BTreeSet<String>,
}

impl Allocation {
    /// Whether every plotter received a chain.
    pub fn is_fully_resolved(&self) -> bool {
        self.unassignable.is_empty()
    }

    /// Chain committed to `plotter`, if any.
    pub fn chain_for(&self, plotter: &str) -> Option<&ConspiracyChain> {
        self.assigned.get(plotter)
    }

    /// Total number of plotters considered.
    pub fn num_plotters(&self) -> usize {
        self.assigned.len() + self.unassignable.len()
    }
}

/// Assign each plotter its candidate chain while keeping intermediates
/// disjoint.
///
/// `plotters` may arrive in any order and may repeat; they are sorted and
/// de-duplicated first. Plotters missing from `candidates` are
/// unassignable.
pub fn allocate<P: AsRef<str>>(
    plotters: &[P],
    candidates: &BTreeMap<String, ConspiracyChain>,
) -> Allocation {
    let ordered: BTreeSet<&str> = plotters.iter().map(AsRef::as_ref).collect();

    let mut allocation = Allocation::default();
    let mut used: BTreeSet<String> = BTreeSet::new();

    for plotter in ordered {
        let Some(chain) = candidates.get(plotter) else {
            tracing::debug!(plotter, "no candidate chain");
            allocation.unassignable.insert(plotter.to_string());
            continue;
        };

        let intermediates = chain.intermediates();
        if let Some(conflict) = intermediates.iter().find(|name| used.contains(**name)) {
            tracing::debug!(plotter, conflict, "candidate chain conflicts with a committed one");
            allocation.unassignable.insert(plotter.to_string());
            continue;
        }

        used.extend(intermediates.into_iter().map(str::to_string));
        allocation.assigned.insert(plotter.to_string(), chain.clone());
    }

    allocation
}
