//! Conspiracy chain search.
//!
//! For one enemy of the queen, enumerate every simple conspiracy path that
//! starts at one of her allies and ends at that enemy, then keep the best
//! one by [`ChainRank`].
//!
//! ## Algorithm
//!
//! 1. Allies are people whose friendship distance to the queen is known and
//!    at most `max_ally_distance`. The enemy never starts its own chain.
//! 2. From each ally, breadth-first over the conspiracy relation, carrying
//!    the whole path. A person never appears twice in one path. Reaching the
//!    enemy records a candidate and ends that branch; every other branch and
//!    every other ally is still explored.
//! 3. The candidate with the smallest `ChainRank` wins.

use std::collections::{HashSet, VecDeque};

use crate::bfs::DistanceMap;
use crate::policy::SearchLimits;
use crate::store::SocialStore;
use crate::types::{ConspiracyChain, PersonId};

/// Sort key for candidate chains. Smaller is better.
///
/// Fields are compared in declaration order; reordering them changes
/// which chain wins.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ChainRank<'a> {
    /// Number of people in the chain.
    pub len: usize,
    /// Whether the chain's start plots directly against the queen.
    /// `false` sorts first, so known enemies are avoided as starters.
    pub start_is_direct_plotter: bool,
    /// Start's friendship distance to the queen (`u32::MAX` when unknown).
    pub start_distance: u32,
    /// Start's name.
    pub start_name: &'a str,
    /// Every name in the chain, start to target.
    pub names: Vec<&'a str>,
}

/// A conspiracy path under construction.
///
/// Keeps the ordered sequence for output and a membership set so cycle
/// checks are O(1).
#[derive(Debug, Clone)]
struct PathBuilder {
    order: Vec<PersonId>,
    members: HashSet<PersonId>,
}

impl PathBuilder {
    fn start(id: PersonId) -> Self {
        Self {
            order: vec![id],
            members: HashSet::from([id]),
        }
    }

    fn contains(&self, id: PersonId) -> bool {
        self.members.contains(&id)
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn last(&self) -> PersonId {
        // A builder is never empty: it is created with its start.
        self.order[self.order.len() - 1]
    }

    fn extended(&self, id: PersonId) -> Self {
        let mut next = self.clone();
        next.order.push(id);
        next.members.insert(id);
        next
    }

    fn into_ids(self) -> Vec<PersonId> {
        self.order
    }
}

/// Chain finder bound to one queen and her distance map.
///
/// Build it once per resolution and call [`ChainFinder::find`] for each
/// enemy; the ally set is computed up front.
pub struct ChainFinder<'a, S: SocialStore + ?Sized> {
    store: &'a S,
    queen: PersonId,
    distances_from_queen: &'a DistanceMap,
    limits: SearchLimits,
    /// Qualifying chain starts in insertion order.
    allies: Vec<PersonId>,
}

impl<'a, S: SocialStore + ?Sized> ChainFinder<'a, S> {
    /// Create a chain finder.
    ///
    /// # Arguments
    /// * `store` - The social graph
    /// * `queen` - The person the plots are aimed at
    /// * `distances_from_queen` - Friendship distances from the queen
    /// * `max_ally_distance` - Maximum distance for a chain start
    /// * `limits` - Search bounds (unbounded by default)
    pub fn new(
        store: &'a S,
        queen: PersonId,
        distances_from_queen: &'a DistanceMap,
        max_ally_distance: u32,
        limits: SearchLimits,
    ) -> Self {
        let allies = store
            .person_ids()
            .into_iter()
            .filter(|id| {
                distances_from_queen
                    .get(id)
                    .is_some_and(|d| *d <= max_ally_distance)
            })
            .collect();

        Self {
            store,
            queen,
            distances_from_queen,
            limits,
            allies,
        }
    }

    /// People allowed to start a chain.
    pub fn allies(&self) -> &[PersonId] {
        &self.allies
    }

    /// Best chain ending at `enemy`, or `None` when no ally can reach them.
    pub fn find(&self, enemy: PersonId) -> Option<ConspiracyChain> {
        let paths = self.enumerate(enemy);
        let candidates = paths.len();

        let best = paths
            .iter()
            .filter_map(|path| self.rank(path).map(|rank| (rank, path)))
            .min_by(|a, b| a.0.cmp(&b.0))
            .map(|(_, path)| self.to_chain(path));

        tracing::debug!(
            enemy = self.store.name_of(enemy).unwrap_or_default(),
            candidates,
            found = best.is_some(),
            "conspiracy chain search finished"
        );
        best
    }

    /// Every candidate chain ending at `enemy`, best first.
    pub fn ranked_candidates(&self, enemy: PersonId) -> Vec<ConspiracyChain> {
        let paths = self.enumerate(enemy);
        let mut ranked: Vec<_> = paths
            .iter()
            .filter_map(|path| self.rank(path).map(|rank| (rank, path)))
            .collect();
        ranked.sort_by(|a, b| a.0.cmp(&b.0));
        ranked.into_iter().map(|(_, path)| self.to_chain(path)).collect()
    }

    /// Sort key for a path, `None` if it names someone outside the store.
    pub fn rank(&self, path: &[PersonId]) -> Option<ChainRank<'a>> {
        let store: &'a S = self.store;
        let start = *path.first()?;
        let names = path
            .iter()
            .map(|id| store.name_of(*id))
            .collect::<Option<Vec<&'a str>>>()?;

        Some(ChainRank {
            len: path.len(),
            start_is_direct_plotter: store.plots_against(start, self.queen),
            start_distance: self
                .distances_from_queen
                .get(&start)
                .copied()
                .unwrap_or(u32::MAX),
            start_name: names[0],
            names,
        })
    }

    fn enumerate(&self, enemy: PersonId) -> Vec<Vec<PersonId>> {
        let mut found = Vec::new();

        for &ally in self.allies.iter().filter(|id| **id != enemy) {
            let mut queue = VecDeque::from([PathBuilder::start(ally)]);

            while let Some(path) = queue.pop_front() {
                for target in self.store.plot_targets_of(path.last()) {
                    if path.contains(target) {
                        continue;
                    }
                    let next = path.extended(target);
                    if target == enemy {
                        found.push(next.into_ids());
                    } else if self.limits.allows_extension(next.len()) {
                        queue.push_back(next);
                    }
                }
            }
        }

        found
    }

    fn to_chain(&self, path: &[PersonId]) -> ConspiracyChain {
        ConspiracyChain::new(
            path.iter()
                .filter_map(|id| self.store.name_of(*id).map(str::to_string))
                .collect(),
        )
    }
}

/// Find the best chain from an ally of `queen` to `enemy`.
///
/// Convenience wrapper around [`ChainFinder`] for a single enemy.
pub fn find_chain<S: SocialStore + ?Sized>(
    store: &S,
    enemy: PersonId,
    max_ally_distance: u32,
    distances_from_queen: &DistanceMap,
    queen: PersonId,
    limits: SearchLimits,
) -> Option<ConspiracyChain> {
    ChainFinder::new(store, queen, distances_from_queen, max_ally_distance, limits).find(enemy)
}
