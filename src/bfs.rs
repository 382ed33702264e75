//! Friendship shortest paths.
//!
//! Level-order breadth-first search over the friendship relation only.
//! Every call owns its own depth map, so traversals never see state left
//! behind by a previous run and may share one graph freely.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, VecDeque};

use crate::store::SocialStore;
use crate::types::PersonId;

/// Friendship distance from one person to everyone reachable from them.
///
/// Unreachable people are absent; the start maps to 0.
pub type DistanceMap = BTreeMap<PersonId, u32>;

/// Shortest friendship distance from `start` to `end`.
///
/// Stops as soon as `end` leaves the frontier. Returns `None` when `end`
/// cannot be reached.
pub fn distance<S: SocialStore + ?Sized>(store: &S, start: PersonId, end: PersonId) -> Option<u32> {
    let (_, found) = breadth_first(store, start, Some(end));
    found
}

/// Friendship distances from `start` to every reachable person.
pub fn all_distances<S: SocialStore + ?Sized>(store: &S, start: PersonId) -> DistanceMap {
    let (depths, _) = breadth_first(store, start, None);
    depths
}

/// Degree of separation between two names, `-1` when either name is
/// unknown or no friendship path joins them.
pub fn degrees_of_separation<S: SocialStore + ?Sized>(store: &S, from: &str, to: &str) -> i64 {
    let (Some(start), Some(end)) = (store.find_node(from), store.find_node(to)) else {
        return -1;
    };
    distance(store, start, end).map_or(-1, i64::from)
}

/// Re-key a distance map by name (for serialization and reporting).
pub fn distances_by_name<S: SocialStore + ?Sized>(store: &S, distances: &DistanceMap) -> BTreeMap<String, u32> {
    distances
        .iter()
        .filter_map(|(id, d)| store.name_of(*id).map(|name| (name.to_string(), *d)))
        .collect()
}

fn breadth_first<S: SocialStore + ?Sized>(
    store: &S,
    start: PersonId,
    stop_at: Option<PersonId>,
) -> (DistanceMap, Option<u32>) {
    let mut depths = DistanceMap::new();
    let mut frontier: VecDeque<(PersonId, u32)> = VecDeque::new();

    depths.insert(start, 0);
    frontier.push_back((start, 0));

    while let Some((current, depth)) = frontier.pop_front() {
        if stop_at == Some(current) {
            tracing::trace!(%start, %current, depth, "bfs target reached");
            return (depths, Some(depth));
        }

        for friend in store.friends_of(current) {
            // Marked on discovery, so nobody is queued twice.
            if let Entry::Vacant(slot) = depths.entry(friend) {
                slot.insert(depth + 1);
                frontier.push_back((friend, depth + 1));
            }
        }
    }

    (depths, None)
}
