//! # intrigue-kernel
//!
//! Deterministic plot resolution over a social graph.
//!
//! People are joined by undirected *friendship* edges and directed
//! *conspiracy* edges. The kernel answers two questions:
//!
//! > How many friendships separate two people?
//!
//! > Can every direct plotter against the queen be reached by a chain of
//! > conspirators starting from one of her allies, without two chains
//! > sharing a conspirator?
//!
//! ## Architecture
//!
//! ```text
//! pairs → InMemorySocialGraph → bfs (distances from queen)
//!                                   ↓
//!                     ChainFinder (one chain per plotter)
//!                                   ↓
//!                      allocate (disjoint intermediates) → Resolution
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same graph + same policy → identical `Resolution` and fingerprint
//! - Relation sets are ordered by insertion id
//! - Chain ties are broken down to the full name sequence
//! - Plotters are allocated in name order

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod store;
pub mod bfs;
pub mod chain;
pub mod allocator;
pub mod policy;
pub mod resolver;
pub mod parse;
pub mod report;
pub mod canonical;
pub mod error;

// Re-exports
pub use types::{PersonId, Person, RelationKind, ConspiracyChain};
pub use store::{SocialStore, InMemorySocialGraph, GraphError};
pub use bfs::{DistanceMap, distance, all_distances, degrees_of_separation, distances_by_name};
pub use chain::{ChainFinder, ChainRank, find_chain};
pub use allocator::{Allocation, allocate};
pub use policy::{PlotPolicy, PolicyError, SearchLimits};
pub use resolver::{PlotResolver, Resolution, Outcome};
pub use parse::{ParseError, parse_friendships, parse_conspiracies};
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex};
pub use error::{IntrigueError, Result};

/// Default policy version identifier.
pub const DEFAULT_POLICY_VERSION: &str = "plot_policy_v1";

/// Queen targeted when no other name is configured.
pub const DEFAULT_QUEEN: &str = "Cersei Lannister";
