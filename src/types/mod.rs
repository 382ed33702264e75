//! Core types for the intrigue kernel.

pub mod person;
pub mod relation;
pub mod chain;

pub use person::{PersonId, Person};
pub use relation::RelationKind;
pub use chain::ConspiracyChain;
