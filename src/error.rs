//! Crate-level error type.

use thiserror::Error;

use crate::parse::ParseError;
use crate::policy::PolicyError;
use crate::store::GraphError;

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, IntrigueError>;

/// Any failure while loading inputs or building the graph.
///
/// Absence of a path, chain, or queen is never an error.
#[derive(Error, Debug)]
pub enum IntrigueError {
    /// Structural graph violation.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Malformed relation sentence.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Unusable policy.
    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// Input could not be read.
    #[error("Cannot read {path}: {source}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}
