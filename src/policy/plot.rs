//! PlotPolicy: who the queen is and how far her allies may stand.
//!
//! The policy is the whole configuration of a plot resolution. It is
//! serde-serializable so it can be loaded from a JSON document and its
//! `params_hash` recorded next to every result it produced.

use serde::{Deserialize, Serialize};
use crate::canonical::canonical_hash_hex;
use crate::{DEFAULT_POLICY_VERSION, DEFAULT_QUEEN};

/// Smallest chain worth searching for: one ally and one enemy.
const MIN_CHAIN_LEN: usize = 2;

/// Error type for policy loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// The policy document is not valid JSON for this schema.
    #[error("Invalid policy document: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// Queen name is blank.
    #[error("Queen name must not be empty")]
    EmptyQueen,
    /// Search bound cannot fit even a direct chain.
    #[error("max_chain_len must be at least 2, got {0}")]
    ChainLenTooShort(usize),
}

/// Bounds on the conspiracy chain search.
///
/// The default is unbounded: every simple conspiracy path from every
/// qualifying ally is enumerated before ranking, which is exponential on
/// densely plotting graphs. Setting `max_chain_len` prunes any partial path
/// that already holds that many people. This changes results only when the
/// best unbounded chain is longer than the bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Maximum number of people in a chain, ally and enemy included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_chain_len: Option<usize>,
}

impl SearchLimits {
    /// Exhaustive search.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Search limited to chains of at most `max_chain_len` people.
    pub fn max_chain_len(max_chain_len: usize) -> Self {
        Self {
            max_chain_len: Some(max_chain_len),
        }
    }

    /// Whether a path of `len` people may still be extended.
    pub fn allows_extension(&self, len: usize) -> bool {
        self.max_chain_len.map_or(true, |max| len < max)
    }

    /// Whether any bound is set.
    pub fn is_bounded(&self) -> bool {
        self.max_chain_len.is_some()
    }
}

/// Plot resolution policy.
///
/// ## Parameters
///
/// - `queen`: name of the person every plot is aimed at
/// - `max_ally_distance`: friendship distance within which someone counts
///   as the queen's ally and may start a chain
/// - `limits`: optional bound on the chain search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotPolicy {
    /// Policy version identifier.
    #[serde(default = "default_version")]
    pub version: String,
    /// Name of the queen.
    #[serde(default = "default_queen")]
    pub queen: String,
    /// Maximum friendship distance from the queen for a chain start.
    #[serde(default = "default_max_ally_distance")]
    pub max_ally_distance: u32,
    /// Chain search bounds.
    #[serde(default)]
    pub limits: SearchLimits,
}

fn default_version() -> String {
    DEFAULT_POLICY_VERSION.to_string()
}

fn default_queen() -> String {
    DEFAULT_QUEEN.to_string()
}

fn default_max_ally_distance() -> u32 {
    1
}

impl PlotPolicy {
    /// Create a policy for `queen` with allies up to `max_ally_distance`.
    pub fn new(queen: impl Into<String>, max_ally_distance: u32) -> Self {
        Self {
            version: default_version(),
            queen: queen.into(),
            max_ally_distance,
            limits: SearchLimits::unbounded(),
        }
    }

    /// Replace the queen.
    pub fn with_queen(mut self, queen: impl Into<String>) -> Self {
        self.queen = queen.into();
        self
    }

    /// Replace the ally distance bound.
    pub fn with_max_ally_distance(mut self, max_ally_distance: u32) -> Self {
        self.max_ally_distance = max_ally_distance;
        self
    }

    /// Replace the search limits.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Parse and validate a JSON policy document. Missing fields take
    /// their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(s)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Check the policy is usable.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.queen.trim().is_empty() {
            return Err(PolicyError::EmptyQueen);
        }
        if let Some(max) = self.limits.max_chain_len {
            if max < MIN_CHAIN_LEN {
                return Err(PolicyError::ChainLenTooShort(max));
            }
        }
        Ok(())
    }

    /// Get the policy ID.
    pub fn policy_id(&self) -> &str {
        &self.version
    }

    /// Compute a hash of the policy parameters.
    pub fn params_hash(&self) -> String {
        canonical_hash_hex(self)
    }
}

impl Default for PlotPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_QUEEN, default_max_ally_distance())
    }
}
