//! Conspiracy chain type.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An ordered, non-repeating sequence of names linked by conspiracy edges.
///
/// The first name is the ally the chain starts from; the last name is the
/// enemy it ends at. Everything before the last name is an intermediate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConspiracyChain(Vec<String>);

impl ConspiracyChain {
    /// Create a chain from names in start-to-target order.
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Names in start-to-target order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Number of people in the chain (not the number of edges).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the chain has no people at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names that take part in the chain without being its target.
    ///
    /// Two chains conflict when these sets intersect; targets are exempt
    /// since several chains may legitimately converge on one enemy.
    pub fn intermediates(&self) -> BTreeSet<&str> {
        let end = self.0.len().saturating_sub(1);
        self.0[..end].iter().map(String::as_str).collect()
    }
}

impl From<Vec<String>> for ConspiracyChain {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl fmt::Display for ConspiracyChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(names: &[&str]) -> ConspiracyChain {
        ConspiracyChain::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_intermediates_exclude_target() {
        let c = chain(&["Varys", "Littlefinger", "Jaime"]);

        let intermediates: Vec<_> = c.intermediates().into_iter().collect();
        assert_eq!(intermediates, vec!["Littlefinger", "Varys"]);
        assert_eq!(c.names().last().map(String::as_str), Some("Jaime"));
    }

    #[test]
    fn test_empty_chain_has_no_intermediates() {
        let c = ConspiracyChain::new(vec![]);
        assert!(c.is_empty());
        assert!(c.intermediates().is_empty());
    }

    #[test]
    fn test_display_joins_with_arrows() {
        assert_eq!(chain(&["A", "B", "C"]).to_string(), "A -> B -> C");
    }
}
