//! Relation kinds between people.

use serde::{Deserialize, Serialize};

/// Kind of relation between two people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Undirected friendship.
    Friendship,
    /// Directed conspiracy (source plots against target).
    Conspiracy,
}

impl RelationKind {
    /// Connective used in the input sentence for this relation.
    pub fn connective(&self) -> &'static str {
        match self {
            Self::Friendship => "is friends with",
            Self::Conspiracy => "is plotting against",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Friendship => write!(f, "friendship"),
            Self::Conspiracy => write!(f, "conspiracy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connectives_are_distinct() {
        assert_eq!(RelationKind::Friendship.connective(), "is friends with");
        assert_eq!(RelationKind::Conspiracy.connective(), "is plotting against");
    }

    #[test]
    fn test_display_names_error_messages() {
        assert_eq!(RelationKind::Friendship.to_string(), "friendship");
        assert_eq!(RelationKind::Conspiracy.to_string(), "conspiracy");
    }
}
