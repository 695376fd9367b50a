//! Memory item schema and category filtering.

use serde::{Deserialize, Serialize};

/// A single memory as returned by the listing tool.
///
/// Immutable for the duration of an invocation; fetched, rendered, dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryItem {
    /// Memory text
    pub memory: String,

    /// Category tags, in declaration order (possibly empty)
    #[serde(default)]
    pub categories: Vec<String>,
}

impl MemoryItem {
    /// First category tag, used as the sort key.
    pub fn first_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }
}

/// Per-agent category restriction.
///
/// Derived fresh from configuration on every invocation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No restriction: inject everything
    All,
    /// Only items carrying at least one of these tags (case-sensitive)
    Allow(Vec<String>),
}

impl CategoryFilter {
    /// Build a filter from a configuration lookup result.
    pub fn from_allowed(allowed: Option<Vec<String>>) -> Self {
        match allowed {
            Some(list) => Self::Allow(list),
            None => Self::All,
        }
    }

    /// Whether an item passes this filter.
    ///
    /// Items without categories never pass an `Allow` filter.
    pub fn matches(&self, item: &MemoryItem) -> bool {
        match self {
            Self::All => true,
            Self::Allow(allowed) => item.categories.iter().any(|c| allowed.contains(c)),
        }
    }
}
