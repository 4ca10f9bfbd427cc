//! Extension directory records.
//!
//! The published directory lists three kinds of entries: 3-digit user
//! extensions carrying an operator callsign, 4-digit node extensions,
//! and wide-area node extensions with 5 or more digits. Nodes and wide
//! nodes share a shape but are kept apart because the phone formats
//! append wide nodes after the regular nodes instead of interleaving.

use serde::{Deserialize, Serialize};

/// A 3-digit user extension with its operator callsign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserExtension {
    /// Extension number, always in the 300-399 block.
    pub extension: u32,
    /// Operator callsign, uppercase alphanumeric.
    pub callsign: String,
    /// Operator name as printed in the directory.
    pub name: String,
}

/// A node extension (4 digits) or wide-area node extension (5+ digits).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeExtension {
    /// Extension number.
    pub extension: u64,
    /// Node description as printed in the directory.
    pub name: String,
}

/// The parsed extension directory: one collection per entry category.
///
/// Collections are sorted ascending by extension number. Extension
/// numbers are unique per category at best; the published document
/// occasionally repeats them and duplicates are kept in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    /// 3-digit user extensions.
    pub users: Vec<UserExtension>,
    /// 4-digit node extensions.
    pub nodes: Vec<NodeExtension>,
    /// Node extensions with 5 or more digits.
    pub wide_nodes: Vec<NodeExtension>,
}

impl Directory {
    /// True if no entries were found in any category.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.nodes.is_empty() && self.wide_nodes.is_empty()
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        self.users.len() + self.nodes.len() + self.wide_nodes.len()
    }
}
