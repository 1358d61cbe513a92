//! Query and result types for batch path lookups.

use serde::{Deserialize, Serialize};

/// One row of the input batch: find a referral path `from` → `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathQuery {
    /// Email the introduction request starts from.
    pub from: String,
    /// Email the introduction should reach.
    pub to: String,
}

impl PathQuery {
    /// Create a new query.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// A query is trivial when source and destination coincide.
    pub fn is_trivial(&self) -> bool {
        self.from == self.to
    }
}

/// One intermediate node on a referral path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathHop {
    /// Email of the intermediate user.
    pub email: String,
    /// Account-creation timestamp of that user, empty when unknown.
    pub created_at: String,
}

impl PathHop {
    /// Create a new hop.
    pub fn new(email: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            created_at: created_at.into(),
        }
    }
}

/// Result of one path query.
///
/// `path` lists strictly-intermediate nodes in path order; the `from`
/// and `to` endpoints are never included. An empty list means the
/// target was unreachable or the query was trivial, and is omitted
/// from the serialized form entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// Sequential identifier, 1-based, in batch input order.
    pub id: u64,
    /// Query source email.
    pub from: String,
    /// Query destination email.
    pub to: String,
    /// Intermediate hops, endpoints excluded.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub path: Vec<PathHop>,
}

impl PathResult {
    /// Result for a query with no usable path (unreachable or trivial).
    pub fn empty(id: u64, query: &PathQuery) -> Self {
        Self {
            id,
            from: query.from.clone(),
            to: query.to.clone(),
            path: Vec::new(),
        }
    }

    /// Result carrying intermediate hops.
    pub fn with_path(id: u64, query: &PathQuery, path: Vec<PathHop>) -> Self {
        Self {
            id,
            from: query.from.clone(),
            to: query.to.clone(),
            path,
        }
    }

    /// Whether a connecting path was found.
    pub fn is_connected(&self) -> bool {
        !self.path.is_empty()
    }
}
