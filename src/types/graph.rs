//! In-memory contact graph.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_hash_hex;

/// Directed contact graph derived from subscription records.
///
/// Nodes are emails. An edge runs from a subscriber to the user they
/// subscribed to, so traversal follows the "can ask for an intro"
/// direction. Uses `BTreeMap` for deterministic iteration order; the
/// per-node neighbor lists keep insertion order, which fixes which of
/// several equal-length shortest paths BFS returns.
///
/// Built once per batch run and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactGraph {
    /// Subscriber email → emails they subscribed to, in input order.
    adjacency: BTreeMap<String, Vec<String>>,
    /// Email → account-creation timestamp, for annotating path hops.
    created_at: BTreeMap<String, String>,
}

impl ContactGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directed edge from `subscriber` to `target`.
    ///
    /// Duplicate edges are retained as-is; BFS visited-marking makes
    /// them harmless during traversal.
    pub fn add_edge(&mut self, subscriber: impl Into<String>, target: impl Into<String>) {
        self.adjacency
            .entry(subscriber.into())
            .or_default()
            .push(target.into());
    }

    /// Record the creation timestamp for an email.
    ///
    /// Last write wins if the same email is recorded twice.
    pub fn record_created_at(&mut self, email: impl Into<String>, created_at: impl Into<String>) {
        self.created_at.insert(email.into(), created_at.into());
    }

    /// Outbound neighbors of `email`, in insertion order.
    ///
    /// Emails with no recorded subscriptions yield an empty slice.
    pub fn neighbors(&self, email: &str) -> &[String] {
        self.adjacency
            .get(email)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Creation timestamp recorded for `email`, if any.
    pub fn created_at(&self, email: &str) -> Option<&str> {
        self.created_at.get(email).map(String::as_str)
    }

    /// Number of emails with at least one outbound edge.
    pub fn num_sources(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of directed edges.
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Number of users with a recorded creation timestamp.
    pub fn num_users(&self) -> usize {
        self.created_at.len()
    }

    /// Deterministic fingerprint of the graph contents.
    ///
    /// Equal graphs produce equal fingerprints; both maps iterate in
    /// key order, so the hash is independent of build history.
    pub fn fingerprint(&self) -> String {
        canonical_hash_hex(self)
    }
}
