//! Batch execution of path queries.
//!
//! Runs each query through the path finder in input order, assigning
//! sequential ids and annotating intermediate hops with the users'
//! creation timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::canonical::canonical_hash_hex;
use crate::pathfinder::PathFinder;
use crate::types::{ContactGraph, PathHop, PathQuery, PathResult};

/// Batch runner over a built [`ContactGraph`].
pub struct BatchRunner<'g> {
    graph: &'g ContactGraph,
    finder: PathFinder<'g>,
}

impl<'g> BatchRunner<'g> {
    /// Create a runner over `graph`.
    pub fn new(graph: &'g ContactGraph) -> Self {
        Self {
            graph,
            finder: PathFinder::new(graph),
        }
    }

    /// Execute all queries in order.
    ///
    /// Results carry ids 1..n in input order with no gaps. Trivial
    /// queries (`from == to`) and unreachable targets both produce an
    /// empty hop list; a one-node path has no valid intermediates, so
    /// the two cases serialize identically.
    pub fn run(&self, queries: &[PathQuery]) -> Vec<PathResult> {
        queries
            .iter()
            .enumerate()
            .map(|(index, query)| self.run_one(index as u64 + 1, query))
            .collect()
    }

    fn run_one(&self, id: u64, query: &PathQuery) -> PathResult {
        if query.is_trivial() {
            debug!(id, from = %query.from, "trivial query");
            return PathResult::empty(id, query);
        }

        match self.finder.shortest_path(&query.from, &query.to) {
            Some(path) => {
                let hops = self.intermediate_hops(&path);
                PathResult::with_path(id, query, hops)
            }
            None => PathResult::empty(id, query),
        }
    }

    /// Map the strictly-intermediate nodes of `path` to annotated
    /// hops, preserving path order. Endpoints are dropped; a node
    /// without a recorded timestamp keeps its hop with an empty one.
    fn intermediate_hops(&self, path: &[String]) -> Vec<PathHop> {
        path.iter()
            .skip(1)
            .take(path.len().saturating_sub(2))
            .map(|email| {
                let created_at = self.graph.created_at(email).unwrap_or_default();
                PathHop::new(email, created_at)
            })
            .collect()
    }
}

/// Summary of a completed batch run, for logging and audit.
///
/// Not part of the result file format; hashes come from the canonical
/// serialization path so equal runs produce equal reports (modulo the
/// generation time).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Fingerprint of the graph the batch ran against.
    pub graph_fingerprint: String,
    /// Number of queries executed.
    pub query_count: usize,
    /// Number of queries that found a connecting path.
    pub reachable_count: usize,
    /// Canonical hash of the full result list.
    pub results_hash: String,
}

impl BatchReport {
    /// Build a report from a finished run.
    pub fn from_results(graph: &ContactGraph, results: &[PathResult]) -> Self {
        let reachable_count = results.iter().filter(|r| r.is_connected()).count();
        let report = Self {
            generated_at: Utc::now(),
            graph_fingerprint: graph.fingerprint(),
            query_count: results.len(),
            reachable_count,
            results_hash: canonical_hash_hex(&results),
        };

        info!(
            queries = report.query_count,
            reachable = report.reachable_count,
            graph_fingerprint = %report.graph_fingerprint,
            results_hash = %report.results_hash,
            "batch run complete"
        );

        report
    }
}
