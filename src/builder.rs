//! Contact graph construction from user records.

use tracing::debug;

use crate::types::{ContactGraph, UserRecord};

/// Build a [`ContactGraph`] from a list of user records in one pass.
///
/// For every user, their creation timestamp is recorded, and every
/// subscriber gains a directed edge towards them: the subscriber is
/// the one who can reach out, so edges point subscriber → user.
///
/// Input is assumed pre-validated with unique user emails. If a user
/// email does repeat, the timestamp index keeps the last occurrence
/// and the adjacency lists accumulate edges from every occurrence;
/// this is undefined input, not a supported mode.
pub fn build_graph(users: &[UserRecord]) -> ContactGraph {
    let mut graph = ContactGraph::new();

    for user in users {
        graph.record_created_at(&user.email, &user.created_at);
        for sub in &user.subscribers {
            graph.add_edge(&sub.email, &user.email);
        }
    }

    debug!(
        users = users.len(),
        sources = graph.num_sources(),
        edges = graph.num_edges(),
        "contact graph built"
    );

    graph
}
