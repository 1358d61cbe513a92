//! Shortest-path search over the contact graph.
//!
//! Plain breadth-first search with parent-pointer reconstruction.
//! Neighbor lists are scanned in insertion order, so which of several
//! equal-length shortest paths wins is fixed by the input, making
//! results reproducible across runs.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::types::ContactGraph;

/// Parent pointer recorded during BFS.
///
/// `Start` marks the search origin and terminates path reconstruction.
/// An enum variant cannot collide with a real email the way a reserved
/// marker string could.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Parent {
    /// The BFS start node; reconstruction stops here.
    Start,
    /// Reached from this email.
    Via(String),
}

/// Shortest-path finder over a built [`ContactGraph`].
///
/// Borrows the graph immutably; each query runs an independent BFS
/// with no caching across queries.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g ContactGraph,
}

impl<'g> PathFinder<'g> {
    /// Create a finder over `graph`.
    pub fn new(graph: &'g ContactGraph) -> Self {
        Self { graph }
    }

    /// Find a shortest path from `from` to `to`, endpoints inclusive.
    ///
    /// Returns `None` when `to` is not reachable from `from`, which
    /// covers emails that never appear in the graph at all. A query
    /// with `from == to` returns the single-element path `[from]`;
    /// callers deciding what "intermediate" means handle that case.
    pub fn shortest_path(&self, from: &str, to: &str) -> Option<Vec<String>> {
        let parents = self.breadth_first(from);

        if !parents.contains_key(to) {
            debug!(from, to, visited = parents.len(), "target unreachable");
            return None;
        }

        let path = reconstruct(&parents, to);
        debug!(from, to, hops = path.len() - 1, "path found");
        Some(path)
    }

    /// Run BFS from `start` over the whole reachable component.
    ///
    /// The returned map holds one entry per visited node; key presence
    /// doubles as the visited mark, so no separate set is kept. The
    /// full component is explored with no early exit, keeping the
    /// result independent of any particular target.
    fn breadth_first(&self, start: &str) -> HashMap<String, Parent> {
        let mut parents: HashMap<String, Parent> = HashMap::new();
        parents.insert(start.to_string(), Parent::Start);

        let mut frontier: VecDeque<String> = VecDeque::new();
        frontier.push_back(start.to_string());

        while let Some(email) = frontier.pop_front() {
            for neighbor in self.graph.neighbors(&email) {
                if !parents.contains_key(neighbor) {
                    parents.insert(neighbor.clone(), Parent::Via(email.clone()));
                    frontier.push_back(neighbor.clone());
                }
            }
        }

        parents
    }
}

/// Walk parent pointers backward from `to`, then reverse into a
/// forward path. `to` must be present in `parents`.
fn reconstruct(parents: &HashMap<String, Parent>, to: &str) -> Vec<String> {
    let mut path = vec![to.to_string()];

    let mut current = to;
    while let Some(Parent::Via(prev)) = parents.get(current) {
        path.push(prev.clone());
        current = prev.as_str();
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_graph;
    use crate::types::{SubscriberRecord, UserRecord};

    fn user(email: &str, subs: &[&str]) -> UserRecord {
        UserRecord::new(
            email,
            email,
            "2020-01-01T00:00:00Z",
            subs.iter()
                .map(|s| SubscriberRecord::new(*s, "2020-01-01T00:00:00Z"))
                .collect(),
        )
    }

    /// Chain c -> b -> a via "b subscribed to a, c subscribed to b".
    fn chain_graph() -> crate::types::ContactGraph {
        build_graph(&[user("a@x.ru", &["b@x.ru"]), user("b@x.ru", &["c@x.ru"])])
    }

    #[test]
    fn test_path_along_chain() {
        let graph = chain_graph();
        let finder = PathFinder::new(&graph);

        let path = finder.shortest_path("c@x.ru", "a@x.ru").unwrap();
        assert_eq!(path, ["c@x.ru", "b@x.ru", "a@x.ru"]);
    }

    #[test]
    fn test_wrong_direction_is_unreachable() {
        let graph = chain_graph();
        let finder = PathFinder::new(&graph);

        assert!(finder.shortest_path("a@x.ru", "c@x.ru").is_none());
    }

    #[test]
    fn test_self_query_returns_single_node() {
        let graph = chain_graph();
        let finder = PathFinder::new(&graph);

        let path = finder.shortest_path("b@x.ru", "b@x.ru").unwrap();
        assert_eq!(path, ["b@x.ru"]);
    }

    #[test]
    fn test_unknown_email_is_its_own_component() {
        let graph = chain_graph();
        let finder = PathFinder::new(&graph);

        assert!(finder.shortest_path("ghost@x.ru", "a@x.ru").is_none());
        let path = finder.shortest_path("ghost@x.ru", "ghost@x.ru").unwrap();
        assert_eq!(path, ["ghost@x.ru"]);
    }

    #[test]
    fn test_first_inserted_neighbor_wins_ties() {
        // Two length-2 routes z -> m1 -> t and z -> m2 -> t; m1's edge
        // was built first, so BFS must report the m1 route.
        let graph = build_graph(&[
            user("m1@x.ru", &["z@x.ru"]),
            user("m2@x.ru", &["z@x.ru"]),
            user("t@x.ru", &["m1@x.ru", "m2@x.ru"]),
        ]);
        let finder = PathFinder::new(&graph);

        let path = finder.shortest_path("z@x.ru", "t@x.ru").unwrap();
        assert_eq!(path, ["z@x.ru", "m1@x.ru", "t@x.ru"]);
    }

    #[test]
    fn test_shortest_beats_longer_route() {
        // Direct edge z -> t plus a two-hop detour; BFS must take the
        // direct edge even though the detour edges were inserted first.
        let graph = build_graph(&[
            user("m@x.ru", &["z@x.ru"]),
            user("t@x.ru", &["m@x.ru", "z@x.ru"]),
        ]);
        let finder = PathFinder::new(&graph);

        let path = finder.shortest_path("z@x.ru", "t@x.ru").unwrap();
        assert_eq!(path, ["z@x.ru", "t@x.ru"]);
    }

    #[test]
    fn test_cycle_does_not_loop() {
        // a -> b -> c -> a
        let graph = build_graph(&[
            user("b@x.ru", &["a@x.ru"]),
            user("c@x.ru", &["b@x.ru"]),
            user("a@x.ru", &["c@x.ru"]),
        ]);
        let finder = PathFinder::new(&graph);

        let path = finder.shortest_path("a@x.ru", "c@x.ru").unwrap();
        assert_eq!(path, ["a@x.ru", "b@x.ru", "c@x.ru"]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Unit-weight brute-force distances from `start`: relax every
        /// edge |V| times. Deliberately not a BFS, so it can serve as
        /// an independent oracle.
        fn brute_force_distances(
            nodes: usize,
            edges: &[(usize, usize)],
            start: usize,
        ) -> Vec<Option<usize>> {
            let mut dist: Vec<Option<usize>> = vec![None; nodes];
            dist[start] = Some(0);
            for _ in 0..nodes {
                for &(u, v) in edges {
                    if let Some(du) = dist[u] {
                        if dist[v].map_or(true, |dv| du + 1 < dv) {
                            dist[v] = Some(du + 1);
                        }
                    }
                }
            }
            dist
        }

        fn email(i: usize) -> String {
            format!("u{i}@x.ru")
        }

        /// Encode a random edge list as user records: an edge u -> v
        /// means u subscribed to v.
        fn graph_from_edges(nodes: usize, edges: &[(usize, usize)]) -> crate::types::ContactGraph {
            let users: Vec<UserRecord> = (0..nodes)
                .map(|v| {
                    let subs: Vec<&str> = Vec::new();
                    let mut record = user(&email(v), &subs);
                    record.subscribers = edges
                        .iter()
                        .filter(|&&(_, to)| to == v)
                        .map(|&(from, _)| SubscriberRecord::new(email(from), "2020"))
                        .collect();
                    record
                })
                .collect();
            build_graph(&users)
        }

        proptest! {
            #[test]
            fn path_length_matches_brute_force_distance(
                nodes in 2usize..12,
                edge_seeds in prop::collection::vec((0usize..12, 0usize..12), 0..40),
                start_seed in 0usize..12,
                target_seed in 0usize..12,
            ) {
                let edges: Vec<(usize, usize)> = edge_seeds
                    .into_iter()
                    .map(|(u, v)| (u % nodes, v % nodes))
                    .collect();
                let start = start_seed % nodes;
                let target = target_seed % nodes;

                let graph = graph_from_edges(nodes, &edges);
                let finder = PathFinder::new(&graph);

                let dist = brute_force_distances(nodes, &edges, start);
                let found = finder.shortest_path(&email(start), &email(target));

                match dist[target] {
                    Some(d) => {
                        let path = found.expect("reachable per brute force");
                        prop_assert_eq!(path.len(), d + 1);
                        prop_assert_eq!(&path[0], &email(start));
                        prop_assert_eq!(path.last().unwrap(), &email(target));
                        // Every step must follow a real edge.
                        for pair in path.windows(2) {
                            prop_assert!(
                                graph.neighbors(&pair[0]).contains(&pair[1])
                            );
                        }
                    }
                    None => prop_assert!(found.is_none()),
                }
            }
        }
    }
}
