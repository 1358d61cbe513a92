//! # referral-kernel
//!
//! Deterministic shortest referral-path computation over social
//! subscription graphs.
//!
//! The kernel answers one question:
//!
//! > Given two users, who is the shortest chain of intermediaries that
//! > connects them through subscriptions?
//!
//! ## Core Contract
//!
//! 1. Build a contact graph from user records: each subscriber gains a
//!    directed edge towards the user they subscribed to
//! 2. Answer each (from, to) query with a shortest path via BFS with
//!    parent-pointer reconstruction
//! 3. Report the strictly-intermediate users, annotated with their
//!    account-creation timestamps
//!
//! ## Architecture
//!
//! ```text
//! Vec<UserRecord> → build_graph → ContactGraph → PathFinder (per query)
//!                                      ↓
//!                               BatchRunner → Vec<PathResult> → io
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same user records → identical graph fingerprint
//! - Neighbor lists keep input order, fixing which equal-length
//!   shortest path wins
//! - Batch results keep query order with ids 1..n

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod builder;
pub mod canonical;
pub mod io;
pub mod pathfinder;
pub mod types;

// Re-exports
pub use batch::{BatchReport, BatchRunner};
pub use builder::build_graph;
pub use canonical::{canonical_hash, canonical_hash_hex, to_canonical_bytes};
pub use io::{load_queries, load_users, write_results, IoError};
pub use pathfinder::PathFinder;
pub use types::{ContactGraph, PathHop, PathQuery, PathResult, SubscriberRecord, UserRecord};

/// Schema version for all referral kernel types.
/// Increment on breaking changes to any serialized type.
pub const REFERRAL_KERNEL_SCHEMA_VERSION: &str = "1.0.0";
