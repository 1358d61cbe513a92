//! Core types for the referral kernel.

pub mod graph;
pub mod query;
pub mod user;

pub use graph::ContactGraph;
pub use query::{PathHop, PathQuery, PathResult};
pub use user::{SubscriberRecord, UserRecord};
