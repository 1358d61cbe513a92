//! User and subscriber wire types.

use serde::{Deserialize, Serialize};

/// A subscription relationship as it appears inside a user record.
///
/// The containing [`UserRecord`] is the target of the subscription:
/// `email` here is the subscriber, and the contact edge runs
/// subscriber → containing user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberRecord {
    /// Email of the subscribing user.
    #[serde(rename = "Email")]
    pub email: String,
    /// Opaque creation timestamp, passed through verbatim.
    #[serde(rename = "Created_at")]
    pub created_at: String,
}

impl SubscriberRecord {
    /// Create a new subscriber record.
    pub fn new(email: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            created_at: created_at.into(),
        }
    }
}

/// A user account with its ordered list of subscribers.
///
/// Field names follow the upstream export format. Emails are
/// case-sensitive opaque identifiers; no normalization is applied
/// anywhere in the kernel. Records are read-only once decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Display nickname.
    #[serde(rename = "Nick")]
    pub nick: String,
    /// Unique user email.
    #[serde(rename = "Email")]
    pub email: String,
    /// Opaque account-creation timestamp.
    #[serde(rename = "Created_at")]
    pub created_at: String,
    /// Users subscribed to this account, in export order.
    #[serde(rename = "Subscribers", default)]
    pub subscribers: Vec<SubscriberRecord>,
}

impl UserRecord {
    /// Create a new user record.
    pub fn new(
        nick: impl Into<String>,
        email: impl Into<String>,
        created_at: impl Into<String>,
        subscribers: Vec<SubscriberRecord>,
    ) -> Self {
        Self {
            nick: nick.into(),
            email: email.into(),
            created_at: created_at.into(),
            subscribers,
        }
    }
}
