//! Thread and reply models for anonboard.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Sentinel text a reply is replaced with when its owner deletes it.
///
/// Replies are redacted rather than removed so sibling positions and ids
/// stay stable for clients holding references into the thread.
pub const REDACTED_TEXT: &str = "[deleted]";

/// A reply nested inside a thread.
#[derive(Debug, Clone)]
pub struct Reply {
    /// Unique reply ID, assigned at creation.
    pub id: Uuid,
    /// Reply text. Becomes [`REDACTED_TEXT`] after owner deletion.
    pub text: String,
    /// Opaque secret required to delete (redact) this reply.
    pub delete_password: String,
    /// Reply creation timestamp.
    pub created_on: DateTime<Utc>,
    /// One-way moderation flag.
    pub reported: bool,
}

impl Reply {
    /// Create a new reply with a fresh ID and the current timestamp.
    pub fn new(text: impl Into<String>, delete_password: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            delete_password: delete_password.into(),
            created_on: Utc::now(),
            reported: false,
        }
    }

    /// Check whether this reply has been redacted by its owner.
    pub fn is_redacted(&self) -> bool {
        self.text == REDACTED_TEXT
    }
}

/// A top-level thread on a board, owning its replies.
#[derive(Debug, Clone)]
pub struct Thread {
    /// Unique thread ID, assigned at creation.
    pub id: Uuid,
    /// Name of the board this thread lives on.
    pub board: String,
    /// Thread text.
    pub text: String,
    /// Opaque secret required to delete this thread.
    pub delete_password: String,
    /// Thread creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Recency timestamp, refreshed whenever a reply is accepted.
    /// Equals `created_on` until the first reply.
    pub bumped_on: DateTime<Utc>,
    /// One-way moderation flag.
    pub reported: bool,
    /// Replies in append order.
    pub replies: Vec<Reply>,
}

impl Thread {
    /// Create a new thread with a fresh ID, the current timestamp and no
    /// replies.
    pub fn new(
        board: impl Into<String>,
        text: impl Into<String>,
        delete_password: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board: board.into(),
            text: text.into(),
            delete_password: delete_password.into(),
            created_on: now,
            bumped_on: now,
            reported: false,
            replies: Vec::new(),
        }
    }

    /// Total number of replies, including redacted ones.
    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }
}
