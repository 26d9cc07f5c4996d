//! Response DTOs for the Web API.
//!
//! These types ARE the projection layer: what a response may contain is
//! fixed by the struct it is serialized from, never by callers skipping
//! fields. Three views exist:
//!
//! - owner view: creation responses only, echoes the secret back to the
//!   caller who supplied it (plus sibling secrets on reply creation)
//! - public list view: recency window, secrets and moderation flags
//!   stripped, reply previews capped
//! - detail view: one thread with all replies, secrets and moderation
//!   flags stripped

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::board::{Reply, Thread};

/// Number of replies shown per thread in the public list view.
pub const REPLY_PREVIEW_COUNT: usize = 3;

/// Public reply shape: id, text and timestamp only.
#[derive(Debug, Serialize)]
pub struct ReplyView {
    /// Reply ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Reply text (the redaction sentinel once deleted).
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
}

impl From<&Reply> for ReplyView {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text.clone(),
            created_on: reply.created_on,
        }
    }
}

/// Reply shape in creation responses, secret included.
#[derive(Debug, Serialize)]
pub struct ReplyOwnerView {
    /// Reply ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Reply text.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// The reply's delete password.
    pub delete_password: String,
    /// Moderation flag.
    pub reported: bool,
}

impl From<&Reply> for ReplyOwnerView {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text.clone(),
            created_on: reply.created_on,
            delete_password: reply.delete_password.clone(),
            reported: reply.reported,
        }
    }
}

/// Thread shape returned from the two creation endpoints.
///
/// This is the only read path that carries secrets; it goes to the caller
/// who just supplied (or proved knowledge of) a delete password.
#[derive(Debug, Serialize)]
pub struct ThreadOwnerResponse {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Thread text.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Recency timestamp.
    pub bumped_on: DateTime<Utc>,
    /// Moderation flag.
    pub reported: bool,
    /// The thread's delete password.
    pub delete_password: String,
    /// All replies, secrets included.
    pub replies: Vec<ReplyOwnerView>,
}

impl From<&Thread> for ThreadOwnerResponse {
    fn from(thread: &Thread) -> Self {
        Self {
            id: thread.id,
            text: thread.text.clone(),
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            reported: thread.reported,
            delete_password: thread.delete_password.clone(),
            replies: thread.replies.iter().map(ReplyOwnerView::from).collect(),
        }
    }
}

/// Thread shape in the public list view.
///
/// Carries the true total reply count, but at most
/// [`REPLY_PREVIEW_COUNT`] of the most recent replies.
#[derive(Debug, Serialize)]
pub struct ThreadSummaryResponse {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Thread text.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Recency timestamp.
    pub bumped_on: DateTime<Utc>,
    /// Total number of replies, shown or not.
    pub replycount: usize,
    /// The most recent replies, in append order.
    pub replies: Vec<ReplyView>,
}

impl From<&Thread> for ThreadSummaryResponse {
    fn from(thread: &Thread) -> Self {
        let skip = thread.replies.len().saturating_sub(REPLY_PREVIEW_COUNT);
        Self {
            id: thread.id,
            text: thread.text.clone(),
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replycount: thread.reply_count(),
            replies: thread.replies[skip..].iter().map(ReplyView::from).collect(),
        }
    }
}

/// Thread shape in the single-thread view: all replies, no secrets and no
/// moderation flags, on the thread or on any reply.
#[derive(Debug, Serialize)]
pub struct ThreadDetailResponse {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Thread text.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Recency timestamp.
    pub bumped_on: DateTime<Utc>,
    /// All replies in append order.
    pub replies: Vec<ReplyView>,
}

impl From<&Thread> for ThreadDetailResponse {
    fn from(thread: &Thread) -> Self {
        Self {
            id: thread.id,
            text: thread.text.clone(),
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replies: thread.replies.iter().map(ReplyView::from).collect(),
        }
    }
}
