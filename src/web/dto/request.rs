//! Request DTOs for the Web API.
//!
//! Required fields are deserialized as options so that an absent field
//! becomes a 400 "missing fields" response instead of a deserialization
//! rejection.

use serde::Deserialize;

/// Thread creation request.
#[derive(Debug, Deserialize)]
pub struct CreateThreadRequest {
    /// Thread text.
    pub text: Option<String>,
    /// Secret later required to delete the thread.
    pub delete_password: Option<String>,
}

/// Thread report request.
#[derive(Debug, Deserialize)]
pub struct ReportThreadRequest {
    /// ID of the thread to report.
    pub thread_id: Option<String>,
}

/// Thread deletion request.
#[derive(Debug, Deserialize)]
pub struct DeleteThreadRequest {
    /// ID of the thread to delete.
    pub thread_id: Option<String>,
    /// Secret chosen at creation.
    pub delete_password: Option<String>,
}

/// Reply creation request.
#[derive(Debug, Deserialize)]
pub struct CreateReplyRequest {
    /// ID of the thread to reply to.
    pub thread_id: Option<String>,
    /// Reply text.
    pub text: Option<String>,
    /// Secret later required to delete (redact) the reply.
    pub delete_password: Option<String>,
}

/// Query parameters for the single-thread view.
#[derive(Debug, Deserialize)]
pub struct ThreadQuery {
    /// ID of the thread to fetch.
    pub thread_id: Option<String>,
}

/// Reply report request.
#[derive(Debug, Deserialize)]
pub struct ReportReplyRequest {
    /// ID of the thread containing the reply.
    pub thread_id: Option<String>,
    /// ID of the reply to report.
    pub reply_id: Option<String>,
}

/// Reply deletion request.
#[derive(Debug, Deserialize)]
pub struct DeleteReplyRequest {
    /// ID of the thread containing the reply.
    pub thread_id: Option<String>,
    /// ID of the reply to delete.
    pub reply_id: Option<String>,
    /// Secret chosen at creation.
    pub delete_password: Option<String>,
}
