//! Board service for anonboard.
//!
//! High-level operations for threads and replies: creation, the recency
//! window, anonymous reporting, and password-gated deletion/redaction.
//! Input validation happens here, before any storage access.

use uuid::Uuid;

use super::name::validate_board_name;
use super::thread::{Reply, Thread};
use super::thread_repository::ThreadRepository;
use crate::db::Database;
use crate::{AnonboardError, Result};

/// Number of threads returned by the recency listing.
pub const RECENT_THREADS_LIMIT: i64 = 10;

/// Outcome of a password-gated delete or redact operation.
///
/// A missing thread, a missing reply and a wrong password all collapse into
/// [`DeleteOutcome::IncorrectPassword`] so that deletion attempts cannot be
/// used to probe for the existence of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The entity was deleted (thread) or redacted (reply).
    Deleted,
    /// Wrong password, or nothing matched the given ids.
    IncorrectPassword,
}

/// Validate that a required text field is present.
fn validate_required(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(AnonboardError::Validation("missing fields".to_string()));
    }
    Ok(())
}

/// Parse a client-supplied entity id.
///
/// Ids are store-generated UUIDs; a string that does not parse can never
/// name an existing entity, so callers treat a parse failure exactly like
/// a lookup miss.
fn parse_entity_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

/// Service for board operations.
pub struct BoardService<'a> {
    db: &'a Database,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create a new thread on a board.
    ///
    /// Returns the full thread, including its delete password; this is the
    /// one-time echo to the creator, who supplied the secret.
    pub async fn create_thread(
        &self,
        board: &str,
        text: &str,
        delete_password: &str,
    ) -> Result<Thread> {
        validate_board_name(board)?;
        validate_required(text)?;
        validate_required(delete_password)?;

        let thread = Thread::new(board, text, delete_password);
        let repo = ThreadRepository::new(self.db.pool());
        repo.insert(&thread).await?;

        tracing::debug!(board, thread_id = %thread.id, "thread created");
        Ok(thread)
    }

    /// List the most recently bumped threads on a board, newest first.
    ///
    /// At most [`RECENT_THREADS_LIMIT`] threads are returned, with full
    /// replies; the response layer reduces them to the public view.
    pub async fn recent_threads(&self, board: &str) -> Result<Vec<Thread>> {
        validate_board_name(board)?;

        let repo = ThreadRepository::new(self.db.pool());
        repo.list_recent(board, RECENT_THREADS_LIMIT).await
    }

    /// Fetch a single thread with all its replies.
    pub async fn get_thread(&self, board: &str, thread_id: &str) -> Result<Thread> {
        validate_board_name(board)?;

        let repo = ThreadRepository::new(self.db.pool());
        let id = parse_entity_id(thread_id)
            .ok_or_else(|| AnonboardError::NotFound("thread".to_string()))?;

        repo.get_by_id(board, id)
            .await?
            .ok_or_else(|| AnonboardError::NotFound("thread".to_string()))
    }

    /// Create a reply on an existing thread.
    ///
    /// The reply append and the thread bump happen atomically. Returns the
    /// updated thread, replies included, in the creator-facing shape.
    pub async fn create_reply(
        &self,
        board: &str,
        thread_id: &str,
        text: &str,
        delete_password: &str,
    ) -> Result<Thread> {
        validate_board_name(board)?;
        validate_required(thread_id)?;
        validate_required(text)?;
        validate_required(delete_password)?;

        let repo = ThreadRepository::new(self.db.pool());
        let id = parse_entity_id(thread_id)
            .ok_or_else(|| AnonboardError::NotFound("thread".to_string()))?;

        let reply = Reply::new(text, delete_password);
        let updated = repo
            .append_reply(board, id, &reply)
            .await?
            .ok_or_else(|| AnonboardError::NotFound("thread".to_string()))?;

        tracing::debug!(board, thread_id = %id, reply_id = %reply.id, "reply created");
        Ok(updated)
    }

    /// Flag a thread as reported. No password required.
    ///
    /// A missing thread is a silent no-op: the update simply matches
    /// nothing and the caller still gets its acknowledgement.
    pub async fn report_thread(&self, board: &str, thread_id: &str) -> Result<()> {
        validate_board_name(board)?;
        validate_required(thread_id)?;

        let Some(id) = parse_entity_id(thread_id) else {
            return Ok(());
        };

        let repo = ThreadRepository::new(self.db.pool());
        let matched = repo.set_thread_reported(board, id).await?;
        if !matched {
            tracing::debug!(board, thread_id, "report matched no thread");
        }
        Ok(())
    }

    /// Flag a reply as reported. No password required; miss is a no-op.
    pub async fn report_reply(&self, board: &str, thread_id: &str, reply_id: &str) -> Result<()> {
        validate_board_name(board)?;
        validate_required(thread_id)?;
        validate_required(reply_id)?;

        let (Some(tid), Some(rid)) = (parse_entity_id(thread_id), parse_entity_id(reply_id))
        else {
            return Ok(());
        };

        let repo = ThreadRepository::new(self.db.pool());
        let matched = repo.set_reply_reported(board, tid, rid).await?;
        if !matched {
            tracing::debug!(board, thread_id, reply_id, "report matched no reply");
        }
        Ok(())
    }

    /// Delete a thread and all its replies, gated on the delete password.
    pub async fn delete_thread(
        &self,
        board: &str,
        thread_id: &str,
        delete_password: &str,
    ) -> Result<DeleteOutcome> {
        validate_board_name(board)?;
        validate_required(thread_id)?;
        validate_required(delete_password)?;

        let Some(id) = parse_entity_id(thread_id) else {
            return Ok(DeleteOutcome::IncorrectPassword);
        };

        let repo = ThreadRepository::new(self.db.pool());
        if repo.delete_thread_checked(board, id, delete_password).await? {
            tracing::debug!(board, thread_id, "thread deleted");
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::IncorrectPassword)
        }
    }

    /// Redact a reply, gated on the delete password.
    ///
    /// The reply keeps its id, timestamp, reported state and position;
    /// only its text is replaced with the redaction sentinel.
    pub async fn delete_reply(
        &self,
        board: &str,
        thread_id: &str,
        reply_id: &str,
        delete_password: &str,
    ) -> Result<DeleteOutcome> {
        validate_board_name(board)?;
        validate_required(thread_id)?;
        validate_required(reply_id)?;
        validate_required(delete_password)?;

        let (Some(tid), Some(rid)) = (parse_entity_id(thread_id), parse_entity_id(reply_id))
        else {
            return Ok(DeleteOutcome::IncorrectPassword);
        };

        let repo = ThreadRepository::new(self.db.pool());
        if repo
            .redact_reply_checked(board, tid, rid, delete_password)
            .await?
        {
            tracing::debug!(board, thread_id, reply_id, "reply redacted");
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::IncorrectPassword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::REDACTED_TEXT;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_thread() {
        let db = setup_db().await;
        let service = BoardService::new(&db);

        let thread = service
            .create_thread("test", "Test thread", "pass123")
            .await
            .unwrap();

        assert_eq!(thread.text, "Test thread");
        assert_eq!(thread.delete_password, "pass123");
        assert_eq!(thread.bumped_on, thread.created_on);
        assert!(!thread.reported);
        assert!(thread.replies.is_empty());
    }

    #[tokio::test]
    async fn test_create_thread_rejects_empty_fields() {
        let db = setup_db().await;
        let service = BoardService::new(&db);

        let err = service.create_thread("test", "", "pass123").await;
        assert!(matches!(err, Err(AnonboardError::Validation(_))));

        let err = service.create_thread("test", "Test thread", "").await;
        assert!(matches!(err, Err(AnonboardError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_thread_rejects_bad_board_name() {
        let db = setup_db().await;
        let service = BoardService::new(&db);

        let err = service.create_thread("no spaces", "text", "pw").await;
        assert!(matches!(err, Err(AnonboardError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_reply_bumps_thread() {
        let db = setup_db().await;
        let service = BoardService::new(&db);

        let thread = service
            .create_thread("test", "Test thread", "pass123")
            .await
            .unwrap();

        let updated = service
            .create_reply("test", &thread.id.to_string(), "Test reply", "replypass")
            .await
            .unwrap();

        assert_eq!(updated.replies.len(), 1);
        assert_eq!(updated.replies[0].text, "Test reply");
        assert_eq!(updated.bumped_on, updated.replies[0].created_on);
        assert!(updated.bumped_on >= updated.created_on);
    }

    #[tokio::test]
    async fn test_create_reply_missing_thread() {
        let db = setup_db().await;
        let service = BoardService::new(&db);

        let err = service
            .create_reply("test", &Uuid::new_v4().to_string(), "hello", "pw")
            .await;
        assert!(matches!(err, Err(AnonboardError::NotFound(_))));

        // An unparseable id can never exist either
        let err = service.create_reply("test", "not-a-uuid", "hello", "pw").await;
        assert!(matches!(err, Err(AnonboardError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_bumped_on_is_monotonic() {
        let db = setup_db().await;
        let service = BoardService::new(&db);

        let thread = service
            .create_thread("test", "Test thread", "pass123")
            .await
            .unwrap();
        let id = thread.id.to_string();

        let mut last_bump = thread.bumped_on;
        for i in 0..3 {
            let updated = service
                .create_reply("test", &id, &format!("reply {i}"), "pw")
                .await
                .unwrap();
            assert!(updated.bumped_on >= last_bump);
            last_bump = updated.bumped_on;
        }
    }

    #[tokio::test]
    async fn test_get_thread_not_found() {
        let db = setup_db().await;
        let service = BoardService::new(&db);

        let err = service.get_thread("test", &Uuid::new_v4().to_string()).await;
        assert!(matches!(err, Err(AnonboardError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_report_thread_idempotent() {
        let db = setup_db().await;
        let service = BoardService::new(&db);

        let thread = service
            .create_thread("test", "Test thread", "pass123")
            .await
            .unwrap();
        let id = thread.id.to_string();

        service.report_thread("test", &id).await.unwrap();
        service.report_thread("test", &id).await.unwrap();

        let found = service.get_thread("test", &id).await.unwrap();
        assert!(found.reported);
    }

    #[tokio::test]
    async fn test_report_missing_thread_is_noop() {
        let db = setup_db().await;
        let service = BoardService::new(&db);

        // Neither an unknown id nor an unparseable one is an error
        service
            .report_thread("test", &Uuid::new_v4().to_string())
            .await
            .unwrap();
        service.report_thread("test", "not-a-uuid").await.unwrap();
    }

    #[tokio::test]
    async fn test_report_reply() {
        let db = setup_db().await;
        let service = BoardService::new(&db);

        let thread = service
            .create_thread("test", "Test thread", "pass123")
            .await
            .unwrap();
        let updated = service
            .create_reply("test", &thread.id.to_string(), "Test reply", "replypass")
            .await
            .unwrap();
        let reply_id = updated.replies[0].id.to_string();
        let thread_id = thread.id.to_string();

        service
            .report_reply("test", &thread_id, &reply_id)
            .await
            .unwrap();
        service
            .report_reply("test", &thread_id, &reply_id)
            .await
            .unwrap();

        let found = service.get_thread("test", &thread_id).await.unwrap();
        assert!(found.replies[0].reported);
    }

    #[tokio::test]
    async fn test_delete_thread_wrong_password() {
        let db = setup_db().await;
        let service = BoardService::new(&db);

        let thread = service
            .create_thread("test", "Test thread", "pass123")
            .await
            .unwrap();
        let id = thread.id.to_string();

        let outcome = service.delete_thread("test", &id, "wrong").await.unwrap();
        assert_eq!(outcome, DeleteOutcome::IncorrectPassword);

        // Thread is untouched
        let found = service.get_thread("test", &id).await.unwrap();
        assert_eq!(found.text, "Test thread");
    }

    #[tokio::test]
    async fn test_delete_thread_success() {
        let db = setup_db().await;
        let service = BoardService::new(&db);

        let thread = service
            .create_thread("test", "Test thread", "pass123")
            .await
            .unwrap();
        let id = thread.id.to_string();

        let outcome = service.delete_thread("test", &id, "pass123").await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);

        let err = service.get_thread("test", &id).await;
        assert!(matches!(err, Err(AnonboardError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_thread_masked() {
        let db = setup_db().await;
        let service = BoardService::new(&db);

        let outcome = service
            .delete_thread("test", &Uuid::new_v4().to_string(), "pw")
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::IncorrectPassword);
    }

    #[tokio::test]
    async fn test_delete_reply_redacts() {
        let db = setup_db().await;
        let service = BoardService::new(&db);

        let thread = service
            .create_thread("test", "Test thread", "pass123")
            .await
            .unwrap();
        let thread_id = thread.id.to_string();
        let updated = service
            .create_reply("test", &thread_id, "Test reply", "replypass")
            .await
            .unwrap();
        let reply = updated.replies[0].clone();
        let reply_id = reply.id.to_string();

        // Wrong password first
        let outcome = service
            .delete_reply("test", &thread_id, &reply_id, "wrong")
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::IncorrectPassword);
        let found = service.get_thread("test", &thread_id).await.unwrap();
        assert_eq!(found.replies[0].text, "Test reply");

        // Then the correct one
        let outcome = service
            .delete_reply("test", &thread_id, &reply_id, "replypass")
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);

        let found = service.get_thread("test", &thread_id).await.unwrap();
        assert_eq!(found.reply_count(), 1);
        assert_eq!(found.replies[0].text, REDACTED_TEXT);
        assert_eq!(found.replies[0].id, reply.id);
        assert_eq!(found.replies[0].created_on, reply.created_on);
    }

    #[tokio::test]
    async fn test_recent_threads_window() {
        let db = setup_db().await;
        let service = BoardService::new(&db);

        for i in 0..12 {
            service
                .create_thread("test", &format!("thread {i}"), "pw")
                .await
                .unwrap();
        }

        let threads = service.recent_threads("test").await.unwrap();
        assert_eq!(threads.len(), RECENT_THREADS_LIMIT as usize);
    }
}
