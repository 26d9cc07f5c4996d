//! Thread repository for anonboard.
//!
//! This module provides storage operations for threads and their replies.
//! Mutations that must be atomic (reply append plus bump, password-checked
//! deletion and redaction) run inside a single transaction.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::thread::{Reply, Thread, REDACTED_TEXT};
use crate::db::DbPool;
use crate::{AnonboardError, Result};

/// Repository for thread and reply storage operations.
pub struct ThreadRepository<'a> {
    pool: &'a DbPool,
}

/// Row shape for the threads table.
#[derive(Debug, sqlx::FromRow)]
struct ThreadRow {
    id: String,
    board: String,
    text: String,
    delete_password: String,
    created_on: DateTime<Utc>,
    bumped_on: DateTime<Utc>,
    reported: bool,
}

impl ThreadRow {
    fn into_thread(self, replies: Vec<Reply>) -> Result<Thread> {
        Ok(Thread {
            id: parse_stored_id(&self.id)?,
            board: self.board,
            text: self.text,
            delete_password: self.delete_password,
            created_on: self.created_on,
            bumped_on: self.bumped_on,
            reported: self.reported,
            replies,
        })
    }
}

/// Row shape for the replies table.
#[derive(Debug, sqlx::FromRow)]
struct ReplyRow {
    id: String,
    text: String,
    delete_password: String,
    created_on: DateTime<Utc>,
    reported: bool,
}

impl ReplyRow {
    fn into_reply(self) -> Result<Reply> {
        Ok(Reply {
            id: parse_stored_id(&self.id)?,
            text: self.text,
            delete_password: self.delete_password,
            created_on: self.created_on,
            reported: self.reported,
        })
    }
}

fn parse_stored_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|e| AnonboardError::Database(format!("corrupt stored id: {e}")))
}

impl<'a> ThreadRepository<'a> {
    /// Create a new ThreadRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a freshly created thread.
    pub async fn insert(&self, thread: &Thread) -> Result<()> {
        sqlx::query(
            "INSERT INTO threads (id, board, text, delete_password, created_on, bumped_on, reported)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(thread.id.to_string())
        .bind(&thread.board)
        .bind(&thread.text)
        .bind(&thread.delete_password)
        .bind(thread.created_on)
        .bind(thread.bumped_on)
        .bind(thread.reported)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Get a thread by ID within a board, with its replies in append order.
    pub async fn get_by_id(&self, board: &str, id: Uuid) -> Result<Option<Thread>> {
        let row: Option<ThreadRow> = sqlx::query_as(
            "SELECT id, board, text, delete_password, created_on, bumped_on, reported
             FROM threads WHERE id = ? AND board = ?",
        )
        .bind(id.to_string())
        .bind(board)
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some(row) => {
                let replies = self.replies_for(id).await?;
                Ok(Some(row.into_thread(replies)?))
            }
            None => Ok(None),
        }
    }

    /// List the most recently bumped threads on a board, newest first,
    /// each with its replies in append order.
    pub async fn list_recent(&self, board: &str, limit: i64) -> Result<Vec<Thread>> {
        let rows: Vec<ThreadRow> = sqlx::query_as(
            "SELECT id, board, text, delete_password, created_on, bumped_on, reported
             FROM threads WHERE board = ? ORDER BY bumped_on DESC, rowid DESC LIMIT ?",
        )
        .bind(board)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        let mut threads = Vec::with_capacity(rows.len());
        for row in rows {
            let id = parse_stored_id(&row.id)?;
            let replies = self.replies_for(id).await?;
            threads.push(row.into_thread(replies)?);
        }

        Ok(threads)
    }

    /// Append a reply to a thread and bump the thread, as a single unit.
    ///
    /// The thread's `bumped_on` is set to the reply's `created_on`; no
    /// observer sees the bump without the reply or vice versa. Returns the
    /// updated thread, or None if the thread does not exist on the board.
    pub async fn append_reply(
        &self,
        board: &str,
        thread_id: Uuid,
        reply: &Reply,
    ) -> Result<Option<Thread>> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<String> =
            sqlx::query_scalar("SELECT id FROM threads WHERE id = ? AND board = ?")
                .bind(thread_id.to_string())
                .bind(board)
                .fetch_optional(&mut *tx)
                .await?;

        if exists.is_none() {
            return Ok(None);
        }

        sqlx::query(
            "INSERT INTO replies (id, thread_id, text, delete_password, created_on, reported)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(reply.id.to_string())
        .bind(thread_id.to_string())
        .bind(&reply.text)
        .bind(&reply.delete_password)
        .bind(reply.created_on)
        .bind(reply.reported)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE threads SET bumped_on = ? WHERE id = ?")
            .bind(reply.created_on)
            .bind(thread_id.to_string())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.get_by_id(board, thread_id).await
    }

    /// Flag a thread as reported.
    ///
    /// Returns false when no thread matched; the caller treats a miss as a
    /// no-op rather than an error.
    pub async fn set_thread_reported(&self, board: &str, thread_id: Uuid) -> Result<bool> {
        let result = sqlx::query("UPDATE threads SET reported = 1 WHERE id = ? AND board = ?")
            .bind(thread_id.to_string())
            .bind(board)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Flag a reply as reported.
    ///
    /// Returns false when no reply matched; a miss is a no-op.
    pub async fn set_reply_reported(
        &self,
        board: &str,
        thread_id: Uuid,
        reply_id: Uuid,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE replies SET reported = 1
             WHERE id = ? AND thread_id IN (SELECT id FROM threads WHERE id = ? AND board = ?)",
        )
        .bind(reply_id.to_string())
        .bind(thread_id.to_string())
        .bind(board)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a thread (and, by cascade, its replies) if the password
    /// matches.
    ///
    /// The lookup, comparison and delete run in one transaction. Returns
    /// true on removal; false covers both a missing thread and a password
    /// mismatch so callers cannot distinguish the two.
    pub async fn delete_thread_checked(
        &self,
        board: &str,
        thread_id: Uuid,
        delete_password: &str,
    ) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let stored: Option<String> =
            sqlx::query_scalar("SELECT delete_password FROM threads WHERE id = ? AND board = ?")
                .bind(thread_id.to_string())
                .bind(board)
                .fetch_optional(&mut *tx)
                .await?;

        match stored {
            Some(stored) if stored == delete_password => {
                sqlx::query("DELETE FROM threads WHERE id = ?")
                    .bind(thread_id.to_string())
                    .execute(&mut *tx)
                    .await?;
                tx.commit().await?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Redact a reply's text if the password matches.
    ///
    /// The reply row is kept: id, timestamps, reported state and position
    /// are untouched, only the text becomes the redaction sentinel. Returns
    /// true on redaction; false covers missing thread, missing reply and
    /// password mismatch alike.
    pub async fn redact_reply_checked(
        &self,
        board: &str,
        thread_id: Uuid,
        reply_id: Uuid,
        delete_password: &str,
    ) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let stored: Option<String> = sqlx::query_scalar(
            "SELECT r.delete_password FROM replies r
             INNER JOIN threads t ON t.id = r.thread_id
             WHERE r.id = ? AND t.id = ? AND t.board = ?",
        )
        .bind(reply_id.to_string())
        .bind(thread_id.to_string())
        .bind(board)
        .fetch_optional(&mut *tx)
        .await?;

        match stored {
            Some(stored) if stored == delete_password => {
                sqlx::query("UPDATE replies SET text = ? WHERE id = ?")
                    .bind(REDACTED_TEXT)
                    .bind(reply_id.to_string())
                    .execute(&mut *tx)
                    .await?;
                tx.commit().await?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Fetch the replies of a thread in append order.
    async fn replies_for(&self, thread_id: Uuid) -> Result<Vec<Reply>> {
        let rows: Vec<ReplyRow> = sqlx::query_as(
            "SELECT id, text, delete_password, created_on, reported
             FROM replies WHERE thread_id = ? ORDER BY seq",
        )
        .bind(thread_id.to_string())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(ReplyRow::into_reply).collect()
    }
}
