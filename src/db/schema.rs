//! Database schema and migrations for anonboard.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - threads and replies
    r#"
-- Threads table. A board is a namespace, not a row: the first thread
-- written under a board name creates that namespace implicitly.
CREATE TABLE threads (
    id              TEXT PRIMARY KEY,            -- UUID assigned at creation
    board           TEXT NOT NULL,
    text            TEXT NOT NULL,
    delete_password TEXT NOT NULL,               -- opaque per-thread secret
    created_on      TEXT NOT NULL,
    bumped_on       TEXT NOT NULL,               -- refreshed on every accepted reply
    reported        INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX idx_threads_board ON threads(board);
CREATE INDEX idx_threads_board_bumped ON threads(board, bumped_on);

-- Replies table. seq preserves append order within a thread; rows are
-- never deleted individually (reply deletion redacts text in place).
CREATE TABLE replies (
    seq             INTEGER PRIMARY KEY AUTOINCREMENT,
    id              TEXT NOT NULL UNIQUE,        -- UUID assigned at creation
    thread_id       TEXT NOT NULL REFERENCES threads(id) ON DELETE CASCADE,
    text            TEXT NOT NULL,
    delete_password TEXT NOT NULL,               -- opaque per-reply secret
    created_on      TEXT NOT NULL,
    reported        INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX idx_replies_thread_id ON replies(thread_id);
"#,
];
