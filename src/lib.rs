//! anonboard - Anonymous Message Board API
//!
//! An anonymous message-board service: named boards hold threads, threads
//! hold ordered replies. Content is reported anonymously; deletion is
//! gated on a per-post shared secret (threads are removed, replies are
//! redacted in place).

pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{BoardService, DeleteOutcome, Reply, Thread, REDACTED_TEXT};
pub use config::Config;
pub use db::{Database, DbPool};
pub use error::{AnonboardError, Result};
pub use web::WebServer;
