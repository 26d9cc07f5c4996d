//! Board module for anonboard.
//!
//! This module provides the message-board domain:
//! - Thread and reply models with their lifecycle rules
//! - Board name validation (boards are implicit namespaces)
//! - Storage operations over SQLite
//! - The service enforcing creation, bumping, reporting and
//!   password-gated deletion/redaction

mod name;
mod service;
mod thread;
mod thread_repository;

pub use name::{validate_board_name, MAX_BOARD_NAME_LENGTH};
pub use service::{BoardService, DeleteOutcome, RECENT_THREADS_LIMIT};
pub use thread::{Reply, Thread, REDACTED_TEXT};
pub use thread_repository::ThreadRepository;
