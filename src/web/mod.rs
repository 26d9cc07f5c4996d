//! Web API module for anonboard.
//!
//! This module provides the REST interface over the board service:
//! request/response DTOs, error mapping, handlers, routing and the
//! server itself.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
