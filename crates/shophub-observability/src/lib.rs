//! Observability for a ShopHub shopping session.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every log line of one session
//! - `StructuredLogger` - Structured logging with session and view context
//! - `LogSink` - Where entries go: stderr, an in-memory buffer, or nowhere

mod logging;
mod session;

pub use logging::*;
pub use session::SessionId;
