//! Application service layer.
//!
//! Services provide the async boundary between the MCP handlers and the
//! synchronous search core.

mod search_service;

pub use search_service::{SearchService, SearchServiceImpl};
