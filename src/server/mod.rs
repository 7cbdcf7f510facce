//! MCP server for conversation search.
//!
//! This module provides the MCP protocol server that exposes search to an
//! external client over stdio.

pub mod handlers;

pub use handlers::ConversationSearchServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once the
/// client disconnects.
///
/// # Returns
/// An error if the server fails to start or encounters a fatal error
pub async fn run_server(server: ConversationSearchServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
