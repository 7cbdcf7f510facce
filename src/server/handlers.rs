//! MCP tool handlers for the conversation search server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::services::SearchService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes conversation search tools.
#[derive(Clone)]
pub struct ConversationSearchServer {
    search_service: Arc<dyn SearchService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ConversationSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "conversation-search".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Searches a messaging address book and conversation history. Returns matching conversations, contacts without a conversation, and messages.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchConversationsParams {
    query: String,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

#[tool_router]
impl ConversationSearchServer {
    /// Create a new conversation search server.
    pub fn new(search_service: Arc<dyn SearchService>) -> Self {
        Self {
            search_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Search conversations, contacts and messages.
    #[tool(
        description = "Search conversations by participant name, phone number or group title, contacts without an existing conversation, and message bodies. All query words must match (prefix match). Message snippets mark matched words with <b> tags."
    )]
    async fn search_conversations(
        &self,
        params: Parameters<SearchConversationsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: search_conversations called");
        let params = params.0;

        let results = self
            .search_service
            .search(params.query)
            .await
            .map_err(to_mcp_error)?;

        tracing::debug!(
            conversations = results.conversation_count(),
            contacts = results.contact_count(),
            messages = results.message_count(),
            "search_conversations completed"
        );

        let json_response = serde_json::to_string_pretty(&results).map_err(to_mcp_error)?;
        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Report search counters.
    #[tool(description = "Report search counters: searches run, results returned, and records skipped as malformed")]
    async fn search_metrics(&self) -> Result<CallToolResult, McpError> {
        let summary = self.search_service.metrics();
        let json_response = serde_json::to_string_pretty(&summary).map_err(to_mcp_error)?;
        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }
}
