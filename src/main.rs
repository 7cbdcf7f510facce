//! Conversation search server - main entry point
//!
//! Loads a JSON dataset of contacts, conversations and messages and serves
//! search over it through the Model Context Protocol on stdio.

use anyhow::Result;
use conversation_search::repositories::{Dataset, InMemoryStore, SnapshotSource};
use conversation_search::services::{SearchService, SearchServiceImpl};
use conversation_search::{Config, ConversationSearchServer, Metrics};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(std::env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string()))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let dataset = match Dataset::load_from_path(&config.data_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Failed to load dataset from {}: {}", config.data_path.display(), e);
            return Err(e.into());
        }
    };

    info!(
        contacts = dataset.contacts.len(),
        conversations = dataset.conversations.len(),
        messages = dataset.messages.len(),
        "Dataset loaded from {}",
        config.data_path.display()
    );

    let store = Arc::new(InMemoryStore::new(dataset, config.index_options())) as Arc<dyn SnapshotSource>;
    let service = Arc::new(SearchServiceImpl::new(store, Metrics::new())) as Arc<dyn SearchService>;
    let server = ConversationSearchServer::new(service);

    info!("Starting MCP server with stdio transport");
    conversation_search::server::run_server(server).await?;

    info!("Conversation search server shutdown complete");
    Ok(())
}
