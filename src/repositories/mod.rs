mod memory_store;
mod traits;

pub use memory_store::{Dataset, InMemoryStore, MemorySnapshot};
pub use traits::{ContactDirectory, ConversationStore, MessageIndex, ReadSnapshot, SnapshotSource};
