mod mock_snapshot;

#[allow(unused_imports)]
pub use mock_snapshot::{hit, MockSnapshot, MockSnapshotSource};
