//! Cluster snapshots read from disk.
//!
//! - [`cache`] - reading a snapshot JSON file

mod cache;

pub use cache::{read_snapshot, Snapshot};
