//! JSON file storage implementation for account snapshots.

mod repository;

pub use repository::JsonSnapshotRepository;
