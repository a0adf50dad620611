//! JSON file storage implementation for Termfolio.
//!
//! Implements the snapshot repository trait defined in `termfolio-core` on top
//! of a single pretty-printed JSON file per account.
//!
//! ```text
//!   core (domain, codec)
//!          │
//!          ▼
//!   storage-json (this crate)
//!          │
//!          ▼
//!   data/account.json
//! ```

pub mod config;
pub mod errors;

// Repository implementations
pub mod snapshots;

pub use config::StoreConfig;
pub use errors::{IntoCore, StorageError};
pub use snapshots::JsonSnapshotRepository;

// Re-export from termfolio-core for convenience
pub use termfolio_core::errors::{Error, Result};
