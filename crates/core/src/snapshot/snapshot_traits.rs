//! Persistence contract for account snapshots.
//!
//! The trait is storage-agnostic: the JSON file implementation lives in the
//! storage crate, and tests use in-memory doubles.

use super::snapshot_model::AccountSnapshot;
use crate::errors::Result;

/// Trait defining the contract for snapshot persistence.
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Reads the stored snapshot.
    ///
    /// A missing snapshot is `StorageError::NotFound`; unreadable content is a
    /// `DecodeError`. The two must stay distinguishable.
    fn load(&self) -> Result<AccountSnapshot>;

    /// Replaces the stored snapshot as a whole.
    fn save(&self, snapshot: &AccountSnapshot) -> Result<()>;

    /// Whether a snapshot is currently stored.
    fn exists(&self) -> bool;
}
