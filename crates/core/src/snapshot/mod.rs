//! Snapshot module - serializable account snapshots and the codec.

mod snapshot_codec;
mod snapshot_model;
mod snapshot_traits;


pub use snapshot_codec::*;
pub use snapshot_model::*;
pub use snapshot_traits::*;
