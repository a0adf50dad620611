//! Termfolio Core - fixed-term asset tracking engine.
//!
//! Domain models for assets and accounts, the interest accrual engine, the
//! snapshot codec, and the traits storage crates implement. Every operation
//! that depends on the calendar takes "today" as an argument; only the
//! service layer reads a [`utils::Clock`].

pub mod accounts;
pub mod assets;
pub mod constants;
pub mod errors;
pub mod events;
pub mod settings;
pub mod snapshot;
pub mod utils;

// Re-export the types most callers need
pub use accounts::{Account, AccountService, AccountServiceTrait, RankingPolicy};
pub use assets::{Asset, NewAsset, Withdrawal};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
