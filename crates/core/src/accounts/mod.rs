//! Accounts module - domain models, ranking, services, and traits.

mod accounts_model;
mod accounts_ranking;
mod accounts_service;
mod accounts_traits;


// Re-export the public interface
pub use accounts_model::{Account, AccountSummary, AssetSummary, WithdrawalPreview};
pub use accounts_ranking::{top_assets, RankingPolicy};
pub use accounts_service::AccountService;
pub use accounts_traits::AccountServiceTrait;
