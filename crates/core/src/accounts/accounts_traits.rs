//! Account service trait.

use rust_decimal::Decimal;

use super::accounts_model::{AccountSummary, AssetSummary, WithdrawalPreview};
use crate::assets::{Asset, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for account service operations.
///
/// The service plays the owning application: it enforces name uniqueness,
/// supplies "today" to the engine and hands snapshots to storage.
pub trait AccountServiceTrait: Send + Sync {
    fn account_name(&self) -> Result<String>;

    /// Creates an asset and appends it to the account.
    ///
    /// The name must not be used by any active or removed asset.
    fn create_asset(&self, new_asset: NewAsset) -> Result<AssetSummary>;

    /// Removes an asset that has expired or been fully withdrawn.
    fn remove_asset(&self, name: &str) -> Result<()>;

    /// Potential interest loss of withdrawing `amount` today. Mutates nothing.
    fn preview_withdrawal(&self, name: &str, amount: Decimal) -> Result<WithdrawalPreview>;

    /// Withdraws `amount` of principal today.
    fn withdraw(&self, name: &str, amount: Decimal) -> Result<AssetSummary>;

    /// Refreshed summary of one asset in the active list.
    fn asset_summary(&self, name: &str) -> Result<AssetSummary>;

    /// Refreshes every asset and summarizes the account.
    fn account_summary(&self) -> Result<AccountSummary>;

    /// Copy of the active list in insertion order.
    fn list_assets(&self) -> Result<Vec<Asset>>;

    /// Copy of the removed list in removal order.
    fn list_removed_assets(&self) -> Result<Vec<Asset>>;

    /// Writes the account snapshot to storage.
    fn save(&self) -> Result<()>;
}
