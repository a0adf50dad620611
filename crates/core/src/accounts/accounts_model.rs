//! Account domain model: owns the active and removed assets.

use chrono::NaiveDate;
use log::{debug, info};
use rust_decimal::Decimal;
use serde::Serialize;

use super::accounts_ranking::{top_assets, RankingPolicy};
use crate::assets::Asset;
use crate::errors::{Error, Result};

/// A single holder's collection of fixed-term assets.
///
/// Active assets keep insertion order; removed assets keep removal order. An
/// asset lives in exactly one of the two lists, and every removed asset is
/// inactive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    name: String,
    assets: Vec<Asset>,
    removed_assets: Vec<Asset>,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assets: Vec::new(),
            removed_assets: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends an asset. Name uniqueness is the caller's responsibility.
    pub fn add_asset(&mut self, asset: Asset) {
        info!("{} added to account '{}'", asset.name(), self.name);
        self.assets.push(asset);
    }

    /// Moves the named asset to the removed list and deactivates it.
    ///
    /// Rejected while the asset is active and still holds principal; the
    /// account is left unchanged in that case.
    pub fn remove_asset(&mut self, name: &str) -> Result<()> {
        let index = self
            .assets
            .iter()
            .position(|a| a.name() == name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        let asset = &self.assets[index];
        if asset.is_active() && !asset.principal().is_zero() {
            return Err(Error::ConstraintViolation(format!(
                "Asset '{}' is active and has non-zero principal",
                name
            )));
        }

        let mut asset = self.assets.remove(index);
        asset.deactivate();
        info!("{} removed from account '{}'", asset.name(), self.name);
        self.removed_assets.push(asset);
        Ok(())
    }

    /// Places an already-removed asset at the end of the removed list.
    pub(crate) fn restore_removed(&mut self, mut asset: Asset) {
        asset.deactivate();
        self.removed_assets.push(asset);
    }

    /// Recomputes status, total gain and days held of every asset, active and
    /// removed, as of `today`. Calling it again with the same date changes nothing.
    pub fn refresh(&mut self, today: NaiveDate) {
        for asset in self.assets.iter_mut().chain(self.removed_assets.iter_mut()) {
            asset.refresh_status(today);
            asset.refresh_total_gain(today);
            asset.calculate_days_held(today);
        }
        debug!(
            "Refreshed account '{}' as of {}: {} active, {} removed",
            self.name,
            today,
            self.assets.len(),
            self.removed_assets.len()
        );
    }

    /// Withdraws from the named active-list asset.
    pub fn withdraw_early(&mut self, name: &str, amount: Decimal, today: NaiveDate) -> Result<()> {
        self.asset_mut(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?
            .withdraw_early(amount, today)
    }

    /// Sum of total gain over active and removed assets.
    pub fn total_gain(&self) -> Decimal {
        self.assets
            .iter()
            .chain(self.removed_assets.iter())
            .map(Asset::total_gain)
            .sum()
    }

    /// Top three assets of the active list by total gain, using
    /// [`RankingPolicy::Legacy`] tie-breaking.
    pub fn top3_assets(&self) -> Vec<&Asset> {
        self.top3_assets_with(RankingPolicy::Legacy)
    }

    pub fn top3_assets_with(&self, policy: RankingPolicy) -> Vec<&Asset> {
        top_assets(&self.assets, policy)
    }

    pub fn top3_asset_names(&self) -> Vec<String> {
        self.top3_assets()
            .into_iter()
            .map(|a| a.name().to_string())
            .collect()
    }

    /// Number of assets in the active list, including ones that have expired
    /// but were not removed.
    pub fn num_assets(&self) -> usize {
        self.assets.len()
    }

    pub fn num_active_assets(&self) -> usize {
        self.assets.iter().filter(|a| a.is_active()).count()
    }

    /// Assets in insertion order.
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Removed assets in removal order.
    pub fn removed_assets(&self) -> &[Asset] {
        &self.removed_assets
    }

    pub fn removed_asset_names(&self) -> Vec<String> {
        self.removed_assets
            .iter()
            .map(|a| a.name().to_string())
            .collect()
    }

    /// Looks the name up in the active list only.
    pub fn asset(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.name() == name)
    }

    /// True if the name is taken by an active or a removed asset.
    pub fn contains_asset(&self, name: &str) -> bool {
        self.assets
            .iter()
            .chain(self.removed_assets.iter())
            .any(|a| a.name() == name)
    }

    pub(crate) fn asset_mut(&mut self, name: &str) -> Option<&mut Asset> {
        self.assets.iter_mut().find(|a| a.name() == name)
    }
}

/// Read-only view of one asset as of a date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
    pub name: String,
    pub as_of: NaiveDate,
    pub total_gain: Decimal,
    /// Interest the original principal earns over the full term.
    pub full_return: Decimal,
    pub days_held: i64,
    pub term_to_maturity_days: u32,
    pub maturity_date: NaiveDate,
    pub principal: Decimal,
    pub interest_rate: Decimal,
    pub is_active: bool,
    pub withdrawal_count: usize,
}

impl AssetSummary {
    pub fn from_asset(asset: &Asset, as_of: NaiveDate) -> Self {
        Self {
            name: asset.name().to_string(),
            as_of,
            total_gain: asset.total_gain(),
            full_return: asset.calculate_full_return(),
            days_held: asset.days_held(),
            term_to_maturity_days: asset.term_to_maturity_days(),
            maturity_date: asset.maturity_date(),
            principal: asset.principal(),
            interest_rate: asset.interest_rate(),
            is_active: asset.is_active(),
            withdrawal_count: asset.withdrawals().len(),
        }
    }
}

/// Read-only view of the whole account as of a date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub account_name: String,
    pub as_of: NaiveDate,
    pub num_assets: usize,
    pub num_active_assets: usize,
    pub total_gain: Decimal,
    /// Names of the best performers, best first.
    pub top_assets: Vec<String>,
    /// Names of removed assets in removal order.
    pub removed_assets: Vec<String>,
}

/// What a withdrawal would cost, computed without performing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalPreview {
    pub asset_name: String,
    pub amount: Decimal,
    /// Interest forfeited by withdrawing today instead of at maturity.
    pub potential_loss: Decimal,
    pub maturity_date: NaiveDate,
    pub remaining_principal: Decimal,
}
