//! Serializable snapshot of an account.
//!
//! Field names match the account files already on disk, hence the mix of
//! snake_case and camelCase keys. Every field is required.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    #[serde(rename = "user_name")]
    pub account_name: String,
    #[serde(rename = "accounts")]
    pub asset_groups: Vec<AssetGroup>,
}

/// Which list of the account a group of assets belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetGroupStatus {
    Current,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetGroup {
    pub status: AssetGroupStatus,
    pub assets: Vec<AssetRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub name: String,
    pub features: AssetFeatures,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFeatures {
    /// Annual rate as a fraction, 4 decimal places.
    pub interest_rate: Decimal,
    #[serde(rename = "termToMaturity")]
    pub term_to_maturity_days: u32,
    pub invest_date: NaiveDate,
    /// Principal still invested at encode time.
    pub principal: Decimal,
    #[serde(rename = "withdrawList")]
    pub withdrawals: Vec<WithdrawalRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalRecord {
    pub date: NaiveDate,
    pub amount: Decimal,
}
