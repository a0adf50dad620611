//! Domain event types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain events emitted by the account service after successful mutations.
///
/// These events represent facts about account changes. Hosts translate them
/// into whatever they need (an activity log, UI notifications, autosave).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// An asset was added to the account.
    AssetAdded {
        account_name: String,
        asset_name: String,
    },

    /// An asset was moved to the removed list.
    AssetRemoved {
        account_name: String,
        asset_name: String,
    },

    /// Principal was withdrawn from an asset before maturity.
    WithdrawalRecorded {
        account_name: String,
        asset_name: String,
        amount: Decimal,
        date: NaiveDate,
    },

    /// The account snapshot was written to storage.
    AccountSaved { account_name: String },

    /// The account was loaded from storage.
    AccountLoaded { account_name: String },
}

impl DomainEvent {
    pub fn asset_added(account_name: &str, asset_name: &str) -> Self {
        Self::AssetAdded {
            account_name: account_name.to_string(),
            asset_name: asset_name.to_string(),
        }
    }

    pub fn asset_removed(account_name: &str, asset_name: &str) -> Self {
        Self::AssetRemoved {
            account_name: account_name.to_string(),
            asset_name: asset_name.to_string(),
        }
    }

    pub fn withdrawal_recorded(
        account_name: &str,
        asset_name: &str,
        amount: Decimal,
        date: NaiveDate,
    ) -> Self {
        Self::WithdrawalRecorded {
            account_name: account_name.to_string(),
            asset_name: asset_name.to_string(),
            amount,
            date,
        }
    }

    pub fn account_saved(account_name: &str) -> Self {
        Self::AccountSaved {
            account_name: account_name.to_string(),
        }
    }

    pub fn account_loaded(account_name: &str) -> Self {
        Self::AccountLoaded {
            account_name: account_name.to_string(),
        }
    }
}
