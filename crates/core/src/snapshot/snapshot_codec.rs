//! Mapping between an [`Account`] and its [`AccountSnapshot`].
//!
//! Only stored fields travel: derived values (`days_held`, `total_gain`,
//! `is_active`) are recomputed by [`Account::refresh`] after decoding.

use std::collections::HashSet;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::snapshot_model::{
    AccountSnapshot, AssetFeatures, AssetGroup, AssetGroupStatus, AssetRecord, WithdrawalRecord,
};
use crate::accounts::Account;
use crate::assets::{Asset, Withdrawal};
use crate::constants::{MAX_INTEREST_RATE_PERCENT, MAX_PRINCIPAL};
use crate::errors::{DecodeError, Error, Result};

/// Snapshot of `account` with its current assets first, then removed ones.
pub fn encode_account(account: &Account) -> AccountSnapshot {
    AccountSnapshot {
        account_name: account.name().to_string(),
        asset_groups: vec![
            AssetGroup {
                status: AssetGroupStatus::Current,
                assets: account.assets().iter().map(encode_asset).collect(),
            },
            AssetGroup {
                status: AssetGroupStatus::Removed,
                assets: account.removed_assets().iter().map(encode_asset).collect(),
            },
        ],
    }
}

/// Rebuilds an account from a snapshot.
///
/// Groups, assets and withdrawals keep their stored order. Fails without
/// returning a partial account if any record is invalid or two records share
/// a name.
pub fn decode_account(snapshot: AccountSnapshot) -> Result<Account> {
    let mut account = Account::new(snapshot.account_name);
    let mut seen = HashSet::new();

    for group in snapshot.asset_groups {
        for record in group.assets {
            if !seen.insert(record.name.clone()) {
                return Err(DecodeError::DuplicateAsset(record.name).into());
            }
            let asset = decode_asset(record)?;
            match group.status {
                AssetGroupStatus::Current => account.add_asset(asset),
                AssetGroupStatus::Removed => account.restore_removed(asset),
            }
        }
    }

    debug!(
        "Decoded account '{}' with {} current and {} removed assets",
        account.name(),
        account.num_assets(),
        account.removed_assets().len()
    );
    Ok(account)
}

/// Pretty-printed JSON for `account`.
pub fn encode_account_json(account: &Account) -> Result<String> {
    serde_json::to_string_pretty(&encode_account(account))
        .map_err(|e| Error::Unexpected(format!("Failed to serialize account: {}", e)))
}

/// Parses snapshot JSON and decodes it into an account.
pub fn decode_account_json(json: &str) -> Result<Account> {
    let snapshot: AccountSnapshot = serde_json::from_str(json).map_err(DecodeError::from)?;
    decode_account(snapshot)
}

fn encode_asset(asset: &Asset) -> AssetRecord {
    AssetRecord {
        name: asset.name().to_string(),
        features: AssetFeatures {
            interest_rate: asset.interest_rate(),
            term_to_maturity_days: asset.term_to_maturity_days(),
            invest_date: asset.invest_date(),
            principal: asset.principal(),
            withdrawals: asset
                .withdrawals()
                .iter()
                .map(|w| WithdrawalRecord {
                    date: w.date(),
                    amount: w.amount(),
                })
                .collect(),
        },
    }
}

fn decode_asset(record: AssetRecord) -> Result<Asset> {
    let AssetRecord { name, features } = record;
    let invalid = |reason: String| -> Error {
        DecodeError::InvalidRecord {
            name: name.clone(),
            reason,
        }
        .into()
    };

    if name.trim().is_empty() {
        return Err(invalid("empty name".to_string()));
    }
    if features.term_to_maturity_days == 0 {
        return Err(invalid("term to maturity must be positive".to_string()));
    }
    if features.interest_rate <= Decimal::ZERO {
        return Err(invalid(format!(
            "interest rate must be positive, got {}",
            features.interest_rate
        )));
    }
    if features.interest_rate > MAX_INTEREST_RATE_PERCENT / dec!(100) {
        return Err(invalid(format!(
            "interest rate {} exceeds {}%",
            features.interest_rate, MAX_INTEREST_RATE_PERCENT
        )));
    }
    if features.principal < Decimal::ZERO {
        return Err(invalid(format!("negative principal {}", features.principal)));
    }
    if features.principal > MAX_PRINCIPAL {
        return Err(invalid(format!(
            "principal {} exceeds {}",
            features.principal, MAX_PRINCIPAL
        )));
    }

    let mut withdrawals = Vec::with_capacity(features.withdrawals.len());
    for record in &features.withdrawals {
        if record.amount <= Decimal::ZERO || record.amount > MAX_PRINCIPAL {
            return Err(invalid(format!(
                "withdrawal amount must be in (0, {}], got {}",
                MAX_PRINCIPAL, record.amount
            )));
        }
        if record.date < features.invest_date {
            return Err(invalid(format!(
                "withdrawal on {} precedes invest date {}",
                record.date, features.invest_date
            )));
        }
        withdrawals.push(Withdrawal::new(record.amount, record.date));
    }

    Asset::restore(
        name.clone(),
        features.interest_rate,
        features.term_to_maturity_days,
        features.principal,
        features.invest_date,
        withdrawals,
    )
    .map_err(|e| invalid(e.to_string()))
}
