//! Withdrawal domain model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::time_utils::days_between;

/// A partial withdrawal of principal from an asset.
///
/// Only the owning asset creates these (or the snapshot decoder, which
/// supplies the stored date). Once created a withdrawal never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    amount: Decimal,
    date: NaiveDate,
}

impl Withdrawal {
    pub(crate) fn new(amount: Decimal, date: NaiveDate) -> Self {
        Self { amount, date }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Days this tranche accrued interest, counted from the asset's invest date.
    pub fn days_accrued_since(&self, invest_date: NaiveDate) -> i64 {
        days_between(invest_date, self.date)
    }
}
