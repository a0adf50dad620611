//! Asset domain models and the interest accrual engine.

use chrono::{Days, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::interest::{interest_return, quantize_rate, quantize_rate_fraction};
use super::withdrawal_model::Withdrawal;
use crate::constants::{MAX_INTEREST_RATE_PERCENT, MAX_PRINCIPAL};
use crate::errors::{Error, Result};
use crate::utils::time_utils::days_between;

/// Input model for creating a new asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub name: String,
    pub term_to_maturity_days: u32,
    /// Annual rate in percent, e.g. `5.09` for 5.09%.
    pub interest_rate_percent: Decimal,
    pub principal: Decimal,
    pub invest_date: NaiveDate,
}

impl NewAsset {
    /// Validates the new asset data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_input("Asset name cannot be empty"));
        }
        if self.term_to_maturity_days == 0 {
            return Err(Error::invalid_input(
                "Term to maturity must be at least one day",
            ));
        }
        if self.interest_rate_percent <= Decimal::ZERO {
            return Err(Error::invalid_input("Interest rate must be positive"));
        }
        if self.interest_rate_percent > MAX_INTEREST_RATE_PERCENT {
            return Err(Error::invalid_input(format!(
                "Interest rate cannot exceed {}%",
                MAX_INTEREST_RATE_PERCENT
            )));
        }
        if self.principal <= Decimal::ZERO {
            return Err(Error::invalid_input("Principal must be positive"));
        }
        if self.principal > MAX_PRINCIPAL {
            return Err(Error::invalid_input(format!(
                "Principal cannot exceed {}",
                MAX_PRINCIPAL
            )));
        }
        Ok(())
    }
}

/// A fixed-term, fixed-rate holding (bond, GIC, treasury bill).
///
/// `days_held`, `total_gain` and `is_active` are derived from the date passed
/// to the refresh operations; everything else is set at construction or by
/// withdrawals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    name: String,
    invest_date: NaiveDate,
    maturity_date: NaiveDate,
    principal: Decimal,
    term_to_maturity_days: u32,
    /// Annual rate as a fraction, 4 decimal places.
    interest_rate: Decimal,
    days_held: i64,
    total_gain: Decimal,
    is_active: bool,
    withdrawals: Vec<Withdrawal>,
}

impl Asset {
    /// Builds an active asset with no withdrawals, zero days held and zero gain.
    pub fn new(new_asset: NewAsset) -> Result<Self> {
        new_asset.validate()?;
        let maturity_date =
            maturity_for(new_asset.invest_date, new_asset.term_to_maturity_days)?;
        Ok(Self {
            name: new_asset.name,
            invest_date: new_asset.invest_date,
            maturity_date,
            principal: new_asset.principal,
            term_to_maturity_days: new_asset.term_to_maturity_days,
            interest_rate: quantize_rate(new_asset.interest_rate_percent),
            days_held: 0,
            total_gain: Decimal::ZERO,
            is_active: true,
            withdrawals: Vec::new(),
        })
    }

    /// Rebuilds an asset from stored fields. The principal is the amount still
    /// invested, so the withdrawals are attached without touching it.
    pub(crate) fn restore(
        name: String,
        interest_rate: Decimal,
        term_to_maturity_days: u32,
        principal: Decimal,
        invest_date: NaiveDate,
        withdrawals: Vec<Withdrawal>,
    ) -> Result<Self> {
        Ok(Self {
            maturity_date: maturity_for(invest_date, term_to_maturity_days)?,
            name,
            invest_date,
            principal,
            term_to_maturity_days,
            interest_rate: quantize_rate_fraction(interest_rate),
            days_held: 0,
            total_gain: Decimal::ZERO,
            is_active: true,
            withdrawals,
        })
    }

    /// Updates and returns the whole days between the invest date and `today`.
    ///
    /// Callers must not pass a date before the invest date; the result would
    /// be negative.
    pub fn calculate_days_held(&mut self, today: NaiveDate) -> i64 {
        self.days_held = days_between(self.invest_date, today);
        self.days_held
    }

    /// Interest the original principal earns over the full term, ignoring
    /// withdrawals. A reference figure, not the live gain.
    pub fn calculate_full_return(&self) -> Decimal {
        self.interest_return(self.term_days(), self.original_principal())
    }

    /// Always `invest_date + term_to_maturity_days`; every invest-date change
    /// recomputes it.
    pub fn calculate_maturity_date(&self) -> NaiveDate {
        self.maturity_date
    }

    /// Interest on `amount` over `days` at this asset's rate, rounded to cents.
    pub fn interest_return(&self, days: i64, amount: Decimal) -> Decimal {
        interest_return(self.interest_rate, days, amount)
    }

    /// Withdraws `amount` of principal on `today`.
    ///
    /// Requires an active asset and `0 < amount <= principal`. Withdrawing the
    /// entire principal deactivates the asset.
    pub fn withdraw_early(&mut self, amount: Decimal, today: NaiveDate) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::invalid_input(format!(
                "Withdrawal amount must be positive, got {}",
                amount
            )));
        }
        if !self.is_active {
            return Err(Error::ConstraintViolation(format!(
                "Asset '{}' is inactive and cannot be withdrawn from",
                self.name
            )));
        }
        if amount > self.principal {
            return Err(Error::ConstraintViolation(format!(
                "Insufficient principal in '{}': requested {}, available {}",
                self.name, amount, self.principal
            )));
        }

        self.withdrawals.push(Withdrawal::new(amount, today));
        self.principal -= amount;
        debug!(
            "Withdrew {} from '{}' on {}, remaining principal {}",
            amount, self.name, today, self.principal
        );
        if self.principal.is_zero() {
            self.deactivate();
        }
        Ok(())
    }

    /// Recomputes and returns the total gain as of `today`.
    ///
    /// The remaining principal earns interest up to `today`, or over the full
    /// term once expired. Each withdrawn tranche earns interest from the
    /// invest date to its own withdrawal date. Every term is rounded before
    /// the sum.
    pub fn refresh_total_gain(&mut self, today: NaiveDate) -> Decimal {
        let remaining = if self.is_expired(today) {
            self.interest_return(self.term_days(), self.principal)
        } else {
            let days = self.calculate_days_held(today);
            self.interest_return(days, self.principal)
        };
        let withdrawn: Decimal = self
            .withdrawals
            .iter()
            .map(|w| self.interest_return(w.days_accrued_since(self.invest_date), w.amount()))
            .sum();

        self.total_gain = remaining + withdrawn;
        self.total_gain
    }

    /// Interest forfeited by withdrawing `amount` on `today` instead of holding
    /// it to maturity. Zero on the maturity date itself.
    ///
    /// Requires an active asset and `0 < amount <= principal`.
    pub fn calculate_potential_loss(&self, amount: Decimal, today: NaiveDate) -> Result<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(Error::invalid_input(format!(
                "Amount must be positive, got {}",
                amount
            )));
        }
        if !self.is_active {
            return Err(Error::ConstraintViolation(format!(
                "Asset '{}' is inactive",
                self.name
            )));
        }
        if amount > self.principal {
            return Err(Error::ConstraintViolation(format!(
                "Insufficient principal in '{}': requested {}, available {}",
                self.name, amount, self.principal
            )));
        }
        let held = days_between(self.invest_date, today);
        Ok(self.interest_return(self.term_days(), amount) - self.interest_return(held, amount))
    }

    /// Deactivates the asset once expired or emptied. Never reactivates.
    pub fn refresh_status(&mut self, today: NaiveDate) {
        if self.is_expired(today) || self.principal.is_zero() {
            self.deactivate();
        }
    }

    /// True when `today` is strictly after the maturity date.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.maturity_date
    }

    /// Moves the invest date and the maturity date with it. Meant for
    /// construction and restore paths, not for rebalancing a live asset.
    pub fn set_invest_date(&mut self, invest_date: NaiveDate) -> Result<()> {
        self.maturity_date = maturity_for(invest_date, self.term_to_maturity_days)?;
        self.invest_date = invest_date;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Principal at construction: what is still invested plus every tranche withdrawn.
    pub fn original_principal(&self) -> Decimal {
        self.principal + self.withdrawn_total()
    }

    pub fn withdrawn_total(&self) -> Decimal {
        self.withdrawals.iter().map(Withdrawal::amount).sum()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn invest_date(&self) -> NaiveDate {
        self.invest_date
    }

    pub fn maturity_date(&self) -> NaiveDate {
        self.maturity_date
    }

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn term_to_maturity_days(&self) -> u32 {
        self.term_to_maturity_days
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    pub fn days_held(&self) -> i64 {
        self.days_held
    }

    pub fn total_gain(&self) -> Decimal {
        self.total_gain
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn withdrawals(&self) -> &[Withdrawal] {
        &self.withdrawals
    }

    fn term_days(&self) -> i64 {
        i64::from(self.term_to_maturity_days)
    }
}

fn maturity_for(invest_date: NaiveDate, term_to_maturity_days: u32) -> Result<NaiveDate> {
    invest_date
        .checked_add_days(Days::new(u64::from(term_to_maturity_days)))
        .ok_or_else(|| {
            Error::invalid_input(format!(
                "Maturity date out of range: {} + {} days",
                invest_date, term_to_maturity_days
            ))
        })
}
