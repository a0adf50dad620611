//! Day-count simple interest and the quantization rules every figure goes through.
//!
//! Interest is never compounded. Each call rounds its own result to cents, so a
//! total built from several calls is a sum of rounded terms.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::constants::{DAYS_IN_YEAR, MONEY_DECIMAL_PLACES, RATE_DECIMAL_PLACES};

/// Converts a percentage rate (e.g. `5.09`) to the stored annual fraction (`0.0509`).
///
/// The fraction is kept to 4 decimal places with half-even rounding on the
/// midpoint (`2.125%` becomes `0.0212`).
pub fn quantize_rate(rate_percent: Decimal) -> Decimal {
    quantize_rate_fraction(rate_percent / dec!(100))
}

/// Re-quantizes an already-fractional rate, e.g. one read back from storage.
pub fn quantize_rate_fraction(rate: Decimal) -> Decimal {
    rate.round_dp_with_strategy(RATE_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
        .normalize()
}

/// Rounds a monetary amount to cents, half-up.
///
/// Midpoints move toward positive infinity, so `2.345` becomes `2.35` and
/// `-2.345` becomes `-2.34`.
pub fn round_half_up(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, strategy)
}

/// Interest earned by `amount` over `days` at `annual_rate`, rounded to cents.
///
/// `amount * (annual_rate / 365) * days`, evaluated as
/// `amount * annual_rate * days / 365` so the only inexact step is the final
/// division.
pub fn interest_return(annual_rate: Decimal, days: i64, amount: Decimal) -> Decimal {
    let accrued = amount * annual_rate * Decimal::from(days) / Decimal::from(DAYS_IN_YEAR);
    round_half_up(accrued)
}
