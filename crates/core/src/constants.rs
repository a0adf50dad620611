use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Day-count basis for converting an annual rate to a daily one
pub const DAYS_IN_YEAR: u32 = 365;

/// Decimal places kept for every monetary amount (interest, gains)
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Decimal places kept for a stored annual rate fraction (5.09% -> 0.0509)
pub const RATE_DECIMAL_PLACES: u32 = 4;

/// Number of assets reported by the ranking
pub const TOP_ASSETS_COUNT: usize = 3;

/// Default timezone used to derive "today" from the wall clock
pub const DEFAULT_VALUATION_TZ_NAME: &str = "America/Vancouver";

/// Largest principal an asset may hold. Keeps every interest product inside
/// `Decimal` range for any representable date span.
pub const MAX_PRINCIPAL: Decimal = dec!(1000000000000);

/// Largest annual rate accepted, in percent
pub const MAX_INTEREST_RATE_PERCENT: Decimal = dec!(1000);
