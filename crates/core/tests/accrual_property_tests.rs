//! Property-based integration tests for the accrual engine and ranking.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use termfolio_core::accounts::{top_assets, Account, RankingPolicy};
use termfolio_core::assets::{interest_return, Asset, NewAsset};
use termfolio_core::snapshot::{decode_account, encode_account};

// =============================================================================
// Generators
// =============================================================================

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

/// Parameters of a valid asset: (term days, rate in basis points, principal in
/// cents, invest date offset in days).
fn arb_asset_params() -> impl Strategy<Value = (u32, i64, i64, u64)> {
    (1u32..=3650, 1i64..=2000, 100i64..=10_000_000, 0u64..=2000)
}

fn build_asset(name: &str, params: (u32, i64, i64, u64)) -> Asset {
    let (term, rate_bp, principal_cents, offset) = params;
    Asset::new(NewAsset {
        name: name.to_string(),
        term_to_maturity_days: term,
        interest_rate_percent: Decimal::new(rate_bp, 2),
        principal: Decimal::new(principal_cents, 2),
        invest_date: base_date() + Days::new(offset),
    })
    .unwrap()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Property 1: Full return is interest on the original principal over the term**
    #[test]
    fn prop_full_return_matches_formula(params in arb_asset_params()) {
        let asset = build_asset("gic", params);
        let expected = interest_return(
            asset.interest_rate(),
            i64::from(asset.term_to_maturity_days()),
            asset.principal(),
        );
        prop_assert_eq!(asset.calculate_full_return(), expected);
    }

    /// **Property 2: Withdrawing everything deactivates, anything less does not**
    #[test]
    fn prop_full_withdrawal_deactivates(
        params in arb_asset_params(),
        fraction in 1i64..100,
    ) {
        let (term, _, _, _) = params;
        let mut partial = build_asset("partial", params);
        let mut full = partial.clone();
        let today = partial.invest_date() + Days::new(u64::from(term) / 2);

        let amount = (partial.principal() * Decimal::new(fraction, 2)).round_dp(2);
        prop_assume!(amount > Decimal::ZERO && amount < partial.principal());
        partial.withdraw_early(amount, today).unwrap();
        prop_assert!(partial.is_active());
        prop_assert_eq!(partial.original_principal(), full.principal());

        let everything = full.principal();
        full.withdraw_early(everything, today).unwrap();
        prop_assert!(!full.is_active());
        prop_assert_eq!(full.principal(), Decimal::ZERO);
    }

    /// **Property 3: Refreshing twice on the same date changes nothing**
    #[test]
    fn prop_refresh_is_idempotent(
        params in arb_asset_params(),
        elapsed in 0u64..=4000,
    ) {
        let mut account = Account::new("Cici");
        account.add_asset(build_asset("gic", params));
        let today = account.assets()[0].invest_date() + Days::new(elapsed);

        account.refresh(today);
        let once = account.clone();
        account.refresh(today);

        prop_assert_eq!(account, once);
    }

    /// **Property 4: Total gain stops growing once the asset has expired**
    #[test]
    fn prop_expired_gain_is_stable(
        params in arb_asset_params(),
        first in 1u64..=500,
        later in 1u64..=500,
    ) {
        let mut asset = build_asset("gic", params);
        let maturity = asset.maturity_date();

        let gain_then = asset.refresh_total_gain(maturity + Days::new(first));
        let gain_later = asset.refresh_total_gain(maturity + Days::new(first + later));

        prop_assert_eq!(gain_then, gain_later);
        prop_assert_eq!(gain_then, asset.calculate_full_return());
    }

    /// **Property 5: Potential loss shrinks every day until it reaches zero at maturity**
    #[test]
    fn prop_potential_loss_decreases_to_zero(
        params in (2u32..=3650, 100i64..=2000, 100_000i64..=10_000_000, 0u64..=2000),
        elapsed_fraction in 0u32..100,
    ) {
        let asset = build_asset("gic", params);
        let amount = asset.principal();
        let term = asset.term_to_maturity_days();
        let elapsed = u64::from(term.saturating_sub(1) * elapsed_fraction / 100);
        let today = asset.invest_date() + Days::new(elapsed);

        let loss_today = asset.calculate_potential_loss(amount, today).unwrap();
        let loss_tomorrow = asset
            .calculate_potential_loss(amount, today + Days::new(1))
            .unwrap();
        prop_assert!(loss_tomorrow < loss_today);

        let at_maturity = asset
            .calculate_potential_loss(amount, asset.maturity_date())
            .unwrap();
        prop_assert_eq!(at_maturity, Decimal::ZERO);
    }

    /// **Property 6: Top 3 holds the highest gains, best first, under either policy**
    #[test]
    fn prop_top_assets_are_highest_gains(
        principals in proptest::collection::vec(100i64..=1_000_000, 0..8),
        elapsed in 0u64..=400,
        latest_wins in any::<bool>(),
    ) {
        let policy = if latest_wins { RankingPolicy::LatestWins } else { RankingPolicy::Legacy };
        let mut account = Account::new("Cici");
        for (i, cents) in principals.iter().enumerate() {
            account.add_asset(build_asset(&format!("asset{}", i), (365, 500, *cents, 0)));
        }
        account.refresh(base_date() + Days::new(elapsed));

        let mut expected: Vec<Decimal> = account.assets().iter().map(Asset::total_gain).collect();
        expected.sort_by(|a, b| b.cmp(a));
        expected.truncate(3);

        let ranked: Vec<Decimal> = top_assets(account.assets(), policy)
            .into_iter()
            .map(Asset::total_gain)
            .collect();
        prop_assert_eq!(ranked, expected);
    }

    /// **Property 7: Decoding an encoded account reproduces it after a refresh**
    #[test]
    fn prop_snapshot_round_trip(
        params in proptest::collection::vec(arb_asset_params(), 1..5),
        withdraw_first in any::<bool>(),
        elapsed in 0u64..=4000,
    ) {
        let mut account = Account::new("Cici");
        for (i, p) in params.iter().enumerate() {
            account.add_asset(build_asset(&format!("asset{}", i), *p));
        }
        if withdraw_first {
            let first = &account.assets()[0];
            let (name, half, date) = (
                first.name().to_string(),
                (first.principal() / Decimal::TWO).round_dp(2),
                first.invest_date(),
            );
            if half > Decimal::ZERO {
                account.withdraw_early(&name, half, date).unwrap();
            }
        }
        let today = base_date() + Days::new(elapsed);
        account.refresh(today);

        let mut decoded = decode_account(encode_account(&account)).unwrap();
        decoded.refresh(today);

        prop_assert_eq!(decoded, account);
    }
}
