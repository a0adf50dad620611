//! Top-3 ranking of assets by total gain.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::Asset;
use crate::constants::TOP_ASSETS_COUNT;

/// How ties between equal gains are broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RankingPolicy {
    /// A later asset must strictly beat the current leader to take first
    /// place, but displaces second or third on a tie. With two assets the
    /// earlier one keeps first place on a tie.
    #[default]
    Legacy,
    /// The later asset wins every tie, including first place.
    LatestWins,
}

impl RankingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingPolicy::Legacy => "legacy",
            RankingPolicy::LatestWins => "latest_wins",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "legacy" => Some(RankingPolicy::Legacy),
            "latest_wins" | "latest-wins" => Some(RankingPolicy::LatestWins),
            _ => None,
        }
    }

    /// Whether `challenger` takes first place from an asset with `leader` gain.
    fn takes_first(&self, challenger: Decimal, leader: Decimal) -> bool {
        match self {
            RankingPolicy::Legacy => challenger > leader,
            RankingPolicy::LatestWins => challenger >= leader,
        }
    }
}

/// Up to three assets with the highest total gain, best first, scanning
/// `assets` in insertion order.
///
/// Empty second and third places count as a zero gain, so an asset with a
/// non-negative gain always fills them.
pub fn top_assets(assets: &[Asset], policy: RankingPolicy) -> Vec<&Asset> {
    match assets {
        [] => Vec::new(),
        [only] => vec![only],
        [earlier, later] => {
            if policy.takes_first(later.total_gain(), earlier.total_gain()) {
                vec![later, earlier]
            } else {
                vec![earlier, later]
            }
        }
        [seed, rest @ ..] => {
            let mut first = seed;
            let mut second: Option<&Asset> = None;
            let mut third: Option<&Asset> = None;

            for candidate in rest {
                let gain = candidate.total_gain();
                if policy.takes_first(gain, first.total_gain()) {
                    third = second;
                    second = Some(first);
                    first = candidate;
                } else if gain >= gain_or_zero(second) {
                    third = second;
                    second = Some(candidate);
                } else if gain >= gain_or_zero(third) {
                    third = Some(candidate);
                }
            }

            let mut ranked = Vec::with_capacity(TOP_ASSETS_COUNT);
            ranked.push(first);
            ranked.extend(second);
            ranked.extend(third);
            ranked
        }
    }
}

fn gain_or_zero(slot: Option<&Asset>) -> Decimal {
    slot.map_or(Decimal::ZERO, Asset::total_gain)
}
