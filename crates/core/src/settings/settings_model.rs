//! Engine settings.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::accounts::RankingPolicy;
use crate::errors::{Error, Result};
use crate::utils::time_utils::{default_timezone_name, parse_timezone};
use crate::utils::SystemClock;

/// Environment variable overriding [`EngineSettings::valuation_timezone`].
pub const TIMEZONE_ENV: &str = "TERMFOLIO_TIMEZONE";

/// Environment variable overriding [`EngineSettings::ranking_policy`].
pub const RANKING_POLICY_ENV: &str = "TERMFOLIO_RANKING_POLICY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSettings {
    /// IANA timezone used to turn the wall clock into "today".
    #[serde(default = "default_timezone_name")]
    pub valuation_timezone: String,
    #[serde(default)]
    pub ranking_policy: RankingPolicy,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            valuation_timezone: default_timezone_name(),
            ranking_policy: RankingPolicy::default(),
        }
    }
}

impl EngineSettings {
    /// Defaults, overridden by `TERMFOLIO_*` environment variables when set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineSettings::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(tz) = lookup(TIMEZONE_ENV).filter(|v| !v.trim().is_empty()) {
            settings.valuation_timezone = tz.trim().to_string();
        }
        if let Some(policy) = lookup(RANKING_POLICY_ENV).filter(|v| !v.trim().is_empty()) {
            settings.ranking_policy = RankingPolicy::parse(&policy).ok_or_else(|| {
                Error::invalid_input(format!(
                    "{} must be 'legacy' or 'latest_wins', got '{}'",
                    RANKING_POLICY_ENV, policy
                ))
            })?;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.timezone().map(|_| ())
    }

    pub fn timezone(&self) -> Result<Tz> {
        parse_timezone(&self.valuation_timezone).ok_or_else(|| {
            Error::invalid_input(format!(
                "Unknown timezone '{}'",
                self.valuation_timezone
            ))
        })
    }

    /// Wall clock in the configured timezone.
    pub fn clock(&self) -> Result<SystemClock> {
        Ok(SystemClock::new(self.timezone()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.valuation_timezone, "America/Vancouver");
        assert_eq!(settings.ranking_policy, RankingPolicy::Legacy);
        assert_eq!(settings.timezone().unwrap(), chrono_tz::America::Vancouver);
    }

    #[test]
    fn test_from_lookup_without_variables_uses_defaults() {
        let settings = EngineSettings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, EngineSettings::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let settings = EngineSettings::from_lookup(lookup_from(&[
            (TIMEZONE_ENV, "America/Toronto"),
            (RANKING_POLICY_ENV, "latest_wins"),
        ]))
        .unwrap();
        assert_eq!(settings.valuation_timezone, "America/Toronto");
        assert_eq!(settings.ranking_policy, RankingPolicy::LatestWins);
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        assert!(EngineSettings::from_lookup(lookup_from(&[(TIMEZONE_ENV, "Mars/Olympus")])).is_err());
        assert!(
            EngineSettings::from_lookup(lookup_from(&[(RANKING_POLICY_ENV, "random")])).is_err()
        );
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let settings: EngineSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, EngineSettings::default());

        let settings: EngineSettings =
            serde_json::from_str(r#"{"rankingPolicy": "latest_wins"}"#).unwrap();
        assert_eq!(settings.ranking_policy, RankingPolicy::LatestWins);
    }
}
