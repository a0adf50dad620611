use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::accounts_model::{Account, AccountSummary, AssetSummary, WithdrawalPreview};
use super::accounts_traits::AccountServiceTrait;
use crate::assets::{Asset, NewAsset};
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink};
use crate::settings::EngineSettings;
use crate::snapshot::{decode_account, encode_account, SnapshotRepositoryTrait};
use crate::utils::Clock;

/// Service owning one account and its storage.
pub struct AccountService {
    account: RwLock<Account>,
    repository: Arc<dyn SnapshotRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
    clock: Arc<dyn Clock>,
    settings: EngineSettings,
}

impl AccountService {
    /// Creates a service around an existing in-memory account.
    pub fn new(
        account: Account,
        repository: Arc<dyn SnapshotRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
        clock: Arc<dyn Clock>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            account: RwLock::new(account),
            repository,
            event_sink,
            clock,
            settings,
        }
    }

    /// Loads the stored account and refreshes it as of today.
    pub fn load(
        repository: Arc<dyn SnapshotRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
        clock: Arc<dyn Clock>,
        settings: EngineSettings,
    ) -> Result<Self> {
        let snapshot = repository.load()?;
        let mut account = decode_account(snapshot)?;
        let today = clock.today();
        account.refresh(today);
        info!(
            "Loaded account '{}' with {} assets as of {}",
            account.name(),
            account.num_assets(),
            today
        );
        event_sink.emit(DomainEvent::account_loaded(account.name()));
        Ok(Self::new(account, repository, event_sink, clock, settings))
    }

    /// Loads the stored account, or starts an empty one named `account_name`
    /// when nothing has been stored yet.
    pub fn load_or_create(
        account_name: &str,
        repository: Arc<dyn SnapshotRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
        clock: Arc<dyn Clock>,
        settings: EngineSettings,
    ) -> Result<Self> {
        if repository.exists() {
            return Self::load(repository, event_sink, clock, settings);
        }
        if account_name.trim().is_empty() {
            return Err(Error::invalid_input("Account name cannot be empty"));
        }
        debug!("No stored account, starting '{}'", account_name);
        Ok(Self::new(
            Account::new(account_name),
            repository,
            event_sink,
            clock,
            settings,
        ))
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Account>> {
        self.account
            .read()
            .map_err(|_| Error::Unexpected("Account lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Account>> {
        self.account
            .write()
            .map_err(|_| Error::Unexpected("Account lock poisoned".to_string()))
    }
}

impl AccountServiceTrait for AccountService {
    fn account_name(&self) -> Result<String> {
        Ok(self.read()?.name().to_string())
    }

    fn create_asset(&self, new_asset: NewAsset) -> Result<AssetSummary> {
        let today = self.clock.today();
        new_asset.validate()?;
        if new_asset.invest_date > today {
            return Err(Error::invalid_input(format!(
                "Invest date {} is after today ({})",
                new_asset.invest_date, today
            )));
        }

        let mut account = self.write()?;
        if account.contains_asset(&new_asset.name) {
            return Err(Error::ConstraintViolation(format!(
                "Asset '{}' already exists",
                new_asset.name
            )));
        }

        let mut asset = Asset::new(new_asset)?;
        asset.refresh_status(today);
        asset.refresh_total_gain(today);
        asset.calculate_days_held(today);
        let summary = AssetSummary::from_asset(&asset, today);

        account.add_asset(asset);
        self.event_sink
            .emit(DomainEvent::asset_added(account.name(), &summary.name));
        Ok(summary)
    }

    fn remove_asset(&self, name: &str) -> Result<()> {
        let today = self.clock.today();
        let mut account = self.write()?;
        if let Some(asset) = account.asset_mut(name) {
            asset.refresh_status(today);
        } else if account.contains_asset(name) {
            return Err(Error::ConstraintViolation(format!(
                "Asset '{}' has already been removed",
                name
            )));
        } else {
            return Err(Error::NotFound(format!("Asset '{}'", name)));
        }

        account.remove_asset(name)?;
        self.event_sink
            .emit(DomainEvent::asset_removed(account.name(), name));
        Ok(())
    }

    fn preview_withdrawal(&self, name: &str, amount: Decimal) -> Result<WithdrawalPreview> {
        let today = self.clock.today();
        let account = self.read()?;
        let mut asset = account
            .asset(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Asset '{}'", name)))?;
        asset.refresh_status(today);

        if amount > asset.principal() {
            return Err(Error::ConstraintViolation(format!(
                "Insufficient principal in '{}': requested {}, available {}",
                name,
                amount,
                asset.principal()
            )));
        }
        let potential_loss = asset.calculate_potential_loss(amount, today)?;

        Ok(WithdrawalPreview {
            asset_name: name.to_string(),
            amount,
            potential_loss,
            maturity_date: asset.maturity_date(),
            remaining_principal: asset.principal() - amount,
        })
    }

    fn withdraw(&self, name: &str, amount: Decimal) -> Result<AssetSummary> {
        let today = self.clock.today();
        let mut account = self.write()?;
        let account_name = account.name().to_string();
        let asset = account
            .asset_mut(name)
            .ok_or_else(|| Error::NotFound(format!("Asset '{}'", name)))?;

        asset.refresh_status(today);
        asset.withdraw_early(amount, today)?;
        asset.refresh_total_gain(today);
        asset.calculate_days_held(today);
        if !asset.is_active() {
            info!("'{}' fully withdrawn and deactivated", name);
        }
        let summary = AssetSummary::from_asset(asset, today);

        self.event_sink.emit(DomainEvent::withdrawal_recorded(
            &account_name,
            name,
            amount,
            today,
        ));
        Ok(summary)
    }

    fn asset_summary(&self, name: &str) -> Result<AssetSummary> {
        let today = self.clock.today();
        let mut account = self.write()?;
        let asset = account
            .asset_mut(name)
            .ok_or_else(|| Error::NotFound(format!("Asset '{}'", name)))?;

        asset.refresh_total_gain(today);
        asset.refresh_status(today);
        asset.calculate_days_held(today);
        Ok(AssetSummary::from_asset(asset, today))
    }

    fn account_summary(&self) -> Result<AccountSummary> {
        let today = self.clock.today();
        let mut account = self.write()?;
        account.refresh(today);

        let top_assets = account
            .top3_assets_with(self.settings.ranking_policy)
            .into_iter()
            .map(|a| a.name().to_string())
            .collect();

        Ok(AccountSummary {
            account_name: account.name().to_string(),
            as_of: today,
            num_assets: account.num_assets(),
            num_active_assets: account.num_active_assets(),
            total_gain: account.total_gain(),
            top_assets,
            removed_assets: account.removed_asset_names(),
        })
    }

    fn list_assets(&self) -> Result<Vec<Asset>> {
        Ok(self.read()?.assets().to_vec())
    }

    fn list_removed_assets(&self) -> Result<Vec<Asset>> {
        Ok(self.read()?.removed_assets().to_vec())
    }

    fn save(&self) -> Result<()> {
        let account = self.read()?;
        let snapshot = encode_account(&account);
        if let Err(e) = self.repository.save(&snapshot) {
            warn!("Failed to save account '{}': {}", account.name(), e);
            return Err(e);
        }
        info!("Saved account '{}'", account.name());
        self.event_sink
            .emit(DomainEvent::account_saved(account.name()));
        Ok(())
    }
}
