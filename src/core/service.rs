use crate::domain::model::{Wallet, WalletSummary};
use crate::domain::ports::{IdProvider, RiskClient, WalletRepository};
use crate::utils::error::{Result, WalletError};
use crate::utils::validation::{validate_amount, validate_initial_balance, validate_owner_email};
use rust_decimal::Decimal;

/// Sole entry point for wallet business operations. Orchestrates input
/// validation, the risk check, repository calls, and entity mutation.
///
/// Check order on creation is fixed: email format, initial balance, risk,
/// duplicate. No collaborator is called once an earlier check fails.
pub struct WalletService<R: WalletRepository, K: RiskClient, I: IdProvider> {
    repository: R,
    risk: K,
    ids: I,
}

impl<R: WalletRepository, K: RiskClient, I: IdProvider> WalletService<R, K, I> {
    pub fn new(repository: R, risk: K, ids: I) -> Self {
        Self {
            repository,
            risk,
            ids,
        }
    }

    pub async fn create_wallet(
        &self,
        owner_email: &str,
        initial_balance: Decimal,
    ) -> Result<WalletSummary> {
        validate_owner_email(owner_email)?;
        validate_initial_balance(initial_balance)?;

        tracing::debug!("Running risk check for {}", owner_email);
        if self.risk.is_blocked(owner_email).await? {
            return Err(WalletError::UserBlocked);
        }

        if self.repository.exists_by_owner_email(owner_email).await? {
            return Err(WalletError::DuplicateWallet);
        }

        let wallet = Wallet::new(self.ids.generate(), owner_email, initial_balance);
        // The backend may reassign the id; the summary reflects what was
        // actually persisted.
        let saved = self.repository.save(&wallet).await?;
        tracing::info!("Created wallet {} for {}", saved.id(), owner_email);

        Ok(WalletSummary {
            wallet_id: saved.id().to_string(),
            balance: saved.balance(),
        })
    }

    pub async fn deposit(&self, wallet_id: &str, amount: Decimal) -> Result<Decimal> {
        validate_amount(amount)?;

        let mut wallet = self
            .repository
            .find_by_id(wallet_id)
            .await?
            .ok_or(WalletError::WalletNotFound)?;

        wallet.deposit(amount)?;
        self.repository.save(&wallet).await?;

        tracing::debug!("Deposited {} into wallet {}", amount, wallet_id);
        Ok(wallet.balance())
    }

    pub async fn withdraw(&self, wallet_id: &str, amount: Decimal) -> Result<Decimal> {
        validate_amount(amount)?;

        let mut wallet = self
            .repository
            .find_by_id(wallet_id)
            .await?
            .ok_or(WalletError::WalletNotFound)?;

        // Funds sufficiency is the entity's call; nothing is persisted when
        // it refuses.
        wallet.withdraw(amount)?;
        self.repository.save(&wallet).await?;

        tracing::debug!("Withdrew {} from wallet {}", amount, wallet_id);
        Ok(wallet.balance())
    }
}
