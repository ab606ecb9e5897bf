use crate::domain::model::Wallet;
use crate::domain::ports::WalletRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Volatile repository backend. Each operation takes the map lock, so
/// individual saves and lookups are atomic.
#[derive(Clone, Default)]
pub struct InMemoryWalletRepository {
    wallets: Arc<Mutex<HashMap<String, Wallet>>>,
}

impl InMemoryWalletRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalletRepository for InMemoryWalletRepository {
    async fn save(&self, wallet: &Wallet) -> Result<Wallet> {
        let mut wallets = self.wallets.lock().await;
        wallets.insert(wallet.id().to_string(), wallet.clone());
        Ok(wallet.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Wallet>> {
        let wallets = self.wallets.lock().await;
        Ok(wallets.get(id).cloned())
    }

    async fn exists_by_owner_email(&self, owner_email: &str) -> Result<bool> {
        let wallets = self.wallets.lock().await;
        Ok(wallets.values().any(|w| w.owner_email() == owner_email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_save_then_find_by_id() {
        let repo = InMemoryWalletRepository::new();
        let wallet = Wallet::new("w1", "user@example.com", Decimal::from(25));

        let saved = repo.save(&wallet).await.unwrap();
        assert_eq!(saved.id(), "w1");

        let found = repo.find_by_id("w1").await.unwrap().unwrap();
        assert_eq!(found.owner_email(), "user@example.com");
        assert_eq!(found.balance(), Decimal::from(25));
    }

    #[tokio::test]
    async fn test_find_missing_wallet_returns_none() {
        let repo = InMemoryWalletRepository::new();
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_entry() {
        let repo = InMemoryWalletRepository::new();
        repo.save(&Wallet::new("w1", "user@example.com", Decimal::from(10)))
            .await
            .unwrap();
        repo.save(&Wallet::new("w1", "user@example.com", Decimal::from(40)))
            .await
            .unwrap();

        let found = repo.find_by_id("w1").await.unwrap().unwrap();
        assert_eq!(found.balance(), Decimal::from(40));
    }

    #[tokio::test]
    async fn test_exists_by_owner_email() {
        let repo = InMemoryWalletRepository::new();
        repo.save(&Wallet::new("w1", "user@example.com", Decimal::ZERO))
            .await
            .unwrap();

        assert!(repo.exists_by_owner_email("user@example.com").await.unwrap());
        assert!(!repo.exists_by_owner_email("other@example.com").await.unwrap());
    }
}
