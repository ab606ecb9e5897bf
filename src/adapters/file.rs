use crate::domain::model::Wallet;
use crate::domain::ports::WalletRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Durable repository backend keeping the whole wallet map in one JSON
/// document under the base directory. The lock serializes read-modify-write
/// cycles on the file so individual saves are atomic.
pub struct JsonFileWalletRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileWalletRepository {
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            path: base_path.as_ref().join("wallets.json"),
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<HashMap<String, Wallet>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let data = fs::read(&self.path)?;
        let wallets = serde_json::from_slice(&data)?;
        Ok(wallets)
    }

    fn store(&self, wallets: &HashMap<String, Wallet>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(wallets)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

#[async_trait]
impl WalletRepository for JsonFileWalletRepository {
    async fn save(&self, wallet: &Wallet) -> Result<Wallet> {
        let _guard = self.lock.lock().await;
        let mut wallets = self.load()?;
        wallets.insert(wallet.id().to_string(), wallet.clone());
        self.store(&wallets)?;
        tracing::debug!("Persisted wallet {} to {}", wallet.id(), self.path.display());
        Ok(wallet.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Wallet>> {
        let _guard = self.lock.lock().await;
        let wallets = self.load()?;
        Ok(wallets.get(id).cloned())
    }

    async fn exists_by_owner_email(&self, owner_email: &str) -> Result<bool> {
        let _guard = self.lock.lock().await;
        let wallets = self.load()?;
        Ok(wallets.values().any(|w| w.owner_email() == owner_email))
    }
}
