use crate::domain::model::Wallet;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence boundary. `save` upserts and returns the persisted
/// representation, which may carry a different id than the input when the
/// backend assigns its own.
#[async_trait]
pub trait WalletRepository: Send + Sync {
    async fn save(&self, wallet: &Wallet) -> Result<Wallet>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Wallet>>;
    async fn exists_by_owner_email(&self, owner_email: &str) -> Result<bool>;
}

/// External capability answering whether an owner may open a wallet.
#[async_trait]
pub trait RiskClient: Send + Sync {
    async fn is_blocked(&self, owner_email: &str) -> Result<bool>;
}

pub trait IdProvider: Send + Sync {
    fn generate(&self) -> String;
}
