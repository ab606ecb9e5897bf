pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, WalletCommand};

pub use crate::adapters::{
    HttpRiskClient, InMemoryWalletRepository, JsonFileWalletRepository, StaticRiskClient,
    UuidIdProvider,
};
pub use crate::core::service::WalletService;
pub use crate::domain::model::{Wallet, WalletSummary};
pub use crate::utils::error::{Result, WalletError};
