pub mod service;

pub use crate::domain::model::{Wallet, WalletSummary};
pub use crate::domain::ports::{IdProvider, RiskClient, WalletRepository};
pub use crate::utils::error::Result;
