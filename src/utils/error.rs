use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("User blocked")]
    UserBlocked,

    #[error("Wallet already exists")]
    DuplicateWallet,

    #[error("Wallet not found")]
    WalletNotFound,

    #[error("Fondos insuficientes")]
    InsufficientFunds,

    #[error("Risk service request failed: {0}")]
    RiskServiceError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, WalletError>;
