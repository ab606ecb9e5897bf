use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based service configuration, loaded when the CLI is given
/// `--config`. Only deployment settings live here; business inputs always
/// come from the subcommand arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storage: StorageConfig,
    pub risk: Option<RiskConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("storage.data_path", &self.storage.data_path)?;

        if let Some(risk) = &self.risk {
            validate_url("risk.endpoint", &risk.endpoint)?;
            if let Some(timeout) = risk.timeout_seconds {
                validate_positive_number("risk.timeout_seconds", timeout, 1)?;
            }
        }

        Ok(())
    }
}
