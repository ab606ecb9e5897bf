use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Parser)]
#[command(name = "wallet-service")]
#[command(about = "Wallet account management: create, deposit, withdraw")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: WalletCommand,

    #[arg(long, default_value = "./wallets")]
    pub data_path: String,

    #[arg(
        long,
        help = "Risk service base URL; owners are never blocked when unset"
    )]
    pub risk_endpoint: Option<String>,

    #[arg(long, default_value = "5")]
    pub risk_timeout_seconds: u64,

    #[arg(long, help = "TOML file supplying storage and risk settings")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum WalletCommand {
    /// Open a wallet for an owner email
    Create {
        #[arg(long)]
        owner_email: String,

        #[arg(long, default_value = "0")]
        initial_balance: Decimal,
    },
    /// Add funds to an existing wallet
    Deposit {
        #[arg(long)]
        wallet_id: String,

        #[arg(long)]
        amount: Decimal,
    },
    /// Take funds out of an existing wallet
    Withdraw {
        #[arg(long)]
        wallet_id: String,

        #[arg(long)]
        amount: Decimal,
    },
}

impl CliConfig {
    /// Overlay settings from a config file; file values win for the
    /// deployment settings it carries.
    pub fn apply_file(&mut self, file: &TomlConfig) {
        self.data_path = file.storage.data_path.clone();
        if let Some(risk) = &file.risk {
            self.risk_endpoint = Some(risk.endpoint.clone());
            if let Some(timeout) = risk.timeout_seconds {
                self.risk_timeout_seconds = timeout;
            }
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_path", &self.data_path)?;
        validate_positive_number("risk_timeout_seconds", self.risk_timeout_seconds, 1)?;

        if let Some(endpoint) = &self.risk_endpoint {
            validate_url("risk_endpoint", endpoint)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(args: &[&str]) -> CliConfig {
        let mut full = vec!["wallet-service"];
        full.extend_from_slice(args);
        CliConfig::parse_from(full)
    }

    #[test]
    fn test_create_command_parses_decimal_balance() {
        let config = config_for(&[
            "create",
            "--owner-email",
            "user@example.com",
            "--initial-balance",
            "100.50",
        ]);

        match config.command {
            WalletCommand::Create {
                ref owner_email,
                initial_balance,
            } => {
                assert_eq!(owner_email, "user@example.com");
                assert_eq!(initial_balance, "100.50".parse::<Decimal>().unwrap());
            }
            _ => panic!("expected create command"),
        }
        assert_eq!(config.data_path, "./wallets");
    }

    #[test]
    fn test_validate_rejects_bad_risk_endpoint() {
        let mut config = config_for(&["deposit", "--wallet-id", "w1", "--amount", "10"]);
        config.risk_endpoint = Some("not-a-url".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_file_overrides_deployment_settings() {
        let mut config = config_for(&["withdraw", "--wallet-id", "w1", "--amount", "10"]);
        let file: TomlConfig = toml::from_str(
            r#"
            [storage]
            data_path = "/srv/wallets"

            [risk]
            endpoint = "https://risk.internal/check"
            timeout_seconds = 2
            "#,
        )
        .unwrap();

        config.apply_file(&file);

        assert_eq!(config.data_path, "/srv/wallets");
        assert_eq!(
            config.risk_endpoint.as_deref(),
            Some("https://risk.internal/check")
        );
        assert_eq!(config.risk_timeout_seconds, 2);
        assert!(config.validate().is_ok());
    }
}
