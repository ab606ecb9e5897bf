use clap::Parser;
use std::time::Duration;
use wallet_service::adapters::{
    HttpRiskClient, JsonFileWalletRepository, StaticRiskClient, UuidIdProvider,
};
use wallet_service::config::TomlConfig;
use wallet_service::domain::ports::{IdProvider, RiskClient, WalletRepository};
use wallet_service::utils::{logger, validation::Validate};
use wallet_service::{CliConfig, WalletCommand, WalletService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting wallet-service CLI");

    if let Some(path) = config.config.clone() {
        match TomlConfig::from_file(&path) {
            Ok(file) => {
                if let Err(e) = file.validate() {
                    tracing::error!("❌ Config file validation failed: {}", e);
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
                config.apply_file(&file);
            }
            Err(e) => {
                tracing::error!("❌ Failed to load config file {}: {}", path, e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let repository = JsonFileWalletRepository::new(&config.data_path);
    let ids = UuidIdProvider;

    let outcome = match &config.risk_endpoint {
        Some(endpoint) => {
            let risk = HttpRiskClient::new(
                endpoint.clone(),
                Duration::from_secs(config.risk_timeout_seconds),
            )?;
            run_command(WalletService::new(repository, risk, ids), &config.command).await
        }
        None => {
            run_command(
                WalletService::new(repository, StaticRiskClient::default(), ids),
                &config.command,
            )
            .await
        }
    };

    match outcome {
        Ok(message) => {
            tracing::info!("✅ {}", message);
            println!("✅ {}", message);
        }
        Err(e) => {
            tracing::error!("❌ Operation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run_command<R, K, I>(
    service: WalletService<R, K, I>,
    command: &WalletCommand,
) -> wallet_service::Result<String>
where
    R: WalletRepository,
    K: RiskClient,
    I: IdProvider,
{
    match command {
        WalletCommand::Create {
            owner_email,
            initial_balance,
        } => {
            let summary = service.create_wallet(owner_email, *initial_balance).await?;
            Ok(format!(
                "Wallet created: id={}, balance={}",
                summary.wallet_id, summary.balance
            ))
        }
        WalletCommand::Deposit { wallet_id, amount } => {
            let balance = service.deposit(wallet_id, *amount).await?;
            Ok(format!(
                "Deposited {} into {}: new balance {}",
                amount, wallet_id, balance
            ))
        }
        WalletCommand::Withdraw { wallet_id, amount } => {
            let balance = service.withdraw(wallet_id, *amount).await?;
            Ok(format!(
                "Withdrew {} from {}: new balance {}",
                amount, wallet_id, balance
            ))
        }
    }
}
