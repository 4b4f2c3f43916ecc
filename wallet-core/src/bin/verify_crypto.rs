// wallet-core/src/bin/verify_crypto.rs
//
// End-to-end check of the derivation stack: generate, unlock, derive, validate.

use anyhow::{Context, Result};
use clap::Parser;
use hd_wallet_core::api::self_check;
use hd_wallet_core::{CoreConfig, Vault};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "verify-crypto", about = "Run the wallet core self check")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of accounts to derive, overrides `initial_accounts`
    #[arg(long)]
    accounts: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CoreConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CoreConfig::default(),
    };
    if let Some(n) = args.accounts {
        config.initial_accounts = n;
        config.validate().context("invalid --accounts")?;
    }

    init_logging(&config.log_filter)?;
    if let Some(path) = &args.config {
        info!(path = %path.display(), word_count = usize::from(config.word_count), "loaded configuration");
    }

    let vault = Vault::new(config);
    let report = self_check(&vault).context("self check failed")?;
    vault.lock();

    println!("mnemonic generation: ok ({} words)", report.word_count);
    println!("vault unlock:        ok");
    println!("{:<8} {:<44} {}", "index", "solana", "ethereum");
    for account in &report.accounts {
        println!(
            "{:<8} {:<44} {}",
            account.index, account.sol_address, account.eth_address
        );
    }
    println!("ALL CHECKS PASSED");

    Ok(())
}

fn init_logging(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .context("invalid log filter")?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
