//! # PAZA Wallet Terminal
//!
//! Entry point: logging, configuration, wallet core, then the input loop.

use lib_core::config::init_config;
use lib_evm::RpcWalletSdk;
use lib_wallet::PazaWallet;
use std::sync::Arc;
use terminal::{app::App, debug};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = debug::init();

    let config = match init_config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Configuration error");
            eprintln!("FATAL: {e}");
            return Err(e.into());
        }
    };
    info!(network = config.network.name(), "Starting PAZA wallet terminal");

    let sdk = RpcWalletSdk::from_config(config)?;
    let wallet = Arc::new(PazaWallet::new(Arc::new(sdk), config)?);
    let watcher = wallet.start();

    let result = App::new(wallet).run().await;
    watcher.abort();
    result
}
