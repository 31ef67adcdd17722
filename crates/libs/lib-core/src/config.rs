//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured: the
//! wallet cannot run without its API credential or contract addresses.
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust,no_run
//! use lib_core::config::{core_config, init_config};
//!
//! init_config().expect("configuration");
//! let network = core_config().network;
//! ```
//!
//! The config must be initialized once at application startup using [`init_config()`].

use crate::error::{AppError, Result};
use crate::network::Network;
use crate::registry::{parse_address, ContractRegistry};
use lib_utils::envs::{get_env, get_env_or, get_env_parse_or};
use std::sync::OnceLock;
use std::time::Duration;

/// Contract addresses as configured, parsed into a [`ContractRegistry`] on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractAddresses {
    pub paza_token: String,
    pub pusd_token: String,
    pub usdt_token: String,
    pub usdc_token: String,
    pub sale_contract: String,
}

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// API credential for the hosted RPC and wallet services
    pub client_id: String,

    /// Target chain (mainnet or testnet, never both)
    pub network: Network,

    /// Read RPC override; defaults to the hosted endpoint for `network`
    pub rpc_url: Option<String>,

    /// JSON-RPC endpoint of the external signer used for wallet connections and writes
    pub wallet_rpc_url: String,

    pub contracts: ContractAddresses,

    /// Upper bound on waiting for a transaction receipt.
    ///
    /// Valid range: 5-600 seconds
    pub confirmation_timeout_secs: u64,

    /// Delay before transient notices are cleared
    pub notice_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let client_id = get_env("PAZA_CLIENT_ID")
            .map_err(|_| AppError::Config("No client ID provided (PAZA_CLIENT_ID)".to_string()))?;

        let network = get_env_or("PAZA_NETWORK", "mainnet")
            .parse::<Network>()
            .map_err(AppError::Config)?;

        let contracts = ContractAddresses {
            paza_token: get_env("PAZA_TOKEN_ADDRESS")?,
            pusd_token: get_env("PUSD_TOKEN_ADDRESS")?,
            usdt_token: get_env("USDT_TOKEN_ADDRESS")?,
            usdc_token: get_env("USDC_TOKEN_ADDRESS")?,
            sale_contract: get_env("SALE_CONTRACT_ADDRESS")?,
        };

        Ok(Self {
            client_id,
            network,
            rpc_url: get_env("PAZA_RPC_URL").ok(),
            wallet_rpc_url: get_env_or("PAZA_WALLET_RPC_URL", "http://127.0.0.1:1248"),
            contracts,
            confirmation_timeout_secs: get_env_parse_or("PAZA_CONFIRMATION_TIMEOUT_SECS", 120)?,
            notice_timeout_secs: get_env_parse_or("PAZA_NOTICE_TIMEOUT_SECS", 7)?,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            return Err(AppError::Config("No client ID provided (PAZA_CLIENT_ID)".to_string()));
        }

        if !(5..=600).contains(&self.confirmation_timeout_secs) {
            return Err(AppError::Config(
                "PAZA_CONFIRMATION_TIMEOUT_SECS must be between 5 and 600".to_string(),
            ));
        }

        if self.notice_timeout_secs == 0 {
            return Err(AppError::Config("PAZA_NOTICE_TIMEOUT_SECS must be at least 1".to_string()));
        }

        // Surfaces malformed addresses at startup instead of on first use
        self.registry()?;
        Ok(())
    }

    /// Build the contract registry from the configured addresses.
    pub fn registry(&self) -> Result<ContractRegistry> {
        let c = &self.contracts;
        Ok(ContractRegistry::new(
            parse_address("PAZA_TOKEN_ADDRESS", &c.paza_token)?,
            parse_address("PUSD_TOKEN_ADDRESS", &c.pusd_token)?,
            parse_address("USDT_TOKEN_ADDRESS", &c.usdt_token)?,
            parse_address("USDC_TOKEN_ADDRESS", &c.usdc_token)?,
            parse_address("SALE_CONTRACT_ADDRESS", &c.sale_contract)?,
        ))
    }

    /// Endpoint used for contract reads and receipt polling.
    pub fn read_rpc_url(&self) -> String {
        self.rpc_url
            .clone()
            .unwrap_or_else(|| self.network.default_rpc_url(&self.client_id))
    }

    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_secs(self.confirmation_timeout_secs)
    }

    pub fn notice_timeout(&self) -> Duration {
        Duration::from_secs(self.notice_timeout_secs)
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// Loads `.env` if present, then reads and validates the environment.
///
/// # Errors
///
/// Returns [`AppError::Config`] if:
/// - The API credential or a contract address is missing
/// - A value is malformed or out of range
/// - Config has already been initialized
pub fn init_config() -> Result<&'static Config> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;
    tracing::info!(network = %config.network, "configuration loaded");

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))?;
    Ok(core_config())
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn core_config() -> &'static Config {
    CONFIG.get().expect("Config must be initialized with init_config() before use")
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        client_id: "test-client".to_string(),
        network: Network::Testnet,
        rpc_url: None,
        wallet_rpc_url: "http://127.0.0.1:1248".to_string(),
        contracts: ContractAddresses {
            paza_token: "0x1111111111111111111111111111111111111111".to_string(),
            pusd_token: "0x2222222222222222222222222222222222222222".to_string(),
            usdt_token: "0x3333333333333333333333333333333333333333".to_string(),
            usdc_token: "0x4444444444444444444444444444444444444444".to_string(),
            sale_contract: "0x5555555555555555555555555555555555555555".to_string(),
        },
        confirmation_timeout_secs: 120,
        notice_timeout_secs: 7,
    }
}
