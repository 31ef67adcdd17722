//! # Network Selection
//!
//! The wallet targets exactly one chain per process:
//! - **Mainnet**: Base (chain id 8453)
//! - **Testnet**: Base Sepolia (chain id 84532)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target chain. Mainnet and testnet are mutually exclusive for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Base mainnet (production network)
    #[default]
    Mainnet,
    /// Base Sepolia (test network)
    Testnet,
}

impl Network {
    /// EIP-155 chain id.
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => 8453,
            Network::Testnet => 84532,
        }
    }

    /// Human-readable chain name.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Base",
            Network::Testnet => "Base Sepolia",
        }
    }

    /// Block explorer host for this chain.
    pub fn explorer_host(&self) -> &'static str {
        match self {
            Network::Mainnet => "basescan.org",
            Network::Testnet => "sepolia.basescan.org",
        }
    }

    /// Hosted RPC endpoint authenticated by the client credential.
    pub fn default_rpc_url(&self, client_id: &str) -> String {
        format!("https://{}.rpc.thirdweb.com/{}", self.chain_id(), client_id)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" | "base" => Ok(Network::Mainnet),
            "testnet" | "sepolia" | "base-sepolia" => Ok(Network::Testnet),
            other => Err(format!("unknown network '{other}' (expected mainnet or testnet)")),
        }
    }
}
