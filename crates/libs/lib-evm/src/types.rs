//! # Wallet and Call Types
//!
//! Provider kinds offered by the wallet selector, the account a connection
//! yields, and the encoded contract calls handed to the SDK.

use alloy_primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wallet providers the user can connect with.
///
/// Social kinds use the embedded smart-account flow; the rest connect to an
/// external wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    Apple,
    Google,
    Passkey,
    Metamask,
    /// Coinbase wallet on Base
    Base,
    Binance,
}

impl WalletKind {
    /// Selector order: social first, then external wallets.
    pub const ALL: [WalletKind; 6] = [
        WalletKind::Apple,
        WalletKind::Google,
        WalletKind::Passkey,
        WalletKind::Metamask,
        WalletKind::Base,
        WalletKind::Binance,
    ];

    /// Auth strategy for social kinds, `None` for external wallets.
    pub fn social_strategy(&self) -> Option<AuthStrategy> {
        match self {
            WalletKind::Apple => Some(AuthStrategy::Apple),
            WalletKind::Google => Some(AuthStrategy::Google),
            WalletKind::Passkey => Some(AuthStrategy::Passkey),
            WalletKind::Metamask | WalletKind::Base | WalletKind::Binance => None,
        }
    }

    pub fn is_social(&self) -> bool {
        self.social_strategy().is_some()
    }

    /// Reverse-DNS wallet identifier for external wallets.
    pub fn wallet_id(&self) -> Option<&'static str> {
        match self {
            WalletKind::Metamask => Some("io.metamask"),
            WalletKind::Base => Some("com.coinbase.wallet"),
            WalletKind::Binance => Some("com.binance.wallet"),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WalletKind::Apple => "Apple",
            WalletKind::Google => "Google",
            WalletKind::Passkey => "Passkey",
            WalletKind::Metamask => "MetaMask",
            WalletKind::Base => "Base",
            WalletKind::Binance => "Binance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WalletKind::Apple => "Sign in with Apple",
            WalletKind::Google => "Sign in with Google",
            WalletKind::Passkey => "Use device passkey",
            WalletKind::Metamask => "Browser extension",
            WalletKind::Base => "Coinbase L2",
            WalletKind::Binance => "Binance Chain",
        }
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WalletKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "apple" => Ok(WalletKind::Apple),
            "google" => Ok(WalletKind::Google),
            "passkey" => Ok(WalletKind::Passkey),
            "metamask" => Ok(WalletKind::Metamask),
            "base" | "coinbase" => Ok(WalletKind::Base),
            "binance" => Ok(WalletKind::Binance),
            other => Err(format!("Unsupported wallet type '{other}'")),
        }
    }
}

/// Embedded-wallet authentication strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStrategy {
    Apple,
    Google,
    Passkey,
}

impl fmt::Display for AuthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AuthStrategy::Apple => "apple",
            AuthStrategy::Google => "google",
            AuthStrategy::Passkey => "passkey",
        })
    }
}

/// Whether the embedded flow registers a new passkey or reuses a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// A connected account as reported by the SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    pub address: Address,
    pub kind: WalletKind,
}

/// ABI-encoded call against one contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub contract: Address,
    /// Solidity function name, for logs and mocks
    pub method: &'static str,
    pub data: Bytes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_kinds() {
        let social: Vec<_> = WalletKind::ALL.iter().filter(|k| k.is_social()).collect();
        assert_eq!(social.len(), 3);
        assert_eq!(WalletKind::Passkey.social_strategy(), Some(AuthStrategy::Passkey));
        assert_eq!(WalletKind::Metamask.wallet_id(), Some("io.metamask"));
        assert_eq!(WalletKind::Google.wallet_id(), None);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("MetaMask".parse::<WalletKind>(), Ok(WalletKind::Metamask));
        assert_eq!("coinbase".parse::<WalletKind>(), Ok(WalletKind::Base));
        assert!("safe".parse::<WalletKind>().is_err());
    }
}
