//! # Token and Contract Registry
//!
//! Immutable mapping from token symbol to contract address and decimal precision,
//! built once from [`Config`](crate::Config) and shared read-only afterwards.
//!
//! Every token handled by the wallet uses 6 decimals.

use crate::error::{AppError, Result};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decimal precision of every tracked token.
pub const DECIMALS: u8 = 6;

/// Fractional digits shown in balance labels.
pub const SHOW_DECIMALS: usize = 2;

/// Tokens tracked by the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenSymbol {
    Paza,
    Pusd,
    Usdt,
    Usdc,
}

impl TokenSymbol {
    /// All tokens in menu order.
    pub const ALL: [TokenSymbol; 4] =
        [TokenSymbol::Pusd, TokenSymbol::Usdt, TokenSymbol::Usdc, TokenSymbol::Paza];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSymbol::Paza => "PAZA",
            TokenSymbol::Pusd => "PUSD",
            TokenSymbol::Usdt => "USDT",
            TokenSymbol::Usdc => "USDC",
        }
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenSymbol {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "PAZA" => Ok(TokenSymbol::Paza),
            "PUSD" => Ok(TokenSymbol::Pusd),
            "USDT" => Ok(TokenSymbol::Usdt),
            "USDC" => Ok(TokenSymbol::Usdc),
            other => Err(AppError::Validation(format!("Unknown token '{other}'"))),
        }
    }
}

/// Stablecoins accepted by the sale contract.
///
/// The discriminant is the `uint8` index passed to `buy(uint256,uint8)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum Stablecoin {
    Pusd = 0,
    #[default]
    Usdt = 1,
    Usdc = 2,
}

impl Stablecoin {
    pub const ALL: [Stablecoin; 3] = [Stablecoin::Pusd, Stablecoin::Usdt, Stablecoin::Usdc];

    /// Index understood by the sale contract.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn token(&self) -> TokenSymbol {
        match self {
            Stablecoin::Pusd => TokenSymbol::Pusd,
            Stablecoin::Usdt => TokenSymbol::Usdt,
            Stablecoin::Usdc => TokenSymbol::Usdc,
        }
    }

    pub fn name(&self) -> &'static str {
        self.token().as_str()
    }
}

impl TryFrom<TokenSymbol> for Stablecoin {
    type Error = AppError;

    fn try_from(symbol: TokenSymbol) -> Result<Self> {
        match symbol {
            TokenSymbol::Pusd => Ok(Stablecoin::Pusd),
            TokenSymbol::Usdt => Ok(Stablecoin::Usdt),
            TokenSymbol::Usdc => Ok(Stablecoin::Usdc),
            TokenSymbol::Paza => Err(AppError::Validation("PAZA is not a stablecoin".to_string())),
        }
    }
}

/// Contract handle for a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInfo {
    pub symbol: TokenSymbol,
    pub address: Address,
    pub decimals: u8,
}

/// All contracts the wallet talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractRegistry {
    paza: TokenInfo,
    pusd: TokenInfo,
    usdt: TokenInfo,
    usdc: TokenInfo,
    sale: Address,
}

impl ContractRegistry {
    pub fn new(paza: Address, pusd: Address, usdt: Address, usdc: Address, sale: Address) -> Self {
        let token = |symbol, address| TokenInfo { symbol, address, decimals: DECIMALS };
        Self {
            paza: token(TokenSymbol::Paza, paza),
            pusd: token(TokenSymbol::Pusd, pusd),
            usdt: token(TokenSymbol::Usdt, usdt),
            usdc: token(TokenSymbol::Usdc, usdc),
            sale,
        }
    }

    /// Contract handle for `symbol`.
    pub fn token(&self, symbol: TokenSymbol) -> &TokenInfo {
        match symbol {
            TokenSymbol::Paza => &self.paza,
            TokenSymbol::Pusd => &self.pusd,
            TokenSymbol::Usdt => &self.usdt,
            TokenSymbol::Usdc => &self.usdc,
        }
    }

    /// Address of the PAZA sale contract (spender for approvals).
    pub fn sale_contract(&self) -> Address {
        self.sale
    }
}

/// Parse a configured contract address, naming the variable on failure.
pub fn parse_address(name: &str, value: &str) -> Result<Address> {
    Address::from_str(value.trim())
        .map_err(|e| AppError::Config(format!("{name} is not a valid address '{value}': {e}")))
}
