//! # EVM Library
//!
//! Boundary between the wallet and the chain: the [`WalletSdk`] trait, its
//! JSON-RPC implementation, Solidity interfaces for the PAZA contracts, and
//! [`PazaClient`], which turns token-level operations into contract calls.
//!
//! ## Modules
//!
//! - [`abi`] - `sol!` interfaces for the token and sale contracts
//! - [`client`] - Balance reads and approve/buy/transfer submissions
//! - [`rpc`] - [`WalletSdk`] over JSON-RPC (reads via hosted RPC, signing via an external wallet)
//! - [`sdk`] - The [`WalletSdk`] trait
//! - [`types`] - Provider kinds, accounts, contract calls

pub mod abi;
pub mod client;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod rpc;
pub mod sdk;
pub mod types;

// Re-export commonly used types from root for convenience
pub use client::PazaClient;
pub use rpc::RpcWalletSdk;
pub use sdk::WalletSdk;
pub use types::{Account, AuthMode, AuthStrategy, ContractCall, WalletKind};

pub use alloy_primitives::{Address, Bytes, TxHash, U256};
