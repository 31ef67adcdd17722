//! # Wallet SDK Boundary
//!
//! Everything the wallet needs from the outside world: connecting a provider,
//! reading contract state, and submitting signed transactions. The wallet core
//! depends only on this trait, so tests swap in an in-memory implementation.

use crate::types::{Account, AuthMode, AuthStrategy, ContractCall, WalletKind};
use alloy_primitives::{Address, Bytes, TxHash};
use async_trait::async_trait;
use lib_core::Result;

/// Wallet/chain SDK operations.
///
/// Implementations report provider failures as `AppError::Wallet`, read failures
/// as `AppError::Rpc`, and rejected or reverted submissions as `AppError::Transaction`.
#[async_trait]
pub trait WalletSdk: Send + Sync {
    /// Connect an external (extension or desktop) wallet.
    async fn connect_external(&self, kind: WalletKind) -> Result<Account>;

    /// Whether a passkey is already registered for this client.
    async fn has_stored_passkey(&self) -> Result<bool>;

    /// Connect the embedded smart-account wallet with a social strategy.
    async fn connect_in_app(&self, strategy: AuthStrategy, mode: AuthMode) -> Result<Account>;

    /// Tear down a provider session.
    async fn disconnect(&self, account: &Account) -> Result<()>;

    /// Execute a read-only call and return the raw return data.
    async fn read(&self, call: &ContractCall) -> Result<Bytes>;

    /// Sign and broadcast a call from `from`, returning the transaction hash.
    async fn write(&self, from: Address, call: &ContractCall) -> Result<TxHash>;

    /// Wait until `tx_hash` is mined successfully.
    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<()>;
}
