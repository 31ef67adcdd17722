//! # Wallet Library
//!
//! Client-side wallet state for buying, sending, and receiving PAZA.
//!
//! ## Modules
//!
//! - [`session`] - Wallet Connection Manager (single active session, connect guard)
//! - [`balances`] - Balance Aggregator (concurrent reads, derived snapshots)
//! - [`flows`] - Buy (approve then purchase) and Send (transfer) flows
//! - [`scanner`] - Cancelable QR scan session
//! - [`error`] - Flow precondition failures
//!
//! Shared state is published through `tokio::sync::watch` channels. The
//! session is written only by [`ConnectionManager`], the balance snapshot only
//! by [`BalanceAggregator`]; everything else subscribes.

pub mod balances;
pub mod error;
pub mod flows;
pub mod scanner;
pub mod session;
pub mod wallet;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use balances::{BalanceAggregator, BalanceSnapshot, RawBalances};
pub use error::ValidationError;
pub use flows::{BuyFlow, BuyForm, SendFlow, SendForm, TxStatus, TxStep};
pub use scanner::{scan, Camera, ScanOutcome};
pub use session::{ConnectionManager, WalletSession};
pub use wallet::PazaWallet;
