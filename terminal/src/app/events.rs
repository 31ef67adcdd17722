//! # Application Events
//!
//! Results of background tasks, sent back to the input loop.

use lib_core::AppError;
use lib_evm::Account;
use shared::dto::TransactionResult;

/// Async task results sent to the input loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Connect finished; `Ok(None)` when the request was ignored by the connect guard
    Connected(Result<Option<Account>, AppError>),
    /// Disconnect finished
    Disconnected,
    /// Buy submission finished
    BuyFinished(Result<TransactionResult, AppError>),
    /// Send submission finished
    SendFinished(Result<TransactionResult, AppError>),
    /// Manual balance refresh finished
    BalancesRefreshed,
}
