//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used by every
//! library crate. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Startup** - [`Config`](AppError::Config): missing credential or malformed
//!    settings. Fatal, the wallet cannot run.
//! 2. **User input** - [`Validation`](AppError::Validation): bad amount, empty
//!    recipient, insufficient balance. Caught before anything is submitted.
//! 3. **Wallet** - [`Wallet`](AppError::Wallet): connect/disconnect failures from the
//!    wallet provider. The session stays disconnected and the user may retry.
//! 4. **Chain** - [`Rpc`](AppError::Rpc), [`Transaction`](AppError::Transaction),
//!    [`Decoding`](AppError::Decoding): read failures, rejected or reverted
//!    submissions, malformed return data.
//! 5. **Device** - [`Camera`](AppError::Camera): QR scanning could not acquire or
//!    read the camera.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_recipient(recipient: &str) -> Result<&str> {
//!     if recipient.trim().is_empty() {
//!         return Err(AppError::Validation("Recipient cannot be empty".to_string()));
//!     }
//!     Ok(recipient)
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering all error scenarios.
///
/// Each variant includes a descriptive `String` for context. The `#[error]` attribute
/// from `thiserror` provides automatic `Display` implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// RPC transport error (network, HTTP status, JSON-RPC error object).
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Wallet provider error (connection refused, user rejected, unsupported provider).
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Transaction error (submission rejected, reverted receipt, confirmation timeout).
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// Invalid user input, caught before submission.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Malformed data returned by a contract or RPC endpoint.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Camera unavailable or failed while scanning.
    #[error("Camera error: {0}")]
    Camera(String),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get a user-friendly error message.
    ///
    /// For internal errors, returns a generic message to avoid exposing implementation details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::Wallet(msg)
            | AppError::Transaction(msg)
            | AppError::Camera(msg) => msg.clone(),
            AppError::Rpc(_) | AppError::Decoding(_) => "Network temporarily unavailable".to_string(),
            AppError::Config(_) | AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }

    /// Whether the error should stop the application rather than be shown as a notice.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Config(_))
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}

/// Convert environment lookup failures to `AppError::Config`.
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
