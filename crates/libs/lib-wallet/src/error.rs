//! # Flow Preconditions
//!
//! Reasons a buy or send cannot be submitted. These are checked before any
//! SDK call is made; a flow with a failing precondition stays disabled.

use lib_core::AppError;
use shared::dto::Notice;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Connect a wallet first")]
    NotConnected,

    #[error("Enter a valid amount")]
    InvalidAmount,

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Minimum purchase is {minimum} {coin}")]
    BelowMinimum { minimum: String, coin: String },

    #[error("Insufficient {token} balance")]
    InsufficientBalance { token: String, available: String, requested: String },

    #[error("Recipient cannot be empty")]
    EmptyRecipient,

    #[error("Invalid recipient address '{0}'")]
    InvalidRecipient(String),

    #[error("A transaction is already in progress")]
    AlreadyTransacting,
}

impl ValidationError {
    /// Notice shown next to the form, with detail where there is any.
    pub fn notice(&self) -> Notice {
        match self {
            ValidationError::InsufficientBalance { token, available, requested } => Notice::warning(
                self.to_string(),
                format!("You have {available} {token} but tried to spend {requested} {token}"),
            ),
            other => Notice::error(other.to_string()),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::NoticeKind;

    #[test]
    fn test_insufficient_balance_notice() {
        let err = ValidationError::InsufficientBalance {
            token: "USDT".to_string(),
            available: "10.00".to_string(),
            requested: "50".to_string(),
        };
        let notice = err.notice();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.message, "Insufficient USDT balance");
        assert_eq!(
            notice.description.as_deref(),
            Some("You have 10.00 USDT but tried to spend 50 USDT")
        );
    }

    #[test]
    fn test_into_app_error() {
        let err: AppError = ValidationError::EmptyRecipient.into();
        assert_eq!(err, AppError::Validation("Recipient cannot be empty".to_string()));
    }
}
