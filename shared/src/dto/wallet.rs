use serde::{Deserialize, Serialize};

/// Outcome of a confirmed on-chain submission, held by the UI until dismissed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionResult {
    pub message: String,
    pub transaction_hash: String,
    pub explorer_url: String,
}

impl TransactionResult {
    /// Hash shortened to its first 10 and last 8 characters.
    pub fn short_hash(&self) -> String {
        crate::utils::format_address(&self.transaction_hash, 10, 8)
    }
}

/// Tone of a transient notice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// A short message shown next to a form, cleared automatically after a delay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into(), description: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into(), description: None }
    }

    pub fn warning(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
            description: Some(description.into()),
        }
    }
}

/// Display strings for every tracked balance of the connected account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceView {
    pub paza: String,
    pub paza_frozen: String,
    pub paza_available: String,
    pub pusd: String,
    pub usdt: String,
    pub usdc: String,
}
