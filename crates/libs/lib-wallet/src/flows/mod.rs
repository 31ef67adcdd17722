//! # Transaction Flows
//!
//! Buy (approve then purchase) and Send (transfer). Both publish a [`TxStatus`]
//! through a watch channel:
//!
//! ```text
//! Idle -> Transacting(step) -> Success(result) --dismiss--> Idle
//!                           \-> Failed(notice) --timeout--> Idle
//! ```
//!
//! A flow accepts a new submission only from a non-transacting state. A
//! failure keeps the form inputs so the user can retry without retyping.

pub mod buy;
pub mod send;

pub use buy::{BuyFlow, BuyForm, MIN_PURCHASE, SALE_RATE_MILLI};
pub use send::{SendFlow, SendForm};

use lib_core::{AppError, Stablecoin, TokenSymbol};
use shared::dto::{Notice, TransactionResult};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// In-progress step of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxStep {
    Approving(Stablecoin),
    Purchasing(Stablecoin),
    Sending { amount: String, token: TokenSymbol, recipient: String },
}

impl TxStep {
    /// Progress line shown while the step runs.
    pub fn message(&self) -> String {
        match self {
            TxStep::Approving(coin) => format!("Approving {} spending...", coin.name()),
            TxStep::Purchasing(coin) => {
                format!("{} spend approved. Proceeding to purchase...", coin.name())
            }
            TxStep::Sending { amount, token, recipient } => {
                format!("Sending {amount} {token} to {}...", shared::utils::shorten_hex(recipient, 4))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TxStatus {
    #[default]
    Idle,
    Transacting(TxStep),
    Success(TransactionResult),
    Failed(Notice),
}

impl TxStatus {
    pub fn is_transacting(&self) -> bool {
        matches!(self, TxStatus::Transacting(_))
    }
}

/// Notice for a failed submission.
pub(crate) fn failure_notice(err: &AppError) -> Notice {
    Notice::error(format!("Transaction failed: {}", err.user_message()))
}

/// Status channel with a generation counter, so a delayed reset only clears
/// the state it was scheduled for.
///
/// The counter is only read or bumped inside the watch closures, which run
/// under the channel's write lock.
#[derive(Clone)]
pub(crate) struct StatusCell {
    tx: Arc<watch::Sender<TxStatus>>,
    generation: Arc<AtomicU64>,
}

impl StatusCell {
    pub(crate) fn new() -> Self {
        let (tx, _) = watch::channel(TxStatus::Idle);
        Self { tx: Arc::new(tx), generation: Arc::new(AtomicU64::new(0)) }
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<TxStatus> {
        self.tx.subscribe()
    }

    pub(crate) fn current(&self) -> TxStatus {
        self.tx.borrow().clone()
    }

    /// Enter `step` unless a submission is already running.
    pub(crate) fn try_begin(&self, step: TxStep) -> bool {
        self.tx.send_if_modified(|status| {
            if status.is_transacting() {
                return false;
            }
            self.generation.fetch_add(1, Ordering::SeqCst);
            *status = TxStatus::Transacting(step);
            true
        })
    }

    pub(crate) fn set(&self, status: TxStatus) {
        self.publish(status);
    }

    /// Publish `status`, then return to idle after `after` unless something
    /// else was published in between.
    pub(crate) fn set_expiring(&self, status: TxStatus, after: Duration) {
        let generation = self.publish(status);

        let cell = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            cell.expire(generation);
        });
    }

    /// Return to idle if nothing was published since `generation`.
    pub(crate) fn expire(&self, generation: u64) -> bool {
        self.tx.send_if_modified(|status| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            self.generation.fetch_add(1, Ordering::SeqCst);
            *status = TxStatus::Idle;
            true
        })
    }

    /// Leave a terminal state. Ignored while a submission is running.
    pub(crate) fn dismiss(&self) {
        self.tx.send_if_modified(|status| match status {
            TxStatus::Success(_) | TxStatus::Failed(_) => {
                self.generation.fetch_add(1, Ordering::SeqCst);
                *status = TxStatus::Idle;
                true
            }
            _ => false,
        });
    }

    fn publish(&self, next: TxStatus) -> u64 {
        let mut generation = 0;
        self.tx.send_modify(|status| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *status = next;
        });
        generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_messages() {
        assert_eq!(TxStep::Approving(Stablecoin::Usdt).message(), "Approving USDT spending...");
        assert_eq!(
            TxStep::Purchasing(Stablecoin::Pusd).message(),
            "PUSD spend approved. Proceeding to purchase..."
        );
        let sending = TxStep::Sending {
            amount: "12.5".to_string(),
            token: TokenSymbol::Paza,
            recipient: "0x742d35Cc6634C0532925a3b844Bc9e7595f8dE8A".to_string(),
        };
        assert_eq!(sending.message(), "Sending 12.5 PAZA to 0x742d...dE8A...");
    }

    #[test]
    fn test_failure_notice_hides_transport_detail() {
        let notice = failure_notice(&AppError::Rpc("http://10.0.0.1 refused".to_string()));
        assert_eq!(notice.message, "Transaction failed: Network temporarily unavailable");
    }

    #[tokio::test]
    async fn test_try_begin_is_exclusive() {
        let cell = StatusCell::new();
        assert!(cell.try_begin(TxStep::Approving(Stablecoin::Usdt)));
        assert!(!cell.try_begin(TxStep::Approving(Stablecoin::Usdc)));
        assert_eq!(cell.current(), TxStatus::Transacting(TxStep::Approving(Stablecoin::Usdt)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiring_status_returns_to_idle() {
        let cell = StatusCell::new();
        cell.set_expiring(TxStatus::Failed(Notice::error("boom")), Duration::from_secs(7));

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(matches!(cell.current(), TxStatus::Failed(_)));
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(cell.current(), TxStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_expiry_does_not_clear_new_status() {
        let cell = StatusCell::new();
        cell.set_expiring(TxStatus::Failed(Notice::error("first")), Duration::from_secs(7));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(cell.try_begin(TxStep::Approving(Stablecoin::Usdt)));

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(cell.current().is_transacting());
    }

    #[test]
    fn test_expiry_after_new_submission_is_rejected() {
        let cell = StatusCell::new();
        let generation = cell.publish(TxStatus::Failed(Notice::error("first")));
        assert!(cell.try_begin(TxStep::Approving(Stablecoin::Usdt)));

        assert!(!cell.expire(generation));
        assert_eq!(cell.current(), TxStatus::Transacting(TxStep::Approving(Stablecoin::Usdt)));
    }

    #[test]
    fn test_expiry_clears_its_own_status() {
        let cell = StatusCell::new();
        let generation = cell.publish(TxStatus::Failed(Notice::error("first")));

        assert!(cell.expire(generation));
        assert_eq!(cell.current(), TxStatus::Idle);
        assert!(!cell.expire(generation));
    }

    #[test]
    fn test_dismiss_ignored_while_transacting() {
        let cell = StatusCell::new();
        cell.try_begin(TxStep::Approving(Stablecoin::Usdt));
        cell.dismiss();
        assert!(cell.current().is_transacting());
    }
}
