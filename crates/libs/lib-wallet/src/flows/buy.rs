//! # Buy Flow
//!
//! Purchase PAZA with a stablecoin in two confirmed steps:
//!
//! 1. `approve(sale, amount)` on the stablecoin
//! 2. `buy(amount, index)` on the sale contract
//!
//! The purchase is only submitted after the approval is mined. If either step
//! fails the flow stops there, shows a timed error notice, and keeps the typed
//! amount.

use super::{failure_notice, StatusCell, TxStatus, TxStep};
use crate::balances::{BalanceAggregator, BalanceSnapshot};
use crate::error::ValidationError;
use crate::session::WalletSession;
use lib_core::{Result, Stablecoin, DECIMALS, SHOW_DECIMALS};
use lib_evm::{Address, PazaClient, TxHash};
use lib_utils::{format_token_amount, format_units, is_numeric_amount, parse_units};
use parking_lot::Mutex;
use shared::dto::TransactionResult;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info, instrument};

/// Smallest purchase, in raw stablecoin units (5.00).
pub const MIN_PURCHASE: u128 = 5_000_000;

/// Sale price of one PAZA in thousandths of a stablecoin (0.017).
pub const SALE_RATE_MILLI: u128 = 17;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuyForm {
    pub pay_amount: String,
    pub stablecoin: Stablecoin,
}

impl BuyForm {
    /// Estimated PAZA received for the typed amount, `None` while the input is not a number.
    pub fn receive_estimate(&self) -> Option<String> {
        if !is_numeric_amount(&self.pay_amount) {
            return None;
        }
        let pay = parse_units(&self.pay_amount, DECIMALS).ok()?;
        let receive = pay.checked_mul(1000)? / SALE_RATE_MILLI;
        Some(format_token_amount(receive, DECIMALS, SHOW_DECIMALS))
    }
}

pub struct BuyFlow {
    client: PazaClient,
    session: watch::Receiver<WalletSession>,
    balances: Arc<BalanceAggregator>,
    form: Mutex<BuyForm>,
    status: StatusCell,
    notice_timeout: Duration,
}

impl BuyFlow {
    pub fn new(
        client: PazaClient,
        session: watch::Receiver<WalletSession>,
        balances: Arc<BalanceAggregator>,
        notice_timeout: Duration,
    ) -> Self {
        Self {
            client,
            session,
            balances,
            form: Mutex::new(BuyForm::default()),
            status: StatusCell::new(),
            notice_timeout,
        }
    }

    pub fn form(&self) -> BuyForm {
        self.form.lock().clone()
    }

    pub fn set_pay_amount(&self, amount: &str) {
        self.form.lock().pay_amount = amount.trim().to_string();
    }

    pub fn set_stablecoin(&self, stablecoin: Stablecoin) {
        self.form.lock().stablecoin = stablecoin;
    }

    /// Fill the pay amount with the full balance of the selected stablecoin.
    pub fn set_max(&self) {
        let snapshot = self.current_snapshot();
        let mut form = self.form.lock();
        let available = snapshot.available(form.stablecoin.token());
        form.pay_amount = format_units(available, DECIMALS);
    }

    pub fn subscribe(&self) -> watch::Receiver<TxStatus> {
        self.status.subscribe()
    }

    pub fn status(&self) -> TxStatus {
        self.status.current()
    }

    /// Clear a shown result or error.
    pub fn dismiss(&self) {
        self.status.dismiss();
    }

    /// Check the form against the connected account. Returns the raw amount to spend.
    pub fn validate(&self) -> std::result::Result<u128, ValidationError> {
        self.check(&self.form())
    }

    fn check(&self, form: &BuyForm) -> std::result::Result<u128, ValidationError> {
        if !self.session.borrow().is_connected() {
            return Err(ValidationError::NotConnected);
        }

        if !is_numeric_amount(&form.pay_amount) {
            return Err(ValidationError::InvalidAmount);
        }
        let raw = parse_units(&form.pay_amount, DECIMALS)
            .map_err(|_| ValidationError::InvalidAmount)?;

        let coin = form.stablecoin.name().to_string();
        if raw < MIN_PURCHASE {
            return Err(ValidationError::BelowMinimum {
                minimum: format_units(MIN_PURCHASE, DECIMALS),
                coin,
            });
        }

        let available = self.current_snapshot().available(form.stablecoin.token());
        if raw > available {
            return Err(ValidationError::InsufficientBalance {
                token: coin,
                available: format_token_amount(available, DECIMALS, SHOW_DECIMALS),
                requested: form.pay_amount.clone(),
            });
        }
        Ok(raw)
    }

    /// Whether the buy action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.status.current().is_transacting() && self.validate().is_ok()
    }

    /// Approve then buy with the current form.
    ///
    /// On success the balances are refreshed, the pay amount is cleared, and
    /// the result is held in [`TxStatus::Success`] until dismissed.
    ///
    /// # Errors
    ///
    /// - `AppError::Validation` if a precondition fails or a submission is already running
    /// - the SDK error of the failing step otherwise
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<TransactionResult> {
        let form = self.form();
        let raw = self.check(&form)?;
        let session = self.session.borrow().clone();
        let owner = session.owner().ok_or(ValidationError::NotConnected)?;
        let coin = form.stablecoin;

        if !self.status.try_begin(TxStep::Approving(coin)) {
            return Err(ValidationError::AlreadyTransacting.into());
        }
        info!(%owner, amount = %form.pay_amount, coin = coin.name(), "starting purchase");

        let tx_hash = match self.purchase(owner, raw, coin).await {
            Ok(tx_hash) => tx_hash,
            Err(e) => {
                error!(error = %e, coin = coin.name(), "purchase failed");
                if self.session_changed(session.epoch()) {
                    self.status.set(TxStatus::Idle);
                } else {
                    self.status.set_expiring(TxStatus::Failed(failure_notice(&e)), self.notice_timeout);
                }
                return Err(e);
            }
        };

        let result = TransactionResult {
            message: format!(
                "Successfully purchased PAZA tokens worth {} {}!",
                form.pay_amount,
                coin.name()
            ),
            transaction_hash: tx_hash.to_string(),
            explorer_url: self.client.explorer_tx_url(tx_hash),
        };

        if self.session_changed(session.epoch()) {
            info!(%tx_hash, "purchase confirmed after the wallet changed, result not shown");
            self.status.set(TxStatus::Idle);
            return Ok(result);
        }

        self.balances.refresh().await;
        self.form.lock().pay_amount.clear();
        self.status.set(TxStatus::Success(result.clone()));
        Ok(result)
    }

    async fn purchase(&self, owner: Address, raw: u128, coin: Stablecoin) -> Result<TxHash> {
        let spender = self.client.registry().sale_contract();
        self.client.approve(owner, coin.token(), spender, raw).await?;
        self.status.set(TxStatus::Transacting(TxStep::Purchasing(coin)));
        self.client.buy(owner, raw, coin).await
    }

    fn session_changed(&self, epoch: u64) -> bool {
        self.session.borrow().epoch() != epoch
    }

    /// Balances of the connected account, zero if the snapshot belongs to another session.
    fn current_snapshot(&self) -> BalanceSnapshot {
        let owner = self.session.borrow().owner();
        let snapshot = self.balances.snapshot();
        if snapshot.owner.is_some() && snapshot.owner == owner {
            snapshot
        } else {
            BalanceSnapshot::default()
        }
    }
}
