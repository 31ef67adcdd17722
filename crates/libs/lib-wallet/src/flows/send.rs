//! # Send Flow
//!
//! Transfer any tracked token to a recipient. The recipient can be typed or
//! taken from a scanned QR payload.

use super::{failure_notice, StatusCell, TxStatus, TxStep};
use crate::balances::{BalanceAggregator, BalanceSnapshot};
use crate::error::ValidationError;
use crate::session::WalletSession;
use lib_core::{Result, TokenSymbol, DECIMALS, SHOW_DECIMALS};
use lib_evm::{Address, PazaClient};
use lib_utils::{
    decode_qr_payload, format_token_amount, format_units, is_numeric_amount, parse_units,
    validate_not_empty,
};
use parking_lot::Mutex;
use shared::dto::TransactionResult;
use shared::utils::shorten_hex;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendForm {
    pub recipient: String,
    pub amount: String,
    pub token: TokenSymbol,
}

impl Default for SendForm {
    fn default() -> Self {
        Self { recipient: String::new(), amount: String::new(), token: TokenSymbol::Paza }
    }
}

pub struct SendFlow {
    client: PazaClient,
    session: watch::Receiver<WalletSession>,
    balances: Arc<BalanceAggregator>,
    form: Mutex<SendForm>,
    status: StatusCell,
    notice_timeout: Duration,
}

impl SendFlow {
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
            form: Mutex::new(SendForm::default()),
            status: StatusCell::new(),
            notice_timeout,
        }
    }

    pub fn form(&self) -> SendForm {
        self.form.lock().clone()
    }

    pub fn set_recipient(&self, recipient: &str) {
        self.form.lock().recipient = recipient.trim().to_string();
    }

    pub fn set_amount(&self, amount: &str) {
        self.form.lock().amount = amount.trim().to_string();
    }

    pub fn set_token(&self, token: TokenSymbol) {
        self.form.lock().token = token;
    }

    /// Fill the amount with the full available balance of the selected token.
    pub fn set_max(&self) {
        let snapshot = self.current_snapshot();
        let mut form = self.form.lock();
        form.amount = format_units(snapshot.available(form.token), DECIMALS);
    }

    /// Populate the recipient from a scanned QR payload (`ethereum:0xabc@8453` → `0xabc`).
    pub fn apply_scanned_payload(&self, payload: &str) {
        let recipient = decode_qr_payload(payload);
        info!(%recipient, "recipient set from QR code");
        self.form.lock().recipient = recipient;
    }

    pub fn subscribe(&self) -> watch::Receiver<TxStatus> {
        self.status.subscribe()
    }

    pub fn status(&self) -> TxStatus {
        self.status.current()
    }

    pub fn dismiss(&self) {
        self.status.dismiss();
    }

    /// Check the form. Returns the parsed recipient and raw amount.
    pub fn validate(&self) -> std::result::Result<(Address, u128), ValidationError> {
        self.check(&self.form())
    }

    fn check(&self, form: &SendForm) -> std::result::Result<(Address, u128), ValidationError> {
        validate_not_empty(&form.recipient, "Recipient")
            .map_err(|_| ValidationError::EmptyRecipient)?;
        if !self.session.borrow().is_connected() {
            return Err(ValidationError::NotConnected);
        }
        let recipient = Address::from_str(&form.recipient)
            .map_err(|_| ValidationError::InvalidRecipient(form.recipient.clone()))?;

        if !is_numeric_amount(&form.amount) {
            return Err(ValidationError::InvalidAmount);
        }
        let raw = parse_units(&form.amount, DECIMALS)
            .map_err(|_| ValidationError::InvalidAmount)?;
        if raw == 0 {
            return Err(ValidationError::ZeroAmount);
        }

        let available = self.current_snapshot().available(form.token);
        if raw > available {
            return Err(ValidationError::InsufficientBalance {
                token: form.token.to_string(),
                available: format_token_amount(available, DECIMALS, SHOW_DECIMALS),
                requested: form.amount.clone(),
            });
        }
        Ok((recipient, raw))
    }

    pub fn can_submit(&self) -> bool {
        !self.status.current().is_transacting() && self.validate().is_ok()
    }

    /// Transfer the current form's amount to its recipient.
    ///
    /// Success refreshes balances, clears the form, and holds the result until
    /// dismissed. Failure keeps the inputs for a retry.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<TransactionResult> {
        let form = self.form();
        let (recipient, raw) = self.check(&form)?;
        let session = self.session.borrow().clone();
        let owner = session.owner().ok_or(ValidationError::NotConnected)?;

        let step = TxStep::Sending {
            amount: form.amount.clone(),
            token: form.token,
            recipient: form.recipient.clone(),
        };
        if !self.status.try_begin(step) {
            return Err(ValidationError::AlreadyTransacting.into());
        }
        info!(%owner, %recipient, amount = %form.amount, token = %form.token, "sending tokens");

        let tx_hash = match self.client.transfer(owner, form.token, recipient, raw).await {
            Ok(tx_hash) => tx_hash,
            Err(e) => {
                error!(error = %e, token = %form.token, "send failed");
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
                "Successfully sent {} {} to {}!",
                form.amount,
                form.token,
                shorten_hex(&form.recipient, 4)
            ),
            transaction_hash: tx_hash.to_string(),
            explorer_url: self.client.explorer_tx_url(tx_hash),
        };

        if self.session_changed(session.epoch()) {
            info!(%tx_hash, "transfer confirmed after the wallet changed, result not shown");
            self.status.set(TxStatus::Idle);
            return Ok(result);
        }

        self.balances.refresh().await;
        {
            let mut form = self.form.lock();
            form.recipient.clear();
            form.amount.clear();
        }
        self.status.set(TxStatus::Success(result.clone()));
        Ok(result)
    }

    fn session_changed(&self, epoch: u64) -> bool {
        self.session.borrow().epoch() != epoch
    }

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
