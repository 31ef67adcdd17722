//! # Wallet Connection Manager
//!
//! Owns the single active wallet session. The session lives in a
//! `tokio::sync::watch` channel: this manager is the only writer, every other
//! component holds a receiver and reacts to changes instead of polling.
//!
//! ## Connect Flow
//!
//! - **External wallets** (MetaMask, Base, Binance): delegated to the SDK's
//!   external connect.
//! - **Social wallets** (Apple, Google, Passkey): the embedded smart-account
//!   flow. A stored passkey selects sign-in, otherwise sign-up.
//!
//! A connect while already connected or while another connect is in flight is
//! a no-op. Every successful connect and every disconnect bumps the session
//! epoch, which lets balance reads and submissions detect that the account they
//! started for is gone.

use lib_core::Result;
use lib_evm::{Account, Address, AuthMode, WalletKind, WalletSdk};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Snapshot of the active wallet session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletSession {
    account: Option<Account>,
    is_connecting: bool,
    epoch: u64,
}

impl WalletSession {
    /// Connected address as a checksummed string, empty when disconnected.
    pub fn address(&self) -> String {
        self.account.map(|a| a.address.to_string()).unwrap_or_default()
    }

    pub fn account(&self) -> Option<Account> {
        self.account
    }

    pub fn owner(&self) -> Option<Address> {
        self.account.map(|a| a.address)
    }

    pub fn kind(&self) -> Option<WalletKind> {
        self.account.map(|a| a.kind)
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    pub fn is_connecting(&self) -> bool {
        self.is_connecting
    }

    /// Incremented on every connect and disconnect.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

pub struct ConnectionManager {
    sdk: Arc<dyn WalletSdk>,
    session: watch::Sender<WalletSession>,
}

impl ConnectionManager {
    pub fn new(sdk: Arc<dyn WalletSdk>) -> Self {
        let (session, _) = watch::channel(WalletSession::default());
        Self { sdk, session }
    }

    /// Receiver that observes every session change.
    pub fn subscribe(&self) -> watch::Receiver<WalletSession> {
        self.session.subscribe()
    }

    pub fn current(&self) -> WalletSession {
        self.session.borrow().clone()
    }

    /// Connect with `kind`.
    ///
    /// Returns `Ok(None)` without contacting the SDK when a wallet is already
    /// connected or a connect is in flight.
    ///
    /// # Errors
    ///
    /// SDK failures are returned unchanged and the session stays disconnected.
    pub async fn connect_wallet(&self, kind: WalletKind) -> Result<Option<Account>> {
        let started = self.session.send_if_modified(|session| {
            if session.is_connected() || session.is_connecting {
                return false;
            }
            session.is_connecting = true;
            true
        });
        if !started {
            debug!(%kind, "connect ignored: already connected or connecting");
            return Ok(None);
        }

        info!(%kind, "connecting wallet");
        match self.establish(kind).await {
            Ok(account) => {
                self.session.send_modify(|session| {
                    session.account = Some(account);
                    session.is_connecting = false;
                    session.epoch += 1;
                });
                info!(address = %account.address, %kind, "wallet connected");
                Ok(Some(account))
            }
            Err(e) => {
                self.session.send_modify(|session| session.is_connecting = false);
                warn!(%kind, error = %e, "wallet connection failed");
                Err(e)
            }
        }
    }

    async fn establish(&self, kind: WalletKind) -> Result<Account> {
        match kind.social_strategy() {
            Some(strategy) => {
                let mode = if self.sdk.has_stored_passkey().await? {
                    AuthMode::SignIn
                } else {
                    AuthMode::SignUp
                };
                debug!(%strategy, ?mode, "embedded wallet connect");
                self.sdk.connect_in_app(strategy, mode).await
            }
            None => self.sdk.connect_external(kind).await,
        }
    }

    /// Tear down the active session. No-op when no wallet is connected.
    ///
    /// The local session is cleared before the provider is told, so consumers
    /// observe the disconnect immediately even if the provider call is slow.
    pub async fn disconnect_wallet(&self) {
        let mut previous = None;
        self.session.send_if_modified(|session| match session.account.take() {
            Some(account) => {
                previous = Some(account);
                session.epoch += 1;
                true
            }
            None => false,
        });

        let Some(account) = previous else {
            debug!("disconnect ignored: no active wallet");
            return;
        };

        info!(address = %account.address, "wallet disconnected");
        if let Err(e) = self.sdk.disconnect(&account).await {
            warn!(address = %account.address, error = %e, "provider disconnect failed");
        }
    }
}
