//! # Balance Aggregator
//!
//! Keeps the latest raw reads for the connected account and publishes a
//! [`BalanceSnapshot`] derived from them. A snapshot is never edited in place:
//! each change to the raw reads produces a new one through
//! [`BalanceSnapshot::derive`], so PAZA available is always computed from the
//! balance and frozen amount of the same generation.
//!
//! ## Refresh
//!
//! [`BalanceAggregator::refresh`] issues the five reads (PAZA, PAZA frozen,
//! PUSD, USDT, USDC) together and applies them once all have settled. A failed
//! read keeps that field's previous value; the others are still applied.
//! Reads that finish after the session changed are dropped.

use crate::session::WalletSession;
use lib_core::{Result, TokenSymbol, DECIMALS, SHOW_DECIMALS};
use lib_evm::{Address, PazaClient};
use lib_utils::format_token_amount;
use parking_lot::Mutex;
use shared::dto::BalanceView;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Raw reads as last received. `None` until the first successful read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawBalances {
    pub paza: Option<u128>,
    pub paza_frozen: Option<u128>,
    pub pusd: Option<u128>,
    pub usdt: Option<u128>,
    pub usdc: Option<u128>,
}

/// Consistent view of every tracked balance, in raw units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceSnapshot {
    /// Account the reads belong to; `None` when disconnected
    pub owner: Option<Address>,
    pub epoch: u64,
    pub paza: u128,
    pub paza_frozen: u128,
    /// `paza - paza_frozen`, floored at zero
    pub paza_available: u128,
    pub pusd: u128,
    pub usdt: u128,
    pub usdc: u128,
}

impl BalanceSnapshot {
    /// Recompute a snapshot from raw reads. Missing reads count as zero, except
    /// that nothing is available until the frozen amount has been read.
    pub fn derive(owner: Option<Address>, epoch: u64, raw: &RawBalances) -> Self {
        if owner.is_none() {
            return Self { epoch, ..Self::default() };
        }
        let paza = raw.paza.unwrap_or_default();
        let paza_available = match raw.paza_frozen {
            Some(frozen) => paza.saturating_sub(frozen),
            None => 0,
        };
        Self {
            owner,
            epoch,
            paza,
            paza_frozen: raw.paza_frozen.unwrap_or_default(),
            paza_available,
            pusd: raw.pusd.unwrap_or_default(),
            usdt: raw.usdt.unwrap_or_default(),
            usdc: raw.usdc.unwrap_or_default(),
        }
    }

    /// Total balance of `token`.
    pub fn balance(&self, token: TokenSymbol) -> u128 {
        match token {
            TokenSymbol::Paza => self.paza,
            TokenSymbol::Pusd => self.pusd,
            TokenSymbol::Usdt => self.usdt,
            TokenSymbol::Usdc => self.usdc,
        }
    }

    /// Spendable amount of `token`; frozen PAZA is excluded.
    pub fn available(&self, token: TokenSymbol) -> u128 {
        match token {
            TokenSymbol::Paza => self.paza_available,
            other => self.balance(other),
        }
    }

    /// Display strings, truncated to two decimals.
    pub fn view(&self) -> BalanceView {
        let fmt = |raw| format_token_amount(raw, DECIMALS, SHOW_DECIMALS);
        BalanceView {
            paza: fmt(self.paza),
            paza_frozen: fmt(self.paza_frozen),
            paza_available: fmt(self.paza_available),
            pusd: fmt(self.pusd),
            usdt: fmt(self.usdt),
            usdc: fmt(self.usdc),
        }
    }
}

#[derive(Debug, Default)]
struct RawState {
    owner: Option<Address>,
    epoch: u64,
    raw: RawBalances,
}

pub struct BalanceAggregator {
    client: PazaClient,
    session: watch::Receiver<WalletSession>,
    raw: Mutex<RawState>,
    snapshot: watch::Sender<BalanceSnapshot>,
}

impl BalanceAggregator {
    pub fn new(client: PazaClient, session: watch::Receiver<WalletSession>) -> Self {
        let (snapshot, _) = watch::channel(BalanceSnapshot::default());
        Self { client, session, raw: Mutex::new(RawState::default()), snapshot }
    }

    pub fn subscribe(&self) -> watch::Receiver<BalanceSnapshot> {
        self.snapshot.subscribe()
    }

    pub fn snapshot(&self) -> BalanceSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Re-read every tracked balance for the connected account.
    ///
    /// With no account connected this publishes the zero snapshot without reading.
    pub async fn refresh(&self) {
        let session = self.session.borrow().clone();
        let Some(owner) = session.owner() else {
            self.reset(None, session.epoch());
            return;
        };

        let client = &self.client;
        let (paza, paza_frozen, pusd, usdt, usdc) = tokio::join!(
            client.balance_of(TokenSymbol::Paza, owner),
            client.frozen_amount(owner),
            client.balance_of(TokenSymbol::Pusd, owner),
            client.balance_of(TokenSymbol::Usdt, owner),
            client.balance_of(TokenSymbol::Usdc, owner),
        );

        if self.session.borrow().epoch() != session.epoch() {
            debug!(%owner, "discarding balance reads for a previous session");
            return;
        }

        let snapshot = {
            let mut state = self.raw.lock();
            if state.epoch != session.epoch() || state.owner != Some(owner) {
                *state = RawState { owner: Some(owner), epoch: session.epoch(), ..Default::default() };
            }
            apply(&mut state.raw.paza, paza, "PAZA");
            apply(&mut state.raw.paza_frozen, paza_frozen, "PAZA frozen");
            apply(&mut state.raw.pusd, pusd, "PUSD");
            apply(&mut state.raw.usdt, usdt, "USDT");
            apply(&mut state.raw.usdc, usdc, "USDC");
            BalanceSnapshot::derive(state.owner, state.epoch, &state.raw)
        };

        debug!(%owner, ?snapshot, "balances refreshed");
        self.snapshot.send_replace(snapshot);
    }

    fn reset(&self, owner: Option<Address>, epoch: u64) {
        let mut state = self.raw.lock();
        *state = RawState { owner, epoch, ..Default::default() };
        self.snapshot.send_replace(BalanceSnapshot::derive(owner, epoch, &state.raw));
    }

    /// Follow the session: on every connect or disconnect, drop the previous
    /// account's reads and refresh. Runs until the connection manager is dropped.
    pub async fn watch_session(&self) {
        let mut session = self.session.clone();
        let mut last_epoch = session.borrow_and_update().epoch();
        self.refresh().await;

        while session.changed().await.is_ok() {
            let (epoch, owner) = {
                let current = session.borrow_and_update();
                (current.epoch(), current.owner())
            };
            if epoch == last_epoch {
                continue;
            }
            last_epoch = epoch;
            self.reset(owner, epoch);
            self.refresh().await;
        }
    }
}

fn apply(slot: &mut Option<u128>, read: Result<u128>, label: &str) {
    match read {
        Ok(value) => *slot = Some(value),
        Err(e) => warn!(token = label, error = %e, "balance read failed, keeping previous value"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;
    use lib_core::AppError;
    use lib_evm::WalletKind;
    use std::time::Duration;

    #[test]
    fn test_derive_available() {
        let raw = RawBalances {
            paza: Some(10_000_000),
            paza_frozen: Some(4_000_000),
            ..Default::default()
        };
        let snapshot = BalanceSnapshot::derive(Some(Address::repeat_byte(1)), 1, &raw);
        assert_eq!(snapshot.paza_available, 6_000_000);
        assert_eq!(snapshot.available(TokenSymbol::Paza), 6_000_000);
        assert_eq!(snapshot.balance(TokenSymbol::Paza), 10_000_000);
    }

    #[test]
    fn test_available_floors_at_zero() {
        let raw = RawBalances { paza: Some(1), paza_frozen: Some(5), ..Default::default() };
        let snapshot = BalanceSnapshot::derive(Some(Address::repeat_byte(1)), 1, &raw);
        assert_eq!(snapshot.paza_available, 0);
    }

    #[test]
    fn test_unread_frozen_means_nothing_available() {
        let raw = RawBalances { paza: Some(10_000_000), paza_frozen: None, ..Default::default() };
        let snapshot = BalanceSnapshot::derive(Some(Address::repeat_byte(1)), 1, &raw);
        assert_eq!(snapshot.paza, 10_000_000);
        assert_eq!(snapshot.paza_frozen, 0);
        assert_eq!(snapshot.available(TokenSymbol::Paza), 0);
    }

    #[test]
    fn test_disconnected_snapshot_is_zero() {
        let raw = RawBalances { usdt: Some(99), ..Default::default() };
        let snapshot = BalanceSnapshot::derive(None, 3, &raw);
        assert_eq!(snapshot.usdt, 0);
        assert_eq!(snapshot.view().usdt, "0.00");
    }

    #[test]
    fn test_view_truncates() {
        let raw = RawBalances { pusd: Some(1_234_567_891), ..Default::default() };
        let view = BalanceSnapshot::derive(Some(Address::repeat_byte(1)), 1, &raw).view();
        assert_eq!(view.pusd, "1,234.56");
    }

    #[tokio::test]
    async fn test_refresh_reads_all_tokens() {
        let h = Harness::connected().await;
        h.fund(TokenSymbol::Usdt, 100_000_000);
        h.fund(TokenSymbol::Paza, 20_000_000);
        h.freeze(5_000_000);

        h.balances.refresh().await;

        let snapshot = h.balances.snapshot();
        assert_eq!(snapshot.owner, Some(h.sdk.account()));
        assert_eq!(snapshot.usdt, 100_000_000);
        assert_eq!(snapshot.paza_available, 15_000_000);
        assert_eq!(h.sdk.read_count(), 5);
    }

    #[tokio::test]
    async fn test_refresh_reads_concurrently() {
        let h = Harness::connected().await;
        h.fund(TokenSymbol::Pusd, 8_000_000);
        let gate = h.sdk.gate_reads();

        let balances = h.balances.clone();
        let refresh = tokio::spawn(async move { balances.refresh().await });

        tokio::time::timeout(Duration::from_secs(5), async {
            while h.sdk.read_count() < 5 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("all five reads in flight before any is released");
        assert!(!refresh.is_finished());

        gate.add_permits(4);
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(!refresh.is_finished());
        assert_eq!(h.balances.snapshot(), BalanceSnapshot::default());

        gate.add_permits(1);
        refresh.await.unwrap();
        assert_eq!(h.balances.snapshot().pusd, 8_000_000);
        assert_eq!(h.sdk.read_count(), 5);
    }

    #[tokio::test]
    async fn test_failed_frozen_read_leaves_nothing_available() {
        let h = Harness::connected().await;
        h.fund(TokenSymbol::Paza, 20_000_000);
        h.sdk.fail_read(
            h.token(TokenSymbol::Paza),
            "frozenAmount",
            AppError::Rpc("timeout".to_string()),
        );

        h.balances.refresh().await;

        let snapshot = h.balances.snapshot();
        assert_eq!(snapshot.paza, 20_000_000);
        assert_eq!(snapshot.paza_available, 0);
    }

    #[tokio::test]
    async fn test_refresh_without_wallet_does_not_read() {
        let h = Harness::new();
        h.balances.refresh().await;

        assert_eq!(h.balances.snapshot(), BalanceSnapshot::default());
        assert_eq!(h.sdk.read_count(), 0);
    }

    #[tokio::test]
    async fn test_refresh_is_idempotent() {
        let h = Harness::connected().await;
        h.fund(TokenSymbol::Pusd, 42_000_000);

        h.balances.refresh().await;
        let first = h.balances.snapshot();
        h.balances.refresh().await;
        assert_eq!(h.balances.snapshot(), first);
    }

    #[tokio::test]
    async fn test_failed_read_keeps_previous_value() {
        let h = Harness::connected().await;
        h.fund(TokenSymbol::Usdc, 7_000_000);
        h.fund(TokenSymbol::Pusd, 1_000_000);
        h.balances.refresh().await;

        h.fund(TokenSymbol::Usdc, 9_000_000);
        h.fund(TokenSymbol::Pusd, 2_000_000);
        h.sdk.fail_read(
            h.token(TokenSymbol::Usdc),
            "balanceOf",
            AppError::Rpc("timeout".to_string()),
        );
        h.balances.refresh().await;

        let snapshot = h.balances.snapshot();
        assert_eq!(snapshot.usdc, 7_000_000);
        assert_eq!(snapshot.pusd, 2_000_000);
    }

    #[tokio::test]
    async fn test_watch_session_tracks_connect_and_disconnect() {
        let h = Harness::new();
        h.fund(TokenSymbol::Usdt, 3_000_000);

        let balances = h.balances.clone();
        tokio::spawn(async move { balances.watch_session().await });
        let mut rx = h.balances.subscribe();

        h.connection.connect_wallet(WalletKind::Metamask).await.unwrap();
        rx.wait_for(|s| s.usdt == 3_000_000).await.unwrap();

        h.connection.disconnect_wallet().await;
        let snapshot = rx.wait_for(|s| s.owner.is_none() && s.epoch == 2).await.unwrap().clone();
        assert_eq!(snapshot.usdt, 0);
    }
}
