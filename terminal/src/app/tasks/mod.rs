//! # Background Tasks
//!
//! Wallet operations that await the network run on Tokio tasks and report
//! back through the event channel. The input loop never blocks on them.

use crate::app::events::AppEvent;
use async_channel::Sender;
use lib_evm::WalletKind;
use lib_wallet::PazaWallet;
use std::sync::Arc;
use tokio::spawn;
use tracing::{debug, warn};

pub(crate) fn connect(wallet: Arc<PazaWallet>, kind: WalletKind, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = wallet.connection.connect_wallet(kind).await;
        if let Err(e) = &result {
            warn!(wallet = %kind, error = %e, "Wallet connection failed");
        }
        send(&event_tx, AppEvent::Connected(result)).await;
    });
}

pub(crate) fn disconnect(wallet: Arc<PazaWallet>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        wallet.connection.disconnect_wallet().await;
        send(&event_tx, AppEvent::Disconnected).await;
    });
}

pub(crate) fn buy(wallet: Arc<PazaWallet>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = wallet.buy.submit().await;
        send(&event_tx, AppEvent::BuyFinished(result)).await;
    });
}

pub(crate) fn send_tokens(wallet: Arc<PazaWallet>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = wallet.send.submit().await;
        send(&event_tx, AppEvent::SendFinished(result)).await;
    });
}

pub(crate) fn refresh_balances(wallet: Arc<PazaWallet>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        wallet.balances.refresh().await;
        send(&event_tx, AppEvent::BalancesRefreshed).await;
    });
}

async fn send(event_tx: &Sender<AppEvent>, event: AppEvent) {
    // Closed only when the input loop has exited.
    if event_tx.send(event).await.is_err() {
        debug!("Event channel closed, dropping task result");
    }
}
