//! # Wallet Handlers
//!
//! Connect and disconnect. Both only start the background task; the result
//! arrives later as an [`AppEvent`](crate::app::AppEvent).

use crate::app::events::AppEvent;
use crate::app::handlers::navigation;
use crate::app::state::AppState;
use crate::app::tasks;
use async_channel::Sender;
use lib_evm::WalletKind;
use lib_wallet::PazaWallet;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

pub(crate) fn handle_connect(
    wallet: &Arc<PazaWallet>,
    state: &RwLock<AppState>,
    kind: WalletKind,
    event_tx: Sender<AppEvent>,
) -> String {
    navigation::close_wallet_selector(state);

    let session = wallet.connection.current();
    if session.is_connecting() {
        return "A wallet connection is already in progress".to_string();
    }
    if session.is_connected() {
        return "Already connected. Type 'disconnect' first to switch wallets.".to_string();
    }

    info!(wallet = %kind, "Connecting wallet");
    tasks::connect(wallet.clone(), kind, event_tx);
    format!("Connecting to {}...", kind.display_name())
}

pub(crate) fn handle_disconnect(wallet: &Arc<PazaWallet>, event_tx: Sender<AppEvent>) -> String {
    if !wallet.connection.current().is_connected() {
        return "No wallet connected".to_string();
    }
    tasks::disconnect(wallet.clone(), event_tx);
    "Disconnecting...".to_string()
}
