//! # Buy and Send Handlers
//!
//! Form edits apply immediately. Submissions are checked up front so a
//! disabled action explains itself instead of starting a task.

use crate::app::events::AppEvent;
use crate::app::state::Tab;
use crate::app::tasks;
use crate::ui::widgets::render_notice;
use async_channel::Sender;
use lib_wallet::{PazaWallet, ValidationError};
use std::sync::Arc;

pub(crate) fn handle_buy(wallet: &Arc<PazaWallet>, event_tx: Sender<AppEvent>) -> Option<String> {
    if wallet.buy.status().is_transacting() {
        return Some(render_notice(&ValidationError::AlreadyTransacting.notice()));
    }
    if let Err(err) = wallet.buy.validate() {
        return Some(render_notice(&err.notice()));
    }
    tasks::buy(wallet.clone(), event_tx);
    None
}

pub(crate) fn handle_send(wallet: &Arc<PazaWallet>, event_tx: Sender<AppEvent>) -> Option<String> {
    if wallet.send.status().is_transacting() {
        return Some(render_notice(&ValidationError::AlreadyTransacting.notice()));
    }
    if let Err(err) = wallet.send.validate() {
        return Some(render_notice(&err.notice()));
    }
    tasks::send_tokens(wallet.clone(), event_tx);
    None
}

/// Fill the active tab's amount with the full available balance.
pub(crate) fn handle_max(wallet: &PazaWallet, tab: Tab) -> Result<(), String> {
    match tab {
        Tab::Buy => wallet.buy.set_max(),
        Tab::Send => wallet.send.set_max(),
        Tab::Receive => return Err("'max' applies to the Buy and Send tabs".to_string()),
    }
    Ok(())
}
