//! # Navigation Handlers

use crate::app::state::{AppState, Tab};
use parking_lot::RwLock;

pub(crate) fn switch_tab(state: &RwLock<AppState>, tab: Tab) {
    let mut state = state.write();
    state.tab = tab;
    state.show_wallet_selector = false;
}

pub(crate) fn open_wallet_selector(state: &RwLock<AppState>) {
    state.write().show_wallet_selector = true;
}

pub(crate) fn close_wallet_selector(state: &RwLock<AppState>) {
    state.write().show_wallet_selector = false;
}
