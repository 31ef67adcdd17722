//! # Application State
//!
//! Presentation-only state. Wallet session, balances, and flow status live in
//! `lib_wallet` and are read from there on every render.

use std::fmt;
use std::str::FromStr;

/// Swap card tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Buy,
    Send,
    Receive,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Buy, Tab::Send, Tab::Receive];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Buy => "Buy",
            Tab::Send => "Send",
            Tab::Receive => "Receive",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(Tab::Buy),
            "send" => Ok(Tab::Send),
            "receive" => Ok(Tab::Receive),
            other => Err(format!("Unknown tab '{other}' (buy, send, receive)")),
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Active tab of the swap card
    pub tab: Tab,
    /// Wallet selector modal is open
    pub show_wallet_selector: bool,
}
