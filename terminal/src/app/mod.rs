//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the input loop, background tasks, and
//! presentation state.
//!
//! ```text
//! stdin lines ──parse──▶ Command ──execute──▶ handlers ──spawn──▶ tasks
//!                                                                  │
//!       screen ◀──handle_event── AppEvent ◀──async_channel─────────┘
//!
//! buy / send status watch ──render_status──▶ progress, result, notice
//! ```
//!
//! Wallet state (session, balances, flow status) lives in [`PazaWallet`].
//! [`AppState`] only holds what the terminal itself needs: the active tab and
//! whether the wallet selector is open. Locks on it are held briefly and never
//! across an await.

pub mod commands;
mod event_handler;
pub mod events;
mod handlers;
pub mod state;
mod tasks;

pub use commands::{Command, CommandError};
pub use events::AppEvent;
pub use state::{AppState, Tab};

use crate::ui;
use crate::ui::widgets::{render_notice, render_status};
use async_channel::{unbounded, Receiver, Sender};
use handlers::{navigation, transfer, wallet as wallet_handlers};
use lib_wallet::{PazaWallet, TxStatus};
use parking_lot::RwLock;
use shared::dto::Notice;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{debug, info};

pub struct App {
    pub wallet: Arc<PazaWallet>,
    pub state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    event_rx: Receiver<AppEvent>,
}

impl App {
    pub fn new(wallet: Arc<PazaWallet>) -> Self {
        let (event_tx, event_rx) = unbounded();
        Self { wallet, state: Arc::new(RwLock::new(AppState::default())), event_tx, event_rx }
    }

    /// Render the full screen for the current state.
    pub fn screen(&self) -> String {
        let state = self.state.read().clone();
        ui::render_screen(&self.wallet, &state)
    }

    /// Apply one command. Returns the text to print, if any.
    pub fn execute(&self, command: Command) -> Option<String> {
        debug!(command = ?command, "Executing command");
        let tab = self.state.read().tab;

        match command {
            Command::Help => Some(ui::HELP.to_string()),
            Command::Show => Some(self.screen()),
            Command::Connect(None) => {
                navigation::open_wallet_selector(&self.state);
                Some(self.screen())
            }
            Command::Connect(Some(kind)) => Some(wallet_handlers::handle_connect(
                &self.wallet,
                &self.state,
                kind,
                self.event_tx.clone(),
            )),
            Command::Disconnect => {
                Some(wallet_handlers::handle_disconnect(&self.wallet, self.event_tx.clone()))
            }
            Command::Tab(tab) => {
                navigation::switch_tab(&self.state, tab);
                Some(self.screen())
            }
            Command::Refresh => {
                tasks::refresh_balances(self.wallet.clone(), self.event_tx.clone());
                Some("Refreshing balances...".to_string())
            }
            Command::Pay(amount) => {
                self.wallet.buy.set_pay_amount(&amount);
                self.show_tab(Tab::Buy)
            }
            Command::Coin(coin) => {
                self.wallet.buy.set_stablecoin(coin);
                self.show_tab(Tab::Buy)
            }
            Command::Max => match transfer::handle_max(&self.wallet, tab) {
                Ok(()) => Some(self.screen()),
                Err(message) => Some(message),
            },
            Command::Buy => transfer::handle_buy(&self.wallet, self.event_tx.clone()),
            Command::To(recipient) => {
                self.wallet.send.set_recipient(&recipient);
                self.show_tab(Tab::Send)
            }
            Command::Amount(amount) => {
                self.wallet.send.set_amount(&amount);
                self.show_tab(Tab::Send)
            }
            Command::Token(token) => {
                self.wallet.send.set_token(token);
                self.show_tab(Tab::Send)
            }
            Command::Scan(payload) => {
                self.wallet.send.apply_scanned_payload(&payload);
                self.show_tab(Tab::Send)
            }
            Command::Send => transfer::handle_send(&self.wallet, self.event_tx.clone()),
            Command::Dismiss => {
                self.wallet.buy.dismiss();
                self.wallet.send.dismiss();
                Some(self.screen())
            }
            Command::Quit => None,
        }
    }

    fn show_tab(&self, tab: Tab) -> Option<String> {
        navigation::switch_tab(&self.state, tab);
        Some(self.screen())
    }

    /// Read commands from stdin until `quit` or end of input.
    pub async fn run(self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut buy_status = self.wallet.buy.subscribe();
        let mut send_status = self.wallet.send.subscribe();

        println!("{}\n\nType 'help' for commands.", self.screen());
        info!("Input loop started");

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match line.parse::<Command>() {
                        Ok(Command::Quit) => break,
                        Ok(command) => {
                            if let Some(output) = self.execute(command) {
                                println!("{output}");
                            }
                        }
                        Err(e) => println!("{}", render_notice(&Notice::error(e.to_string()))),
                    }
                }
                Ok(event) = self.event_rx.recv() => {
                    println!("{}", self.handle_event(event));
                }
                Ok(()) = buy_status.changed() => print_status(&mut buy_status),
                Ok(()) = send_status.changed() => print_status(&mut send_status),
            }
        }

        info!("Input loop stopped");
        Ok(())
    }
}

fn print_status(rx: &mut watch::Receiver<TxStatus>) {
    let status = rx.borrow_and_update().clone();
    if let Some(text) = render_status(&status) {
        println!("{text}");
    }
}
