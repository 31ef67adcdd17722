//! # User Interface
//!
//! Text rendering for the wallet terminal. Nothing here holds state: every
//! function renders from the wallet core and [`AppState`] on each call.
//!
//! - [`widgets`]: header, tab bar, notices, result panel, QR code
//! - [`screens`]: one module per tab plus the wallet selector

pub mod screens;
pub mod widgets;

use crate::app::state::{AppState, Tab};
use lib_wallet::PazaWallet;

pub const HELP: &str = "\
Commands
  connect [wallet]      open the wallet selector or connect directly
  disconnect            end the wallet session
  tab <buy|send|receive>
  refresh               reload balances
 Buy
  pay <amount>          amount of stablecoin to spend
  coin <pusd|usdt|usdc> stablecoin to pay with
  max                   spend the full balance
  buy                   approve and purchase
 Send
  token <paza|pusd|usdt|usdc>
  to <address>          recipient
  scan <payload>        recipient from a scanned QR code
  amount <value>
  max                   send the full available balance
  send                  submit the transfer
 Other
  dismiss               close the result panel
  show                  redraw the screen
  quit";

/// Full screen for the current state.
pub fn render_screen(wallet: &PazaWallet, state: &AppState) -> String {
    let session = wallet.connection.current();
    let balances = wallet.balances.snapshot();
    let header = widgets::render_header(&session, &balances.view(), wallet.network());

    if state.show_wallet_selector {
        return format!("{header}\n\n{}", screens::wallet_selector::render());
    }

    let body = match state.tab {
        Tab::Buy => {
            let busy = wallet.buy.status().is_transacting();
            screens::buy::render(&wallet.buy.form(), &balances, &wallet.buy.validate(), busy)
        }
        Tab::Send => {
            let busy = wallet.send.status().is_transacting();
            screens::send::render(&wallet.send.form(), &balances, &wallet.send.validate(), busy)
        }
        Tab::Receive => screens::receive::render(&session.address()),
    };

    format!("{header}\n\n{}\n\n{body}", widgets::render_tab_bar(state.tab))
}
