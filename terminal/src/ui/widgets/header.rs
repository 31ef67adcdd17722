//! # Header Widget
//!
//! Connected address, PUSD balance, explorer link, and the disconnect hint.

use lib_core::{explorer, Network};
use lib_wallet::WalletSession;
use shared::dto::BalanceView;
use shared::utils::format_address;

pub fn render_header(session: &WalletSession, balances: &BalanceView, network: Network) -> String {
    let title = format!("PAZA Wallet · {}", network.name());
    if session.is_connecting() {
        return format!("{title}\nConnecting...");
    }
    if !session.is_connected() {
        return format!("{title}\nNot connected · type 'connect' to choose a wallet");
    }

    let address = session.address();
    format!(
        "{title}\n{} · {} PUSD · {}\n{} · type 'disconnect' to sign out",
        format_address(&address, 6, 4),
        balances.pusd,
        session.kind().map(|k| k.display_name()).unwrap_or_default(),
        explorer::address_url(network, &address),
    )
}
