//! Receive tab.

use crate::ui::widgets::render_qr;
use shared::utils::format_address;

/// QR code and shortened form of `address`; a connect hint when empty.
pub fn render(address: &str) -> String {
    if address.is_empty() {
        return "Connect a wallet to receive PAZA.".to_string();
    }
    format!(
        "Scan to send PAZA to this wallet\n{}\n{}\n{}",
        render_qr(address),
        format_address(address, 6, 4),
        address
    )
}
