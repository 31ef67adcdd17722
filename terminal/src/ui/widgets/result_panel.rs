//! # Result Panel Widget
//!
//! Confirmed transaction summary, shown until the user dismisses it.

use shared::dto::TransactionResult;

pub fn render_result_panel(result: &TransactionResult) -> String {
    format!(
        "┌ Transaction confirmed\n│ {}\n│ Tx: {}\n│ {}\n└ type 'dismiss' to close",
        result.message,
        result.short_hash(),
        result.explorer_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_shows_short_hash_and_link() {
        let hash = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";
        let result = TransactionResult {
            message: "Successfully sent 1 PAZA to 0x742d...dE8A!".to_string(),
            transaction_hash: hash.to_string(),
            explorer_url: format!("https://basescan.org/tx/{hash}"),
        };
        let panel = render_result_panel(&result);
        assert!(panel.contains("Tx: 0x5c504ed4...a1b22060"));
        assert!(panel.contains("https://basescan.org/tx/0x5c50"));
    }
}
