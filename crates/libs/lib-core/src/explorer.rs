//! Block explorer links for the configured network.

use crate::network::Network;

/// `https://<explorer-host>/tx/<hash>`
pub fn tx_url(network: Network, tx_hash: &str) -> String {
    format!("https://{}/tx/{}", network.explorer_host(), tx_hash)
}

/// `https://<explorer-host>/address/<address>`
pub fn address_url(network: Network, address: &str) -> String {
    format!("https://{}/address/{}", network.explorer_host(), address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_links() {
        assert_eq!(tx_url(Network::Mainnet, "0xabc"), "https://basescan.org/tx/0xabc");
        assert_eq!(
            tx_url(Network::Testnet, "0xabc"),
            "https://sepolia.basescan.org/tx/0xabc"
        );
        assert_eq!(
            address_url(Network::Mainnet, "0x1234"),
            "https://basescan.org/address/0x1234"
        );
    }
}
