//! # Wallet Core
//!
//! Wires the connection manager, balance aggregator, and both flows around one
//! SDK and one contract client. Front ends hold a single [`PazaWallet`].

use crate::balances::BalanceAggregator;
use crate::flows::{BuyFlow, SendFlow};
use crate::session::ConnectionManager;
use lib_core::{explorer, Config, Network, Result};
use lib_evm::{PazaClient, WalletSdk};
use std::sync::Arc;
use tokio::task::JoinHandle;

pub struct PazaWallet {
    pub connection: Arc<ConnectionManager>,
    pub balances: Arc<BalanceAggregator>,
    pub buy: Arc<BuyFlow>,
    pub send: Arc<SendFlow>,
    network: Network,
}

impl PazaWallet {
    /// Build the wallet core from validated configuration.
    pub fn new(sdk: Arc<dyn WalletSdk>, config: &Config) -> Result<Self> {
        let client = PazaClient::new(sdk.clone(), config.registry()?, config.network);
        let connection = Arc::new(ConnectionManager::new(sdk));
        let balances = Arc::new(BalanceAggregator::new(client.clone(), connection.subscribe()));
        let buy = Arc::new(BuyFlow::new(
            client.clone(),
            connection.subscribe(),
            balances.clone(),
            config.notice_timeout(),
        ));
        let send = Arc::new(SendFlow::new(
            client,
            connection.subscribe(),
            balances.clone(),
            config.notice_timeout(),
        ));

        Ok(Self { connection, balances, buy, send, network: config.network })
    }

    /// Start following the session so balances refresh on connect and reset on disconnect.
    pub fn start(&self) -> JoinHandle<()> {
        let balances = self.balances.clone();
        tokio::spawn(async move { balances.watch_session().await })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Explorer link for the connected address, `None` when disconnected.
    pub fn address_url(&self) -> Option<String> {
        let session = self.connection.current();
        session
            .is_connected()
            .then(|| explorer::address_url(self.network, &session.address()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::config::ContractAddresses;
    use lib_core::TokenSymbol;
    use lib_evm::mock::MockWalletSdk;
    use lib_evm::{Address, WalletKind};

    fn config() -> Config {
        let addr = |b: u8| Address::repeat_byte(b).to_string();
        Config {
            client_id: "test-client".to_string(),
            network: Network::Mainnet,
            rpc_url: None,
            wallet_rpc_url: "http://127.0.0.1:1248".to_string(),
            contracts: ContractAddresses {
                paza_token: addr(0x11),
                pusd_token: addr(0x22),
                usdt_token: addr(0x33),
                usdc_token: addr(0x44),
                sale_contract: addr(0x55),
            },
            confirmation_timeout_secs: 120,
            notice_timeout_secs: 7,
        }
    }

    #[tokio::test]
    async fn test_connect_refreshes_balances() {
        let sdk = Arc::new(MockWalletSdk::new(Address::repeat_byte(0xaa)));
        sdk.set_balance(Address::repeat_byte(0x22), sdk.account(), 12_340_000);
        let wallet = PazaWallet::new(sdk.clone(), &config()).unwrap();
        let watcher = wallet.start();

        assert_eq!(wallet.address_url(), None);
        wallet.connection.connect_wallet(WalletKind::Base).await.unwrap();

        let mut rx = wallet.balances.subscribe();
        let view = rx.wait_for(|s| s.pusd > 0).await.unwrap().view();
        assert_eq!(view.pusd, "12.34");
        assert_eq!(wallet.balances.snapshot().balance(TokenSymbol::Pusd), 12_340_000);
        assert_eq!(
            wallet.address_url(),
            Some(format!("https://basescan.org/address/{}", sdk.account()))
        );
        watcher.abort();
    }

    #[test]
    fn test_bad_address_is_config_error() {
        let sdk = Arc::new(MockWalletSdk::new(Address::ZERO));
        let mut config = config();
        config.contracts.usdc_token = "not-an-address".to_string();
        assert!(matches!(
            PazaWallet::new(sdk, &config),
            Err(lib_core::AppError::Config(_))
        ));
    }
}
