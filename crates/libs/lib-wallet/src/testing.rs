//! Wiring shared by the flow and aggregator tests.

use crate::balances::BalanceAggregator;
use crate::flows::{BuyFlow, SendFlow};
use crate::session::ConnectionManager;
use lib_core::{ContractRegistry, Network, TokenSymbol};
use lib_evm::mock::MockWalletSdk;
use lib_evm::{Address, PazaClient, WalletKind};
use std::sync::Arc;
use std::time::Duration;

pub(crate) struct Harness {
    pub sdk: Arc<MockWalletSdk>,
    pub registry: ContractRegistry,
    pub connection: Arc<ConnectionManager>,
    pub balances: Arc<BalanceAggregator>,
    pub buy: BuyFlow,
    pub send: SendFlow,
}

impl Harness {
    pub fn new() -> Self {
        let sdk = Arc::new(MockWalletSdk::new(Address::repeat_byte(0xaa)));
        let registry = ContractRegistry::new(
            Address::repeat_byte(0x11),
            Address::repeat_byte(0x22),
            Address::repeat_byte(0x33),
            Address::repeat_byte(0x44),
            Address::repeat_byte(0x55),
        );
        let client = PazaClient::new(sdk.clone(), registry.clone(), Network::Testnet);
        let connection = Arc::new(ConnectionManager::new(sdk.clone()));
        let balances = Arc::new(BalanceAggregator::new(client.clone(), connection.subscribe()));
        let notice_timeout = Duration::from_secs(7);
        let buy =
            BuyFlow::new(client.clone(), connection.subscribe(), balances.clone(), notice_timeout);
        let send = SendFlow::new(client, connection.subscribe(), balances.clone(), notice_timeout);
        Self { sdk, registry, connection, balances, buy, send }
    }

    pub async fn connected() -> Self {
        let harness = Self::new();
        harness
            .connection
            .connect_wallet(WalletKind::Metamask)
            .await
            .expect("mock connect");
        harness
    }

    pub fn token(&self, symbol: TokenSymbol) -> Address {
        self.registry.token(symbol).address
    }

    pub fn fund(&self, symbol: TokenSymbol, raw: u128) {
        self.sdk.set_balance(self.token(symbol), self.sdk.account(), raw);
    }

    pub fn freeze(&self, raw: u128) {
        self.sdk.set_frozen(self.token(TokenSymbol::Paza), self.sdk.account(), raw);
    }
}
