//! # PAZA Contract Client
//!
//! Token-level operations on top of a [`WalletSdk`]:
//! - Balance and frozen-amount reads
//! - `approve`, `buy`, and `transfer` submissions, each waited on until mined
//!
//! Amounts are raw integers in the token's smallest unit (6 decimals).

use crate::abi::{decode_uint256, to_u128, IPazaSale, IPazaToken};
use crate::sdk::WalletSdk;
use crate::types::ContractCall;
use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_sol_types::SolCall;
use lib_core::{explorer, ContractRegistry, Network, Result, Stablecoin, TokenSymbol};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Contract client bound to one network and one set of deployed contracts.
#[derive(Clone)]
pub struct PazaClient {
    sdk: Arc<dyn WalletSdk>,
    registry: ContractRegistry,
    network: Network,
}

impl PazaClient {
    pub fn new(sdk: Arc<dyn WalletSdk>, registry: ContractRegistry, network: Network) -> Self {
        Self { sdk, registry, network }
    }

    pub fn sdk(&self) -> &Arc<dyn WalletSdk> {
        &self.sdk
    }

    pub fn registry(&self) -> &ContractRegistry {
        &self.registry
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Block explorer link for a transaction on this client's network.
    pub fn explorer_tx_url(&self, tx_hash: TxHash) -> String {
        explorer::tx_url(self.network, &tx_hash.to_string())
    }

    /// Raw `balanceOf(owner)` for `token`.
    pub async fn balance_of(&self, token: TokenSymbol, owner: Address) -> Result<u128> {
        let call = balance_of_call(self.registry.token(token).address, owner);
        let data = self.sdk.read(&call).await?;
        to_u128(decode_uint256(&data)?)
    }

    /// Raw PAZA amount frozen for `owner`.
    pub async fn frozen_amount(&self, owner: Address) -> Result<u128> {
        let call = frozen_amount_call(self.registry.token(TokenSymbol::Paza).address, owner);
        let data = self.sdk.read(&call).await?;
        to_u128(decode_uint256(&data)?)
    }

    /// Approve `spender` to pull `amount` of `token` from `from`.
    #[instrument(skip(self))]
    pub async fn approve(
        &self,
        from: Address,
        token: TokenSymbol,
        spender: Address,
        amount: u128,
    ) -> Result<TxHash> {
        let call = approve_call(self.registry.token(token).address, spender, amount);
        self.submit(from, call).await
    }

    /// Buy PAZA with `amount` of `stablecoin`. Requires a prior approval of the sale contract.
    #[instrument(skip(self))]
    pub async fn buy(&self, from: Address, amount: u128, stablecoin: Stablecoin) -> Result<TxHash> {
        let call = buy_call(self.registry.sale_contract(), amount, stablecoin);
        self.submit(from, call).await
    }

    /// Transfer `amount` of `token` to `to`.
    #[instrument(skip(self))]
    pub async fn transfer(
        &self,
        from: Address,
        token: TokenSymbol,
        to: Address,
        amount: u128,
    ) -> Result<TxHash> {
        let call = transfer_call(self.registry.token(token).address, to, amount);
        self.submit(from, call).await
    }

    async fn submit(&self, from: Address, call: ContractCall) -> Result<TxHash> {
        debug!(method = call.method, contract = %call.contract, "submitting transaction");
        let tx_hash = self.sdk.write(from, &call).await?;
        info!(method = call.method, %tx_hash, "transaction submitted, waiting for confirmation");
        self.sdk.wait_for_confirmation(tx_hash).await?;
        info!(method = call.method, %tx_hash, "transaction confirmed");
        Ok(tx_hash)
    }
}

fn balance_of_call(token: Address, account: Address) -> ContractCall {
    ContractCall {
        contract: token,
        method: "balanceOf",
        data: Bytes::from(IPazaToken::balanceOfCall { account }.abi_encode()),
    }
}

fn frozen_amount_call(token: Address, account: Address) -> ContractCall {
    ContractCall {
        contract: token,
        method: "frozenAmount",
        data: Bytes::from(IPazaToken::frozenAmountCall { account }.abi_encode()),
    }
}

fn approve_call(token: Address, spender: Address, amount: u128) -> ContractCall {
    ContractCall {
        contract: token,
        method: "approve",
        data: Bytes::from(IPazaToken::approveCall { spender, amount: U256::from(amount) }.abi_encode()),
    }
}

fn buy_call(sale: Address, amount: u128, stablecoin: Stablecoin) -> ContractCall {
    ContractCall {
        contract: sale,
        method: "buy",
        data: Bytes::from(
            IPazaSale::buyCall { stablecoinAmount: U256::from(amount), stablecoin: stablecoin.index() }
                .abi_encode(),
        ),
    }
}

fn transfer_call(token: Address, to: Address, amount: u128) -> ContractCall {
    ContractCall {
        contract: token,
        method: "transfer",
        data: Bytes::from(IPazaToken::transferCall { to, value: U256::from(amount) }.abi_encode()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockWalletSdk, SdkCall};
    use lib_core::AppError;

    fn registry() -> ContractRegistry {
        ContractRegistry::new(
            Address::repeat_byte(0x11),
            Address::repeat_byte(0x22),
            Address::repeat_byte(0x33),
            Address::repeat_byte(0x44),
            Address::repeat_byte(0x55),
        )
    }

    fn client() -> (Arc<MockWalletSdk>, PazaClient) {
        let sdk = Arc::new(MockWalletSdk::new(Address::repeat_byte(0xaa)));
        let client = PazaClient::new(sdk.clone(), registry(), Network::Testnet);
        (sdk, client)
    }

    #[tokio::test]
    async fn test_balance_of() {
        let (sdk, client) = client();
        let owner = sdk.account();
        sdk.set_balance(Address::repeat_byte(0x33), owner, 50_000_000);

        assert_eq!(client.balance_of(TokenSymbol::Usdt, owner).await.unwrap(), 50_000_000);
        assert_eq!(client.balance_of(TokenSymbol::Usdc, owner).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_frozen_amount_reads_paza_contract() {
        let (sdk, client) = client();
        let owner = sdk.account();
        sdk.set_frozen(Address::repeat_byte(0x11), owner, 1_000_000);

        assert_eq!(client.frozen_amount(owner).await.unwrap(), 1_000_000);
        assert_eq!(
            sdk.calls(),
            vec![SdkCall::Read {
                contract: Address::repeat_byte(0x11),
                method: "frozenAmount",
                owner
            }]
        );
    }

    #[tokio::test]
    async fn test_buy_targets_sale_contract_with_index() {
        let (sdk, client) = client();
        let from = sdk.account();
        client.buy(from, 10_000_000, Stablecoin::Usdc).await.unwrap();

        let calls = sdk.calls();
        let SdkCall::Write { contract, method, data, .. } = &calls[0] else {
            panic!("expected a write, got {calls:?}");
        };
        assert_eq!(*contract, Address::repeat_byte(0x55));
        assert_eq!(*method, "buy");
        let decoded = IPazaSale::buyCall::abi_decode(data).unwrap();
        assert_eq!(decoded.stablecoinAmount, U256::from(10_000_000u64));
        assert_eq!(decoded.stablecoin, 2);
        assert!(matches!(calls[1], SdkCall::WaitForConfirmation(_)));
    }

    #[tokio::test]
    async fn test_approve_encodes_spender() {
        let (sdk, client) = client();
        let from = sdk.account();
        let spender = client.registry().sale_contract();
        client.approve(from, TokenSymbol::Pusd, spender, 5_000_000).await.unwrap();

        let calls = sdk.calls();
        let SdkCall::Write { contract, data, .. } = &calls[0] else {
            panic!("expected a write, got {calls:?}");
        };
        assert_eq!(*contract, Address::repeat_byte(0x22));
        let decoded = IPazaToken::approveCall::abi_decode(data).unwrap();
        assert_eq!(decoded.spender, spender);
        assert_eq!(decoded.amount, U256::from(5_000_000u64));
    }

    #[tokio::test]
    async fn test_failed_write_skips_confirmation() {
        let (sdk, client) = client();
        sdk.fail_write("transfer", AppError::Transaction("User rejected the request".to_string()));

        let err = client
            .transfer(sdk.account(), TokenSymbol::Paza, Address::repeat_byte(0xbb), 1)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Transaction("User rejected the request".to_string()));
        assert!(!sdk.calls().iter().any(|c| matches!(c, SdkCall::WaitForConfirmation(_))));
    }

    #[test]
    fn test_explorer_url() {
        let (_, client) = client();
        let url = client.explorer_tx_url(TxHash::repeat_byte(0xab));
        assert!(url.starts_with("https://sepolia.basescan.org/tx/0xabab"));
    }
}
