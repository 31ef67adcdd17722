//! # JSON-RPC Wallet SDK
//!
//! [`WalletSdk`] implementation over plain Ethereum JSON-RPC:
//!
//! - **Reads** (`eth_call`, `eth_getTransactionReceipt`) go to the hosted RPC for
//!   the configured network, authenticated by the client credential.
//! - **Wallet operations** (`eth_requestAccounts`, `eth_sendTransaction`) go to an
//!   external signer exposing the EIP-1193 methods over HTTP, such as a desktop
//!   wallet bridge. The signer holds the keys; this process never sees them.
//!
//! Embedded social/passkey wallets need the vendor's hosted auth service and are
//! reported as unsupported by this transport.

use crate::sdk::WalletSdk;
use crate::types::{Account, AuthMode, AuthStrategy, ContractCall, WalletKind};
use alloy_primitives::{hex, Address, Bytes, TxHash};
use async_trait::async_trait;
use lib_core::{AppError, Config, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);
const USER_REJECTED: i64 = 4001;

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Which endpoint a request targets; decides how failures are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Read,
    Wallet,
}

/// JSON-RPC backed [`WalletSdk`].
pub struct RpcWalletSdk {
    http: reqwest::Client,
    read_url: String,
    wallet_url: String,
    chain_id: u64,
    confirmation_timeout: Duration,
    poll_interval: Duration,
    next_id: AtomicU64,
}

impl RpcWalletSdk {
    /// Build from validated configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            read_url: config.read_rpc_url(),
            wallet_url: config.wallet_rpc_url.clone(),
            chain_id: config.network.chain_id(),
            confirmation_timeout: config.confirmation_timeout(),
            poll_interval: RECEIPT_POLL_INTERVAL,
            next_id: AtomicU64::new(1),
        })
    }

    async fn rpc_call(&self, endpoint: Endpoint, method: &str, params: Value) -> Result<Value> {
        let url = match endpoint {
            Endpoint::Read => &self.read_url,
            Endpoint::Wallet => &self.wallet_url,
        };
        let body = json!({
            "jsonrpc": "2.0",
            "id": self.next_id.fetch_add(1, Ordering::Relaxed),
            "method": method,
            "params": params,
        });
        debug!(method, ?endpoint, "JSON-RPC request");

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, format!("{method} request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport_error(endpoint, format!("{method} returned HTTP {status}")));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| AppError::Decoding(format!("{method} response is not JSON: {e}")))?;

        parse_rpc_response(endpoint, method, payload)
    }

    async fn ensure_wallet_chain(&self) -> Result<()> {
        let current = self.rpc_call(Endpoint::Wallet, "eth_chainId", json!([])).await?;
        let current = parse_quantity(&current)?;
        if current == self.chain_id {
            return Ok(());
        }

        info!(current, expected = self.chain_id, "switching wallet chain");
        self.rpc_call(
            Endpoint::Wallet,
            "wallet_switchEthereumChain",
            json!([{ "chainId": format!("0x{:x}", self.chain_id) }]),
        )
        .await
        .map_err(|e| {
            AppError::Wallet(format!(
                "Wallet is on chain {current}, expected {}: {}",
                self.chain_id,
                e.user_message()
            ))
        })?;
        Ok(())
    }

    async fn receipt_status(&self, tx_hash: TxHash) -> Result<Option<bool>> {
        let receipt = self
            .rpc_call(Endpoint::Read, "eth_getTransactionReceipt", json!([tx_hash.to_string()]))
            .await?;
        Ok(receipt_succeeded(&receipt))
    }
}

#[async_trait]
impl WalletSdk for RpcWalletSdk {
    async fn connect_external(&self, kind: WalletKind) -> Result<Account> {
        let wallet_id = kind
            .wallet_id()
            .ok_or_else(|| AppError::Wallet(format!("{kind} is not an external wallet")))?;
        info!(wallet_id, "requesting accounts from external wallet");

        let accounts = self
            .rpc_call(Endpoint::Wallet, "eth_requestAccounts", json!([]))
            .await?;
        let first = accounts
            .as_array()
            .and_then(|list| list.first())
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::Wallet("Wallet returned no accounts".to_string()))?;
        let address = Address::from_str(first)
            .map_err(|e| AppError::Decoding(format!("Invalid account address '{first}': {e}")))?;

        self.ensure_wallet_chain().await?;
        Ok(Account { address, kind })
    }

    async fn has_stored_passkey(&self) -> Result<bool> {
        Ok(false)
    }

    async fn connect_in_app(&self, strategy: AuthStrategy, mode: AuthMode) -> Result<Account> {
        debug!(%strategy, ?mode, "embedded wallet requested over JSON-RPC");
        Err(AppError::Wallet(format!(
            "{strategy} sign-in needs the embedded wallet service, which this JSON-RPC transport does not provide"
        )))
    }

    async fn disconnect(&self, account: &Account) -> Result<()> {
        // Not every signer implements permission revocation; the local session is dropped regardless.
        if let Err(e) = self
            .rpc_call(
                Endpoint::Wallet,
                "wallet_revokePermissions",
                json!([{ "eth_accounts": {} }]),
            )
            .await
        {
            warn!(address = %account.address, error = %e, "wallet did not revoke permissions");
        }
        Ok(())
    }

    async fn read(&self, call: &ContractCall) -> Result<Bytes> {
        let result = self
            .rpc_call(
                Endpoint::Read,
                "eth_call",
                json!([
                    { "to": call.contract.to_string(), "data": hex::encode_prefixed(&call.data) },
                    "latest"
                ]),
            )
            .await?;
        let encoded = result
            .as_str()
            .ok_or_else(|| AppError::Decoding(format!("{} returned a non-string result", call.method)))?;
        hex::decode(encoded)
            .map(Bytes::from)
            .map_err(|e| AppError::Decoding(format!("{} returned invalid hex: {e}", call.method)))
    }

    async fn write(&self, from: Address, call: &ContractCall) -> Result<TxHash> {
        let result = self
            .rpc_call(
                Endpoint::Wallet,
                "eth_sendTransaction",
                json!([{
                    "from": from.to_string(),
                    "to": call.contract.to_string(),
                    "data": hex::encode_prefixed(&call.data),
                }]),
            )
            .await
            .map_err(submission_error)?;
        let hash = result
            .as_str()
            .ok_or_else(|| AppError::Decoding("eth_sendTransaction returned no hash".to_string()))?;
        TxHash::from_str(hash)
            .map_err(|e| AppError::Decoding(format!("Invalid transaction hash '{hash}': {e}")))
    }

    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<()> {
        let poll = async {
            loop {
                match self.receipt_status(tx_hash).await? {
                    Some(true) => return Ok(()),
                    Some(false) => {
                        return Err(AppError::Transaction(format!("Transaction {tx_hash} reverted")))
                    }
                    None => tokio::time::sleep(self.poll_interval).await,
                }
            }
        };

        tokio::time::timeout(self.confirmation_timeout, poll)
            .await
            .map_err(|_| {
                AppError::Transaction(format!(
                    "Transaction {tx_hash} not confirmed within {}s",
                    self.confirmation_timeout.as_secs()
                ))
            })?
    }
}

fn transport_error(endpoint: Endpoint, message: String) -> AppError {
    match endpoint {
        Endpoint::Read => AppError::Rpc(message),
        Endpoint::Wallet => AppError::Wallet(message),
    }
}

/// Unwrap a JSON-RPC envelope into its `result`.
///
/// Error objects from the signer keep their message (reverts, gas estimation
/// failures) as `AppError::Wallet`; those from the read endpoint are `Rpc`.
fn parse_rpc_response(endpoint: Endpoint, method: &str, payload: Value) -> Result<Value> {
    let response: RpcResponse = serde_json::from_value(payload)?;
    if let Some(error) = response.error {
        if error.code == USER_REJECTED {
            return Err(AppError::Wallet(format!("User rejected the request ({method})")));
        }
        let message = format!("{method} failed ({}): {}", error.code, error.message);
        return Err(transport_error(endpoint, message));
    }
    Ok(response.result.unwrap_or(Value::Null))
}

/// A failed `eth_sendTransaction` is a transaction failure; its text is shown to the user.
fn submission_error(err: AppError) -> AppError {
    match err {
        AppError::Wallet(msg) | AppError::Rpc(msg) => AppError::Transaction(msg),
        other => other,
    }
}

fn parse_quantity(value: &Value) -> Result<u64> {
    let text = value
        .as_str()
        .ok_or_else(|| AppError::Decoding(format!("expected hex quantity, got {value}")))?;
    u64::from_str_radix(text.trim_start_matches("0x"), 16)
        .map_err(|e| AppError::Decoding(format!("invalid hex quantity '{text}': {e}")))
}

/// `None` while pending, otherwise whether the receipt reports success.
fn receipt_succeeded(receipt: &Value) -> Option<bool> {
    if receipt.is_null() {
        return None;
    }
    Some(receipt.get("status").and_then(Value::as_str) == Some("0x1"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_result() {
        let value = parse_rpc_response(
            Endpoint::Wallet,
            "eth_chainId",
            json!({ "jsonrpc": "2.0", "id": 1, "result": "0x2105" }),
        )
        .unwrap();
        assert_eq!(parse_quantity(&value).unwrap(), 8453);
    }

    #[test]
    fn test_parse_error_object() {
        let err = parse_rpc_response(
            Endpoint::Read,
            "eth_call",
            json!({ "jsonrpc": "2.0", "id": 1, "error": { "code": -32000, "message": "execution reverted" } }),
        )
        .unwrap_err();
        assert_eq!(
            err,
            AppError::Rpc("eth_call failed (-32000): execution reverted".to_string())
        );
    }

    #[test]
    fn test_user_rejection_is_wallet_error() {
        let err = parse_rpc_response(
            Endpoint::Wallet,
            "eth_sendTransaction",
            json!({ "jsonrpc": "2.0", "id": 3, "error": { "code": 4001, "message": "denied" } }),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Wallet(_)));
        assert_eq!(
            submission_error(err).user_message(),
            "User rejected the request (eth_sendTransaction)"
        );
    }

    #[test]
    fn test_signer_revert_keeps_reason() {
        let err = parse_rpc_response(
            Endpoint::Wallet,
            "eth_sendTransaction",
            json!({
                "jsonrpc": "2.0",
                "id": 4,
                "error": { "code": -32000, "message": "execution reverted: ERC20: insufficient allowance" }
            }),
        )
        .map_err(submission_error)
        .unwrap_err();

        assert!(matches!(err, AppError::Transaction(_)));
        assert!(err
            .user_message()
            .contains("execution reverted: ERC20: insufficient allowance"));
    }

    #[test]
    fn test_signer_transport_failure_is_transaction_error() {
        let err = submission_error(transport_error(
            Endpoint::Wallet,
            "eth_sendTransaction returned HTTP 502 Bad Gateway".to_string(),
        ));
        assert_eq!(
            err,
            AppError::Transaction("eth_sendTransaction returned HTTP 502 Bad Gateway".to_string())
        );
    }

    #[test]
    fn test_receipt_status() {
        assert_eq!(receipt_succeeded(&Value::Null), None);
        assert_eq!(receipt_succeeded(&json!({ "status": "0x1" })), Some(true));
        assert_eq!(receipt_succeeded(&json!({ "status": "0x0" })), Some(false));
    }
}
