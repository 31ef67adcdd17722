//! # In-Memory Wallet SDK
//!
//! Scriptable [`WalletSdk`] for tests: balances keyed by `(token, owner)`,
//! injectable failures, and an ordered log of every call. Enabled with the
//! `mock` feature for downstream crates.
//!
//! Connects, reads and writes can be held open with a gate so tests can observe
//! in-flight state:
//!
//! ```rust,ignore
//! let sdk = MockWalletSdk::new(Address::repeat_byte(0xaa));
//! let gate = sdk.gate_writes();
//! // ... start a purchase, assert the flow is Transacting ...
//! gate.add_permits(1);
//! ```

use crate::abi::IPazaToken;
use crate::sdk::WalletSdk;
use crate::types::{Account, AuthMode, AuthStrategy, ContractCall, WalletKind};
use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use lib_core::{AppError, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Every SDK interaction, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkCall {
    ConnectExternal(WalletKind),
    HasStoredPasskey,
    ConnectInApp(AuthStrategy, AuthMode),
    Disconnect(Address),
    Read { contract: Address, method: &'static str, owner: Address },
    Write { from: Address, contract: Address, method: &'static str, data: Bytes },
    WaitForConfirmation(TxHash),
}

#[derive(Default)]
struct MockState {
    calls: Vec<SdkCall>,
    stored_passkey: bool,
    connect_error: Option<AppError>,
    balances: HashMap<(Address, Address), u128>,
    frozen: HashMap<(Address, Address), u128>,
    read_errors: HashMap<(Address, &'static str), AppError>,
    write_errors: HashMap<&'static str, AppError>,
    confirmation_error: Option<AppError>,
    tx_count: u64,
}

/// Scriptable in-memory SDK.
pub struct MockWalletSdk {
    account: Address,
    state: Mutex<MockState>,
    connect_gate: Mutex<Option<Arc<Semaphore>>>,
    read_gate: Mutex<Option<Arc<Semaphore>>>,
    write_gate: Mutex<Option<Arc<Semaphore>>>,
}

impl MockWalletSdk {
    /// SDK whose connects all yield `account`.
    pub fn new(account: Address) -> Self {
        Self {
            account,
            state: Mutex::new(MockState::default()),
            connect_gate: Mutex::new(None),
            read_gate: Mutex::new(None),
            write_gate: Mutex::new(None),
        }
    }

    pub fn account(&self) -> Address {
        self.account
    }

    pub fn set_stored_passkey(&self, stored: bool) {
        self.state.lock().stored_passkey = stored;
    }

    /// Make the next connect (external or in-app) fail with `error`.
    pub fn fail_next_connect(&self, error: AppError) {
        self.state.lock().connect_error = Some(error);
    }

    pub fn set_balance(&self, token: Address, owner: Address, raw: u128) {
        self.state.lock().balances.insert((token, owner), raw);
    }

    pub fn set_frozen(&self, token: Address, owner: Address, raw: u128) {
        self.state.lock().frozen.insert((token, owner), raw);
    }

    /// Fail every `method` read against `contract` until cleared.
    pub fn fail_read(&self, contract: Address, method: &'static str, error: AppError) {
        self.state.lock().read_errors.insert((contract, method), error);
    }

    pub fn clear_read_failures(&self) {
        self.state.lock().read_errors.clear();
    }

    /// Fail every write of `method` (e.g. `"approve"`) until cleared.
    pub fn fail_write(&self, method: &'static str, error: AppError) {
        self.state.lock().write_errors.insert(method, error);
    }

    pub fn fail_confirmation(&self, error: AppError) {
        self.state.lock().confirmation_error = Some(error);
    }

    /// Hold connects until permits are added to the returned semaphore.
    pub fn gate_connects(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        *self.connect_gate.lock() = Some(gate.clone());
        gate
    }

    /// Hold reads until permits are added. A read is recorded before it waits,
    /// so [`read_count`](Self::read_count) includes held reads.
    pub fn gate_reads(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        *self.read_gate.lock() = Some(gate.clone());
        gate
    }

    /// Hold writes until permits are added to the returned semaphore.
    pub fn gate_writes(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        *self.write_gate.lock() = Some(gate.clone());
        gate
    }

    /// Snapshot of recorded calls.
    pub fn calls(&self) -> Vec<SdkCall> {
        self.state.lock().calls.clone()
    }

    /// Methods of recorded writes, in submission order.
    pub fn written_methods(&self) -> Vec<&'static str> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                SdkCall::Write { method, .. } => Some(*method),
                _ => None,
            })
            .collect()
    }

    pub fn read_count(&self) -> usize {
        self.state.lock().calls.iter().filter(|c| matches!(c, SdkCall::Read { .. })).count()
    }

    fn record(&self, call: SdkCall) {
        self.state.lock().calls.push(call);
    }

    async fn pass_gate(gate: &Mutex<Option<Arc<Semaphore>>>) {
        let gate = gate.lock().clone();
        if let Some(gate) = gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
    }

    fn connect_result(&self, kind: WalletKind) -> Result<Account> {
        match self.state.lock().connect_error.take() {
            Some(error) => Err(error),
            None => Ok(Account { address: self.account, kind }),
        }
    }
}

#[async_trait]
impl WalletSdk for MockWalletSdk {
    async fn connect_external(&self, kind: WalletKind) -> Result<Account> {
        self.record(SdkCall::ConnectExternal(kind));
        Self::pass_gate(&self.connect_gate).await;
        self.connect_result(kind)
    }

    async fn has_stored_passkey(&self) -> Result<bool> {
        self.record(SdkCall::HasStoredPasskey);
        Ok(self.state.lock().stored_passkey)
    }

    async fn connect_in_app(&self, strategy: AuthStrategy, mode: AuthMode) -> Result<Account> {
        self.record(SdkCall::ConnectInApp(strategy, mode));
        Self::pass_gate(&self.connect_gate).await;
        let kind = match strategy {
            AuthStrategy::Apple => WalletKind::Apple,
            AuthStrategy::Google => WalletKind::Google,
            AuthStrategy::Passkey => WalletKind::Passkey,
        };
        self.connect_result(kind)
    }

    async fn disconnect(&self, account: &Account) -> Result<()> {
        self.record(SdkCall::Disconnect(account.address));
        Ok(())
    }

    async fn read(&self, call: &ContractCall) -> Result<Bytes> {
        // Both read methods take the owner as their only argument
        let owner = match call.method {
            "balanceOf" => IPazaToken::balanceOfCall::abi_decode(&call.data)
                .map(|c| c.account)
                .map_err(|e| AppError::Decoding(e.to_string()))?,
            "frozenAmount" => IPazaToken::frozenAmountCall::abi_decode(&call.data)
                .map(|c| c.account)
                .map_err(|e| AppError::Decoding(e.to_string()))?,
            other => return Err(AppError::Rpc(format!("mock cannot read {other}"))),
        };

        self.record(SdkCall::Read { contract: call.contract, method: call.method, owner });
        Self::pass_gate(&self.read_gate).await;

        let state = self.state.lock();
        if let Some(error) = state.read_errors.get(&(call.contract, call.method)) {
            return Err(error.clone());
        }

        let table = if call.method == "frozenAmount" { &state.frozen } else { &state.balances };
        let raw = table.get(&(call.contract, owner)).copied().unwrap_or_default();
        Ok(Bytes::from(U256::from(raw).to_be_bytes::<32>().to_vec()))
    }

    async fn write(&self, from: Address, call: &ContractCall) -> Result<TxHash> {
        self.record(SdkCall::Write {
            from,
            contract: call.contract,
            method: call.method,
            data: call.data.clone(),
        });
        Self::pass_gate(&self.write_gate).await;

        let mut state = self.state.lock();
        if let Some(error) = state.write_errors.get(call.method) {
            return Err(error.clone());
        }
        state.tx_count += 1;
        let mut hash = [0u8; 32];
        hash[24..].copy_from_slice(&state.tx_count.to_be_bytes());
        Ok(TxHash::from(hash))
    }

    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<()> {
        self.record(SdkCall::WaitForConfirmation(tx_hash));
        match self.state.lock().confirmation_error.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
