//! # Core Library
//!
//! Configuration, errors, network selection, and the token/contract registry
//! shared by every other crate.

pub mod config;
pub mod error;
pub mod explorer;
pub mod network;
pub mod registry;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use network::Network;
pub use registry::{ContractRegistry, Stablecoin, TokenInfo, TokenSymbol, DECIMALS, SHOW_DECIMALS};
