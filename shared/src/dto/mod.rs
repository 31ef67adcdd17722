//! # Data Transfer Objects (DTOs)
//!
//! - [`wallet`] - Transaction results, notices and balance views
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "message": "Successfully purchased PAZA tokens worth 50 USDT!",
//!   "transaction_hash": "0x5c50...",
//!   "explorer_url": "https://basescan.org/tx/0x5c50..."
//! }
//! ```

pub mod wallet;

pub use wallet::*;
