//! # PAZA Wallet Terminal - Library Root
//!
//! Line-oriented front end for the PAZA wallet core: connect a wallet, buy
//! PAZA with a stablecoin, send tokens, and show a receive QR code.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              terminal (this crate)                     │
//! │  app    - input loop, commands, background tasks       │
//! │  ui     - text screens and widgets                     │
//! │  debug  - rotating file logs                           │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  lib-wallet  session · balances · buy/send flows       │
//! │  lib-evm     wallet SDK seam · contract client         │
//! │  lib-core    config · registry · errors                │
//! └────────────────────────────────────────────────────────┘
//!          │ JSON-RPC
//!          ▼
//!    Base / Base Sepolia
//! ```
//!
//! Logs go to a file so they never interleave with the screen.

pub mod app;
pub mod debug;
pub mod ui;
