//! # Screen Modules
//!
//! One module per swap-card tab plus the wallet selector modal.
//!
//! - **[`buy`]**: Pay amount, stablecoin choice, rate quote, buy action
//! - **[`send`]**: Token, recipient, amount, send action
//! - **[`receive`]**: Address QR code
//! - **[`wallet_selector`]**: Provider list shown by `connect`

pub mod buy;
pub mod receive;
pub mod send;
pub mod wallet_selector;
