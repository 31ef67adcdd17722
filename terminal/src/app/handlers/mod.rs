//! # Command Handlers
//!
//! Handlers organized by domain. Each one applies a parsed [`Command`] and
//! returns the text to print, if any.
//!
//! [`Command`]: crate::app::commands::Command

pub mod navigation;
pub mod transfer;
pub mod wallet;
