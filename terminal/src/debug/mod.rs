//! # Logging Infrastructure
//!
//! File-based structured logging for the terminal front end.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG` / `LOG_LEVEL`: Log level filter (e.g., `lib_wallet=debug,info`)
//! - `PAZA_LOG_DIR`: Directory for the rotated log file (default `logs`)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init;
