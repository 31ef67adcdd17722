//! # Utilities Library
//!
//! Shared utility functions for environment variables, token amount formatting,
//! input validation, and QR payload decoding.

pub mod envs;
pub mod format;
pub mod qr;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse, get_env_parse_or};
pub use format::{format_currency, format_token_amount, format_units, parse_units};
pub use qr::decode_qr_payload;
pub use validation::{is_numeric_amount, validate_not_empty};
