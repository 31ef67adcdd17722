//! # Shared Data Transfer Objects Library
//!
//! View-level types shared by every front end of the wallet, plus address
//! display helpers. Nothing here talks to the chain.
//!
//! ## Structure
//!
//! - **[`dto`]**: Serializable values handed to the presentation layer
//!   - **[`dto::wallet`]**: Transaction results, notices and balance views
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::shorten_hex`]**: `0x1234...abcd` style shortening
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case**
//! - Optional fields are omitted from JSON when `None`
//! - Enums serialize to lowercase strings

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
