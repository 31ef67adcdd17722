//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`shorten_hex`] - Keep the `0x` prefix plus N hex digits on each side
//!
//! ```rust
//! use shared::utils::{format_address, shorten_hex};
//!
//! let address = "0x742d35Cc6634C0532925a3b844Bc9e7595f8dE8A";
//! assert_eq!(format_address(address, 6, 4), "0x742d...dE8A");
//! assert_eq!(shorten_hex(address, 4), "0x742d...dE8A");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x742d35Cc6634C0532925a3b844Bc9e7595f8dE8A";
/// assert_eq!(format_address(addr, 6, 4), "0x742d...dE8A");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Shorten a `0x`-prefixed hex string to `0x` + `chars` digits, `...`, and the last `chars` digits.
pub fn shorten_hex(hex: &str, chars: usize) -> String {
    format_address(hex, chars + 2, chars)
}
