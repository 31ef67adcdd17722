//! # Contract ABI
//!
//! Solidity interfaces for the PAZA token, the stablecoins (plain ERC-20), and
//! the sale contract, generated with `alloy_sol_types::sol!`.

use alloy_primitives::U256;
use alloy_sol_types::sol;
use lib_core::{AppError, Result};

sol! {
    /// ERC-20 subset used by the wallet. `frozenAmount` only exists on PAZA.
    interface IPazaToken {
        function balanceOf(address account) external view returns (uint256);
        function frozenAmount(address account) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function transfer(address to, uint256 value) external returns (bool);
    }

    /// Open sale: pulls `stablecoinAmount` of the indexed stablecoin and mints PAZA.
    interface IPazaSale {
        function buy(uint256 stablecoinAmount, uint8 stablecoin) external;
    }
}

/// Decode a single `uint256` return word.
pub fn decode_uint256(data: &[u8]) -> Result<U256> {
    if data.len() < 32 {
        return Err(AppError::Decoding(format!(
            "expected a 32-byte uint256, got {} bytes",
            data.len()
        )));
    }
    Ok(U256::from_be_slice(&data[..32]))
}

/// Narrow a raw amount to `u128`; 6-decimal balances never come close to the limit.
pub fn to_u128(value: U256) -> Result<u128> {
    let limbs = value.as_limbs();
    if limbs[2] != 0 || limbs[3] != 0 {
        return Err(AppError::Decoding(format!("amount {value} exceeds u128")));
    }
    Ok(((limbs[1] as u128) << 64) | limbs[0] as u128)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;
    use alloy_sol_types::SolCall;

    #[test]
    fn test_selectors() {
        assert_eq!(IPazaToken::balanceOfCall::SELECTOR, [0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(IPazaToken::approveCall::SELECTOR, [0x09, 0x5e, 0xa7, 0xb3]);
        assert_eq!(IPazaToken::transferCall::SELECTOR, [0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn test_encode_buy() {
        let data = IPazaSale::buyCall { stablecoinAmount: U256::from(50_000_000u64), stablecoin: 1 }
            .abi_encode();
        assert_eq!(data.len(), 4 + 64);
        assert_eq!(U256::from_be_slice(&data[4..36]), U256::from(50_000_000u64));
        assert_eq!(data[67], 1);
    }

    #[test]
    fn test_encode_address_argument() {
        let account = Address::repeat_byte(0xab);
        let data = IPazaToken::balanceOfCall { account }.abi_encode();
        assert_eq!(&data[16..36], account.as_slice());
    }

    #[test]
    fn test_decode_uint256() {
        let word = U256::from(123_456_789u64).to_be_bytes::<32>();
        assert_eq!(decode_uint256(&word).unwrap(), U256::from(123_456_789u64));
        assert!(matches!(decode_uint256(&word[..31]), Err(AppError::Decoding(_))));
    }

    #[test]
    fn test_to_u128() {
        assert_eq!(to_u128(U256::from(u128::MAX)).unwrap(), u128::MAX);
        assert!(to_u128(U256::MAX).is_err());
    }
}
