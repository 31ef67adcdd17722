//! # QR Payload Decoding
//!
//! Scanned wallet QR codes carry either a bare address or a payment URI such as
//! `ethereum:0xAbC...@8453?value=1`. Only the address part is kept.

/// Extract the recipient address from a scanned QR payload.
///
/// Strips an optional URI scheme (`ethereum:`, `base:`, ...) and anything from the
/// first `@` or `?` onwards.
///
/// # Examples
///
/// ```rust
/// use lib_utils::qr::decode_qr_payload;
///
/// assert_eq!(decode_qr_payload("ethereum:0xABC@1"), "0xABC");
/// assert_eq!(decode_qr_payload("0xABC"), "0xABC");
/// ```
pub fn decode_qr_payload(payload: &str) -> String {
    let payload = payload.trim();
    let without_scheme = match payload.split_once(':') {
        Some((scheme, rest)) if is_uri_scheme(scheme) => rest,
        _ => payload,
    };

    let end = without_scheme
        .find(|c| c == '@' || c == '?')
        .unwrap_or(without_scheme.len());
    without_scheme[..end].trim().to_string()
}

// RFC 3986: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_uri_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
