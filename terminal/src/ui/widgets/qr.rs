//! # QR Code Widget
//!
//! Renders a QR code with half-height unicode blocks so it fits a terminal.

use qrcode::render::unicode;
use qrcode::QrCode;

/// QR code for `data`, or a one-line placeholder if it cannot be encoded.
pub fn render_qr(data: &str) -> String {
    match QrCode::new(data.as_bytes()) {
        Ok(code) => code.render::<unicode::Dense1x2>().quiet_zone(true).build(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to render QR code");
            "Failed to render QR.".to_string()
        }
    }
}
