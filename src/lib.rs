//! pay_qr - merchant-presented payment QR codes
//!
//! Builds VietQR (EMVCo merchant-presented) payloads for bank transfers and
//! classifies the text decoded from scanned QR codes.
//!
//! Both halves are pure functions over their arguments: no global state, no
//! I/O. Camera capture, pixel decoding and on-screen presentation are external
//! collaborators that plug in through the traits in [`scanner`].
//!
//! # Example
//! ```
//! use pay_qr::{PaymentRequest, ScanKind, classify, encode_payload};
//!
//! let request = PaymentRequest::new("970422", "0354424361")
//!     .with_amount("50000")
//!     .with_purpose("Thanh toan dien EVN");
//! let payload = encode_payload(&request).unwrap();
//! assert!(payload.starts_with("000201"));
//!
//! assert_eq!(classify(&payload).kind(), ScanKind::PaymentCode);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven defaults for the CLI
pub mod config;
/// Payload encoding (TLV fields, account template, CRC, deep links)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (Field, PaymentRequest, ScanResult, etc.)
pub mod models;
/// Parallel batch processing
pub mod pipeline;
/// QR rendering (PNG, SVG, terminal)
pub mod render;
/// Scan classification and the live-scan session
pub mod scanner;
/// Helpers for the command line tools
pub mod tools;

pub use encoder::{Crc16, DeepLinkWallet, WalletTarget, verify_frame};
pub use error::{EncodingError, RenderError, SessionError};
pub use models::{
    BillPayment, BillService, Field, InitiationMethod, PaymentRequest, Provider, ScanAction,
    ScanKind, ScanResult,
};
pub use scanner::{ScanClassifier, ScanOutcome, ScanSession, SessionState};

use serde::Serialize;

/// Text to put into a QR code, tagged with how it was produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GeneratedCode {
    /// VietQR TLV payload with CRC
    VietQr(String),
    /// Wallet transfer deep link
    DeepLink(String),
}

impl GeneratedCode {
    /// The code's text
    pub fn as_str(&self) -> &str {
        match self {
            GeneratedCode::VietQr(text) | GeneratedCode::DeepLink(text) => text,
        }
    }

    /// Take the code's text
    pub fn into_string(self) -> String {
        match self {
            GeneratedCode::VietQr(text) | GeneratedCode::DeepLink(text) => text,
        }
    }
}

/// Build the VietQR payload for a request
///
/// See [`encoder::payload::assemble`] for the field order and omission rules.
pub fn encode_payload(request: &PaymentRequest) -> Result<String, EncodingError> {
    encoder::assemble(request)
}

/// Generate either a VietQR payload or a wallet deep link
///
/// The two outputs are mutually exclusive; `target` picks one (see
/// [`WalletTarget::resolve`]). Deep links never fail.
pub fn generate(
    request: &PaymentRequest,
    target: WalletTarget,
) -> Result<GeneratedCode, EncodingError> {
    match target {
        WalletTarget::VietQr => encoder::assemble(request).map(GeneratedCode::VietQr),
        WalletTarget::DeepLink(wallet) => Ok(GeneratedCode::DeepLink(
            encoder::transfer_link(wallet, request),
        )),
    }
}

/// Classify text decoded from a QR code
pub fn classify(text: &str) -> ScanResult {
    ScanClassifier::classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> PaymentRequest {
        PaymentRequest::new("970422", "0354424361")
            .with_amount("50000")
            .with_purpose("Thanh toan dien EVN")
    }

    #[test]
    fn test_generate_vietqr() {
        let code = generate(&demo(), WalletTarget::resolve(Some("ZaloPay"))).unwrap();
        assert!(matches!(code, GeneratedCode::VietQr(_)));
        assert!(verify_frame(code.as_str()));
    }

    #[test]
    fn test_generate_deep_link() {
        let code = generate(&demo(), WalletTarget::resolve(Some("MoMo"))).unwrap();
        assert_eq!(
            code,
            GeneratedCode::DeepLink(
                "momo://?action=transfer&to=0354424361&amount=50000&comment=Thanh%20toan%20dien%20EVN"
                    .to_string()
            )
        );
        assert_eq!(classify(code.as_str()).kind(), ScanKind::AppLink);
    }

    #[test]
    fn test_deep_link_ignores_payload_limits() {
        let request = demo().with_purpose("x".repeat(300));
        assert!(generate(&request, WalletTarget::VietQr).is_err());
        assert!(generate(&request, WalletTarget::DeepLink(DeepLinkWallet::MoMo)).is_ok());
    }

    #[test]
    fn test_generated_payload_classifies_as_payment_code() {
        let payload = encode_payload(&demo()).unwrap();
        let result = classify(&payload);
        assert_eq!(result.kind(), ScanKind::PaymentCode);
        assert!(!result.is_actionable());
    }
}
