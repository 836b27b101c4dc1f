//! Payment payload encoding
//!
//! Everything needed to turn a [`PaymentRequest`](crate::models::PaymentRequest)
//! into the text that goes into a QR code:
//! - TLV field encoding and the nested beneficiary account template
//! - Payload assembly in the fixed VietQR field order
//! - CRC-16/CCITT-FALSE sealing and verification
//! - Wallet deep links as an alternative output

/// Beneficiary account template (tag 38)
pub mod account;
/// CRC-16/CCITT-FALSE checksum engine
pub mod crc;
/// Wallet transfer deep links
pub mod deeplink;
/// Single TLV field encoding
pub mod field;
/// Full payload assembly
pub mod payload;
/// Tag numbers and constants
pub mod tags;
/// Vietnamese-to-ASCII folding
pub mod text;

pub use account::{account_template_value, encode_account_template};
pub use crc::{Crc16, verify_frame};
pub use deeplink::{DeepLinkWallet, KNOWN_WALLETS, WalletTarget, transfer_link};
pub use field::encode_field;
pub use payload::assemble;
