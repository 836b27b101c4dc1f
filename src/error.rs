//! Error types for payload generation, rendering and scan sessions

use thiserror::Error;

use crate::scanner::session::SessionState;

/// Errors raised while building a TLV payload.
///
/// Produced by the field encoder and propagated unchanged through the account
/// template builder and payload assembler. Generation is all-or-nothing: no
/// partial frame is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Tag is not exactly two ASCII digits
    #[error("invalid tag {0:?}: expected two ASCII digits")]
    InvalidTag(String),

    /// Value does not fit a two-digit length prefix
    #[error("value for tag {tag} is {len} characters long (maximum 99)")]
    ValueTooLong {
        /// Tag of the offending field
        tag: String,
        /// Character count of the rejected value
        len: usize,
    },

    /// Value contains characters outside the checksum's ASCII domain
    #[error("value for tag {tag} contains non-ASCII characters")]
    NonAsciiValue {
        /// Tag of the offending field
        tag: String,
    },
}

/// Errors from the QR rendering collaborator.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Payload does not fit any QR version at the requested EC level
    #[error("QR generation failed: {0}")]
    Qr(#[from] qrcode::types::QrError),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Errors from driving a [`ScanSession`](crate::scanner::session::ScanSession).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// `start()` outside the idle state; a finished scan needs `reset()` first
    #[error("scan session is {0:?}; reset it before starting a new scan")]
    NotIdle(SessionState),
}
