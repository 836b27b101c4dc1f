//! Scanned-code handling
//!
//! Decoding pixels into text is done by an external collaborator plugged in
//! through [`FrameDecoder`]; camera access goes through [`Camera`] and
//! [`FrameStream`]. This module owns what happens around them:
//! - Classification of decoded text ([`classifier`])
//! - The live-scan state machine ([`session`])
//! - Single-shot scans of an uploaded image ([`scan_frame`])

/// Rule-based classification of decoded text
pub mod classifier;
/// Live camera scan session
pub mod session;

pub use classifier::{APP_SCHEMES, RULES, Rule, ScanClassifier, WEB_SCHEMES};
pub use session::{CancelToken, PollOutcome, ScanSession, SessionState};

use tracing::debug;

use crate::models::ScanResult;

/// Turns one captured frame into text, if it contains a readable code
pub trait FrameDecoder<F> {
    /// Decoded text, or `None` when no code was found in the frame
    fn decode(&self, frame: &F) -> Option<String>;
}

impl<F, T> FrameDecoder<F> for T
where
    T: Fn(&F) -> Option<String>,
{
    fn decode(&self, frame: &F) -> Option<String> {
        self(frame)
    }
}

/// An open capture stream
///
/// Dropping the stream must release the underlying device.
pub trait FrameStream {
    /// Frame type produced by the stream
    type Frame;

    /// Grab one frame; `None` when no frame is ready yet
    fn next_frame(&mut self) -> Option<Self::Frame>;
}

/// A capture device that can be opened into a [`FrameStream`]
pub trait Camera {
    /// Frame type produced by the device
    type Frame;
    /// Stream handed out by [`Camera::open`]
    type Stream: FrameStream<Frame = Self::Frame>;
    /// Failure to acquire the device (denied permission, busy, missing)
    type Error: std::fmt::Display;

    /// Acquire the device
    fn open(&mut self) -> Result<Self::Stream, Self::Error>;
}

/// Result of a single-shot scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A code was decoded and classified
    Found(ScanResult),
    /// The decoder found no code; the classifier was not consulted
    NotFound,
}

/// Scan one still frame, e.g. an uploaded picture
pub fn scan_frame<F, D>(decoder: &D, frame: &F) -> ScanOutcome
where
    D: FrameDecoder<F> + ?Sized,
{
    match decoder.decode(frame) {
        Some(text) => {
            let result = ScanClassifier::classify(&text);
            debug!(kind = ?result.kind(), "classified scanned frame");
            ScanOutcome::Found(result)
        }
        None => {
            debug!("no code found in frame");
            ScanOutcome::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScanKind;

    #[test]
    fn test_scan_frame_found() {
        let decoder = |frame: &Vec<u8>| String::from_utf8(frame.clone()).ok();
        let outcome = scan_frame(&decoder, &b"example.com/pay".to_vec());
        match outcome {
            ScanOutcome::Found(result) => {
                assert_eq!(result.kind(), ScanKind::WebLink);
                assert_eq!(result.normalized_text(), "https://example.com/pay");
            }
            ScanOutcome::NotFound => panic!("expected a decoded frame"),
        }
    }

    #[test]
    fn test_scan_frame_not_found() {
        let decoder = |_: &Vec<u8>| -> Option<String> { None };
        assert_eq!(scan_frame(&decoder, &Vec::new()), ScanOutcome::NotFound);
    }
}
