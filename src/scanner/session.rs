use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tracing::{debug, warn};

use super::classifier::ScanClassifier;
use super::{Camera, FrameDecoder, FrameStream};
use crate::error::SessionError;
use crate::models::ScanResult;

/// Observable state of a [`ScanSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    /// Nothing running
    Idle,
    /// Waiting for the camera to be granted
    Requesting,
    /// Capturing frames
    Streaming,
    /// A code was decoded and classified; camera released
    Matched,
    /// Stopped before a match, or the camera was unavailable
    Stopped,
}

/// What one [`ScanSession::poll`] cycle did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Session is not running; nothing happened
    Inactive,
    /// Camera acquired, streaming begins next cycle
    Opened,
    /// The stream had no frame ready
    NoFrame,
    /// A frame was captured but held no readable code
    NoMatch,
    /// A code was decoded and classified
    Matched(ScanResult),
    /// Cancellation was observed; session stopped
    Cancelled,
    /// The camera could not be opened; session stopped
    CameraUnavailable(String),
}

/// Cooperative cancellation flag shared with other threads
///
/// The session checks it once at the start of every cycle.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Fresh, not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the session to stop at its next cycle
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }
}

enum Phase<S> {
    Idle,
    Requesting,
    Streaming(S),
    Matched(ScanResult),
    Stopped,
}

/// Live camera scan as an explicit state machine
///
/// `Idle → Requesting → Streaming → Matched | Stopped`. The open stream lives
/// only inside the `Streaming` state, so leaving that state by any path
/// (match, stop, cancellation, reset, or dropping the session) releases the
/// camera. A finished session needs [`reset`](Self::reset) before the next scan.
pub struct ScanSession<C: Camera, D> {
    camera: C,
    decoder: D,
    phase: Phase<C::Stream>,
    cancel: CancelToken,
}

impl<C, D> ScanSession<C, D>
where
    C: Camera,
    D: FrameDecoder<C::Frame>,
{
    /// Idle session over a camera and a decoder
    pub fn new(camera: C, decoder: D) -> Self {
        Self {
            camera,
            decoder,
            phase: Phase::Idle,
            cancel: CancelToken::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::Idle => SessionState::Idle,
            Phase::Requesting => SessionState::Requesting,
            Phase::Streaming(_) => SessionState::Streaming,
            Phase::Matched(_) => SessionState::Matched,
            Phase::Stopped => SessionState::Stopped,
        }
    }

    /// Result of the last successful scan, until reset
    pub fn result(&self) -> Option<&ScanResult> {
        match &self.phase {
            Phase::Matched(result) => Some(result),
            _ => None,
        }
    }

    /// Handle for cancelling from elsewhere
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// True while requesting or streaming
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Requesting | Phase::Streaming(_))
    }

    /// Begin a scan; only valid from `Idle`
    pub fn start(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Requesting;
                debug!("scan session requesting camera");
                Ok(())
            }
            _ => Err(SessionError::NotIdle(self.state())),
        }
    }

    /// Run one cooperative cycle
    pub fn poll(&mut self) -> PollOutcome {
        if self.is_active() && self.cancel.is_cancelled() {
            self.stop();
            return PollOutcome::Cancelled;
        }

        match self.phase {
            Phase::Requesting => self.open_camera(),
            Phase::Streaming(_) => self.poll_stream(),
            Phase::Idle | Phase::Matched(_) | Phase::Stopped => PollOutcome::Inactive,
        }
    }

    /// Poll until the session is no longer active
    ///
    /// No timeout: it returns on a match, on cancellation, or when the camera
    /// cannot be opened. Streams whose `next_frame` does not block should
    /// expect this to yield the thread between empty frames.
    pub fn run(&mut self) -> PollOutcome {
        loop {
            let outcome = self.poll();
            if !self.is_active() {
                return outcome;
            }
            if outcome == PollOutcome::NoFrame {
                std::thread::yield_now();
            }
        }
    }

    /// Stop and release the camera; safe to call in any state
    ///
    /// Only an active session moves to `Stopped`. An idle session stays idle
    /// and a matched one keeps its result.
    pub fn stop(&mut self) {
        match self.phase {
            Phase::Idle | Phase::Matched(_) | Phase::Stopped => {}
            Phase::Streaming(_) => {
                debug!("scan session stopped, releasing camera");
                self.phase = Phase::Stopped;
            }
            Phase::Requesting => {
                debug!("scan session stopped before the camera opened");
                self.phase = Phase::Stopped;
            }
        }
    }

    /// Back to `Idle`, dropping any result and releasing the camera
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.cancel.clear();
        debug!("scan session reset");
    }

    fn open_camera(&mut self) -> PollOutcome {
        match self.camera.open() {
            Ok(stream) => {
                self.phase = Phase::Streaming(stream);
                debug!("camera opened, streaming");
                PollOutcome::Opened
            }
            Err(err) => {
                warn!(error = %err, "camera unavailable");
                self.phase = Phase::Stopped;
                PollOutcome::CameraUnavailable(err.to_string())
            }
        }
    }

    fn poll_stream(&mut self) -> PollOutcome {
        let Phase::Streaming(stream) = &mut self.phase else {
            return PollOutcome::Inactive;
        };
        let Some(frame) = stream.next_frame() else {
            return PollOutcome::NoFrame;
        };
        let Some(text) = self.decoder.decode(&frame) else {
            return PollOutcome::NoMatch;
        };

        let result = ScanClassifier::classify(&text);
        debug!(kind = ?result.kind(), "code matched, releasing camera");
        self.phase = Phase::Matched(result.clone());
        PollOutcome::Matched(result)
    }
}

impl<C: Camera, D> Drop for ScanSession<C, D> {
    fn drop(&mut self) {
        if matches!(self.phase, Phase::Streaming(_)) {
            debug!("scan session dropped while streaming, releasing camera");
        }
    }
}
