use serde::{Deserialize, Serialize};

/// Notice shown for a recognized payment code instead of a navigation action
pub const PAYMENT_CODE_NOTICE: &str =
    "Payment QR code detected. Open a banking or wallet app to complete the payment.";

/// Semantic category of scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanKind {
    /// Custom application or wallet deep link
    AppLink,
    /// http(s) link, possibly completed from a bare domain
    WebLink,
    /// Merchant-presented payment payload
    PaymentCode,
    /// Anything else
    PlainText,
}

impl ScanKind {
    /// Whether results of this kind lead to a navigable action
    pub fn is_actionable(&self) -> bool {
        matches!(self, ScanKind::AppLink | ScanKind::WebLink)
    }
}

/// Outcome of classifying one decoded QR text
///
/// Built fresh for every successful decode; replaced on the next scan and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    raw_text: String,
    kind: ScanKind,
    normalized_text: String,
    is_actionable: bool,
}

/// What a front end should do with a [`ScanResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanAction<'a> {
    /// Open this URL or deep link
    Navigate(&'a str),
    /// Show an informational notice, nothing to open
    Notice(&'static str),
    /// Show the text as-is
    Display(&'a str),
}

impl ScanResult {
    /// Create a result; actionability follows from `kind`
    pub fn new(raw_text: impl Into<String>, kind: ScanKind, normalized_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            kind,
            normalized_text: normalized_text.into(),
            is_actionable: kind.is_actionable(),
        }
    }

    /// Text exactly as decoded
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Category
    pub fn kind(&self) -> ScanKind {
        self.kind
    }

    /// Normalized representation (e.g. `https://` prepended to bare domains)
    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    /// True exactly for app and web links
    pub fn is_actionable(&self) -> bool {
        self.is_actionable
    }

    /// Front-end reaction for this result
    pub fn action(&self) -> ScanAction<'_> {
        match self.kind {
            ScanKind::AppLink | ScanKind::WebLink => ScanAction::Navigate(&self.normalized_text),
            ScanKind::PaymentCode => ScanAction::Notice(PAYMENT_CODE_NOTICE),
            ScanKind::PlainText => ScanAction::Display(&self.normalized_text),
        }
    }
}
