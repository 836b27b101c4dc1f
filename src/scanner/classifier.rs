use std::sync::OnceLock;

use regex::Regex;

use crate::encoder::tags::PAYLOAD_PREFIX;
use crate::models::{ScanKind, ScanResult};

/// Schemes treated as web links
pub const WEB_SCHEMES: [&str; 2] = ["http", "https"];

/// Non-web schemes that are safe to hand to the OS as app links
///
/// Closed list: anything else with a `scheme:` prefix degrades to plain text.
pub const APP_SCHEMES: [&str; 9] = [
    "ftp",
    "mailto",
    "tel",
    "sms",
    "momo",
    "zalopay",
    "vnpay",
    "shopeepay",
    "viettelmoney",
];

static SCHEME_RE: OnceLock<Regex> = OnceLock::new();
static BARE_DOMAIN_RE: OnceLock<Regex> = OnceLock::new();

fn scheme_re() -> &'static Regex {
    SCHEME_RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):").expect("scheme pattern is valid")
    })
}

fn bare_domain_re() -> &'static Regex {
    BARE_DOMAIN_RE.get_or_init(|| {
        Regex::new(
            r"^(?:[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}(?::[0-9]{1,5})?(?:[/?#]\S*)?$",
        )
        .expect("bare domain pattern is valid")
    })
}

/// Lowercased scheme of `text` when it is on one of the allow-lists
fn allowed_scheme(text: &str) -> Option<String> {
    let scheme = scheme_re().captures(text)?.get(1)?.as_str().to_ascii_lowercase();
    let allowed = WEB_SCHEMES.contains(&scheme.as_str()) || APP_SCHEMES.contains(&scheme.as_str());
    allowed.then_some(scheme)
}

/// One classification rule: a predicate and the result it builds
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short identifier, used in logs and tests
    pub name: &'static str,
    /// Whether the rule applies
    pub predicate: fn(&str) -> bool,
    /// Result for text the predicate accepted
    pub build: fn(&str) -> ScanResult,
}

impl Rule {
    /// Result of this rule, if it applies
    pub fn apply(&self, text: &str) -> Option<ScanResult> {
        (self.predicate)(text).then(|| (self.build)(text))
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

fn is_allowed_link(text: &str) -> bool {
    allowed_scheme(text).is_some()
}

fn build_link(text: &str) -> ScanResult {
    let kind = match allowed_scheme(text) {
        Some(scheme) if WEB_SCHEMES.contains(&scheme.as_str()) => ScanKind::WebLink,
        _ => ScanKind::AppLink,
    };
    ScanResult::new(text, kind, text)
}

fn is_bare_domain(text: &str) -> bool {
    bare_domain_re().is_match(text)
}

fn build_bare_domain(text: &str) -> ScanResult {
    ScanResult::new(text, ScanKind::WebLink, format!("https://{text}"))
}

fn is_payment_code(text: &str) -> bool {
    text.starts_with(PAYLOAD_PREFIX)
}

fn build_payment_code(text: &str) -> ScanResult {
    ScanResult::new(text, ScanKind::PaymentCode, text)
}

fn always(_: &str) -> bool {
    true
}

fn build_plain_text(text: &str) -> ScanResult {
    ScanResult::new(text, ScanKind::PlainText, text)
}

/// Classification rules in precedence order; the first match wins
pub const RULES: [Rule; 4] = [
    Rule {
        name: "allowed-scheme",
        predicate: is_allowed_link,
        build: build_link,
    },
    Rule {
        name: "bare-domain",
        predicate: is_bare_domain,
        build: build_bare_domain,
    },
    Rule {
        name: "payment-code",
        predicate: is_payment_code,
        build: build_payment_code,
    },
    Rule {
        name: "plain-text",
        predicate: always,
        build: build_plain_text,
    },
];

/// Scan classifier over untrusted decoded text
///
/// Total and deterministic: every input gets exactly one result.
pub struct ScanClassifier;

impl ScanClassifier {
    /// Classify decoded QR text
    pub fn classify(text: &str) -> ScanResult {
        RULES
            .iter()
            .find_map(|rule| rule.apply(text))
            .unwrap_or_else(|| build_plain_text(text))
    }

    /// Name of the rule that decides `text`
    pub fn matching_rule(text: &str) -> &'static str {
        RULES
            .iter()
            .find(|rule| (rule.predicate)(text))
            .map_or("plain-text", |rule| rule.name)
    }
}
