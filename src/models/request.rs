use serde::{Deserialize, Serialize};

/// Point-of-initiation method (tag `01`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InitiationMethod {
    /// Reusable code, `11`
    Static,
    /// Single-transaction code, `12`
    #[default]
    Dynamic,
}

impl InitiationMethod {
    /// Two-digit wire value
    pub fn code(&self) -> &'static str {
        match self {
            InitiationMethod::Static => "11",
            InitiationMethod::Dynamic => "12",
        }
    }
}

/// Inputs for one payment code
///
/// `amount` and `purpose` are kept as the caller supplied them; the assembler
/// decides whether they produce a field (see [`PaymentRequest::normalized_amount`]
/// and [`PaymentRequest::purpose_text`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Beneficiary bank identifier (BIN), usually 6 digits
    pub bank_id: String,
    /// Beneficiary account number
    pub account_number: String,
    /// Amount in VND as entered
    #[serde(default)]
    pub amount: Option<String>,
    /// Free-text purpose of the transfer
    #[serde(default)]
    pub purpose: Option<String>,
    /// Point-of-initiation method
    #[serde(default)]
    pub initiation: InitiationMethod,
}

impl PaymentRequest {
    /// Request with no amount and no purpose
    pub fn new(bank_id: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self {
            bank_id: bank_id.into(),
            account_number: account_number.into(),
            amount: None,
            purpose: None,
            initiation: InitiationMethod::default(),
        }
    }

    /// Set the amount
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Set the purpose text
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Set the initiation method
    pub fn with_initiation(mut self, initiation: InitiationMethod) -> Self {
        self.initiation = initiation;
        self
    }

    /// Amount as a canonical positive integer, or `None` when it must be omitted
    ///
    /// Surrounding whitespace is ignored and leading zeros are stripped. Anything
    /// other than plain decimal digits (signs, separators, decimals) is treated as
    /// absent, as is zero.
    pub fn normalized_amount(&self) -> Option<String> {
        let raw = self.amount.as_deref()?.trim();
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits = raw.trim_start_matches('0');
        if digits.is_empty() {
            None
        } else {
            Some(digits.to_string())
        }
    }

    /// Purpose text when present and non-empty
    pub fn purpose_text(&self) -> Option<&str> {
        self.purpose.as_deref().filter(|p| !p.is_empty())
    }
}
