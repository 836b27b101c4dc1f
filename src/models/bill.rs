use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Utility bill category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillService {
    /// Electricity
    Electric,
    /// Water
    Water,
    /// Any other invoice
    Bill,
}

impl BillService {
    /// ASCII Vietnamese word used in purpose text
    pub fn purpose_word(&self) -> &'static str {
        match self {
            BillService::Electric => "dien",
            BillService::Water => "nuoc",
            BillService::Bill => "hoa don",
        }
    }
}

impl FromStr for BillService {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "electric" | "dien" => Ok(BillService::Electric),
            "water" | "nuoc" => Ok(BillService::Water),
            "bill" | "hoadon" | "hoa-don" => Ok(BillService::Bill),
            other => Err(format!("unknown bill service: {other}")),
        }
    }
}

/// Bill issuer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    /// EVN (electricity)
    Evn,
    /// Viettel Post
    Viettel,
    /// Municipal water company
    Nuoc,
    /// FPT Telecom
    Fpt,
    /// VNPT - Vinaphone
    Vnpt,
}

impl Provider {
    /// Short code as it appears in purpose text
    pub fn code(&self) -> &'static str {
        match self {
            Provider::Evn => "EVN",
            Provider::Viettel => "VIETTEL",
            Provider::Nuoc => "NUOC",
            Provider::Fpt => "FPT",
            Provider::Vnpt => "VNPT",
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EVN" => Ok(Provider::Evn),
            "VIETTEL" => Ok(Provider::Viettel),
            "NUOC" => Ok(Provider::Nuoc),
            "FPT" => Ok(Provider::Fpt),
            "VNPT" => Ok(Provider::Vnpt),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A bill to pay, used to derive the transfer purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillPayment {
    /// Bill category
    pub service: BillService,
    /// Issuer
    pub provider: Provider,
}

impl BillPayment {
    /// Create a bill payment
    pub fn new(service: BillService, provider: Provider) -> Self {
        Self { service, provider }
    }

    /// Purpose text, e.g. `Thanh toan dien EVN`
    pub fn purpose_text(&self) -> String {
        format!("Thanh toan {} {}", self.service.purpose_word(), self.provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purpose_text() {
        let bill = BillPayment::new(BillService::Electric, Provider::Evn);
        assert_eq!(bill.purpose_text(), "Thanh toan dien EVN");

        let bill = BillPayment::new(BillService::Bill, Provider::Fpt);
        assert_eq!(bill.purpose_text(), "Thanh toan hoa don FPT");
    }

    #[test]
    fn test_parse() {
        assert_eq!("Water".parse::<BillService>(), Ok(BillService::Water));
        assert_eq!("vnpt".parse::<Provider>(), Ok(Provider::Vnpt));
        assert!("gas".parse::<BillService>().is_err());
    }
}
