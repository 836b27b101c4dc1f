use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::PaymentRequest;

/// Characters left as-is, matching JavaScript's `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Wallets and pay-later providers offered to the payer
pub const KNOWN_WALLETS: [&str; 16] = [
    "MoMo",
    "ZaloPay",
    "Kredivo",
    "Fundiin",
    "Lio",
    "FE Credit",
    "HD Saison",
    "Home PayLater",
    "TNEX",
    "Cake",
    "HDBank",
    "SPayLater",
    "TPBank",
    "Muadee",
    "Viettel Money",
    "BVBank",
];

/// Wallets reached through their own transfer deep link instead of VietQR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeepLinkWallet {
    /// MoMo e-wallet
    MoMo,
}

impl DeepLinkWallet {
    /// URI scheme of the wallet app
    pub fn scheme(&self) -> &'static str {
        match self {
            DeepLinkWallet::MoMo => "momo",
        }
    }
}

/// Which output a generation request produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WalletTarget {
    /// Standard VietQR payload, readable by every banking app
    #[default]
    VietQr,
    /// Wallet-specific deep link
    DeepLink(DeepLinkWallet),
}

impl WalletTarget {
    /// Pick the output for a selected wallet name
    ///
    /// Only wallets with a dedicated deep link diverge from VietQR; every other
    /// name, known or not, and no selection at all map to [`WalletTarget::VietQr`].
    pub fn resolve(wallet: Option<&str>) -> Self {
        let target = match wallet.map(str::trim) {
            Some(name) if name.eq_ignore_ascii_case("momo") => {
                WalletTarget::DeepLink(DeepLinkWallet::MoMo)
            }
            _ => WalletTarget::VietQr,
        };
        trace!(?wallet, ?target, "resolved wallet target");
        target
    }
}

/// `<scheme>://?action=transfer&to=<account>&amount=<amount>&comment=<text>`
///
/// The amount falls back to `0` when the request has no positive amount; the
/// comment is the purpose text, percent-encoded.
pub fn transfer_link(wallet: DeepLinkWallet, request: &PaymentRequest) -> String {
    let amount = request.normalized_amount().unwrap_or_else(|| "0".to_string());
    let comment = request.purpose_text().unwrap_or_default();
    format!(
        "{}://?action=transfer&to={}&amount={}&comment={}",
        wallet.scheme(),
        utf8_percent_encode(&request.account_number, COMPONENT),
        amount,
        utf8_percent_encode(comment, COMPONENT),
    )
}
