//! Helpers shared by the command line tools

use std::fs;
use std::path::Path;

use crate::config::{default_account, default_bank_bin};
use crate::encoder::deeplink::WalletTarget;
use crate::encoder::text::to_ascii;
use crate::models::PaymentRequest;
use crate::render::{RenderFormat, RenderOptions};

/// Request for the configured default beneficiary
pub fn default_request() -> PaymentRequest {
    PaymentRequest::new(default_bank_bin(), default_account())
}

/// Render options seeded from the environment
pub fn render_options(format: RenderFormat) -> RenderOptions {
    RenderOptions {
        size: crate::config::qr_size(),
        quiet_zone: crate::config::quiet_zone(),
        format,
        ..RenderOptions::default()
    }
}

/// Fold purpose text to ASCII when asked to
pub fn prepare_purpose(purpose: &str, transliterate: bool) -> String {
    if transliterate {
        to_ascii(purpose)
    } else {
        purpose.to_string()
    }
}

/// One batch entry: the request and the output it should produce
pub type BatchJob = (PaymentRequest, WalletTarget);

/// Parse one batch line: `bank,account,amount,wallet,purpose`
///
/// Empty bank or account fall back to the configured defaults. An empty wallet
/// means VietQR. The purpose is everything after the fourth comma, so it may
/// contain commas itself.
pub fn parse_batch_line(line: &str) -> Result<BatchJob, String> {
    let mut parts = line.splitn(5, ',');
    let bank = parts.next().unwrap_or_default().trim();
    let account = parts
        .next()
        .ok_or_else(|| format!("expected at least bank,account in {line:?}"))?
        .trim();
    let amount = parts.next().map(str::trim).filter(|a| !a.is_empty());
    let wallet = parts.next().map(str::trim).filter(|w| !w.is_empty());
    let purpose = parts.next().map(str::trim).filter(|p| !p.is_empty());

    let mut request = PaymentRequest::new(
        if bank.is_empty() { default_bank_bin() } else { bank },
        if account.is_empty() { default_account() } else { account },
    );
    request.amount = amount.map(str::to_string);
    request.purpose = purpose.map(str::to_string);
    Ok((request, WalletTarget::resolve(wallet)))
}

/// Read a batch file, skipping blank lines and `#` comments
///
/// Each entry carries its 1-based line number.
pub fn read_batch<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<(usize, Result<BatchJob, String>)>, std::io::Error> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| (idx + 1, parse_batch_line(line)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_batch_line() {
        let (req, target) =
            parse_batch_line("970436, 1234567890, 100000, , Thanh toan, nuoc").unwrap();
        assert_eq!(req.bank_id, "970436");
        assert_eq!(req.account_number, "1234567890");
        assert_eq!(req.amount.as_deref(), Some("100000"));
        assert_eq!(req.purpose.as_deref(), Some("Thanh toan, nuoc"));
        assert_eq!(target, WalletTarget::VietQr);
    }

    #[test]
    fn test_parse_batch_line_wallet() {
        let (req, target) = parse_batch_line("970422,0354424361,50000,MoMo,Tien dien").unwrap();
        assert_eq!(
            target,
            WalletTarget::DeepLink(crate::encoder::deeplink::DeepLinkWallet::MoMo)
        );
        assert_eq!(req.purpose.as_deref(), Some("Tien dien"));

        let (_, target) = parse_batch_line("970422,1,1,ZaloPay").unwrap();
        assert_eq!(target, WalletTarget::VietQr);
    }

    #[test]
    fn test_parse_batch_line_minimal() {
        let (req, target) = parse_batch_line("970436,42").unwrap();
        assert_eq!(req.amount, None);
        assert_eq!(req.purpose, None);
        assert_eq!(target, WalletTarget::VietQr);
        assert!(parse_batch_line("970436").is_err());
    }

    #[test]
    fn test_prepare_purpose() {
        assert_eq!(prepare_purpose("Tiền điện", true), "Tien dien");
        assert_eq!(prepare_purpose("Tiền điện", false), "Tiền điện");
    }

    #[test]
    fn test_read_batch_skips_comments() {
        let dir = std::env::temp_dir().join(format!("payqr-batch-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("batch.csv");
        fs::write(&path, "# bank,account,amount,wallet,purpose\n\n970422,1,500,,a\nbad\n").unwrap();

        let entries = read_batch(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, 3);
        assert!(entries[0].1.is_ok());
        assert_eq!(entries[1].0, 4);
        assert!(entries[1].1.is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
