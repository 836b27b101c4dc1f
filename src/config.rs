//! Environment-driven defaults for the command line front end
//!
//! Only the CLI and [`tools`](crate::tools) read these; the encoder and
//! classifier take every input as an explicit argument.

use std::sync::OnceLock;

fn parse_env_string(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static BANK_BIN: OnceLock<String> = OnceLock::new();

/// Beneficiary bank BIN, `PAYQR_BANK_BIN`
pub fn default_bank_bin() -> &'static str {
    BANK_BIN.get_or_init(|| parse_env_string("PAYQR_BANK_BIN", "970422"))
}

static ACCOUNT: OnceLock<String> = OnceLock::new();

/// Beneficiary account number, `PAYQR_ACCOUNT`
pub fn default_account() -> &'static str {
    ACCOUNT.get_or_init(|| parse_env_string("PAYQR_ACCOUNT", "0354424361"))
}

static QR_SIZE: OnceLock<u32> = OnceLock::new();

/// Rendered image edge in pixels, `PAYQR_QR_SIZE`
pub fn qr_size() -> u32 {
    *QR_SIZE.get_or_init(|| parse_env_u32("PAYQR_QR_SIZE", 256).clamp(64, 2048))
}

static QUIET_ZONE: OnceLock<bool> = OnceLock::new();

/// Draw the quiet zone, `PAYQR_QUIET_ZONE` (0 disables)
pub fn quiet_zone() -> bool {
    *QUIET_ZONE.get_or_init(|| parse_env_bool_u8("PAYQR_QUIET_ZONE", true))
}
