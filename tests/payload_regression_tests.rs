//! Regression tests for VietQR payload generation
//!
//! Expected frames were built field by field from the tag layout and their
//! trailers checked against an independent CRC-16/CCITT-FALSE implementation.

use pay_qr::encoder::tags::{
    ACCOUNT_TEMPLATE, ADDITIONAL_DATA, AMOUNT, COUNTRY, CRC, CURRENCY, INITIATION_METHOD,
    PAYLOAD_FORMAT, PURPOSE,
};
use pay_qr::{Crc16, EncodingError, InitiationMethod, PaymentRequest, encode_payload, verify_frame};
use proptest::prelude::*;

const MINIMAL: &str =
    "00020101021238420010A000000727012400069704220110035442436153037045802VN630458C2";
const EVN_BILL: &str = "00020101021238420010A000000727012400069704220110035442436153037045405500005802VN62230819Thanh toan dien EVN63047519";
const WATER_BILL: &str = "00020101021238420010A0000007270124000697043601101234567890530370454061000005802VN62240820Thanh toan nuoc NUOC63042530";

/// Split a TLV string into `(tag, value)` pairs; `None` when malformed
fn split_tlv(mut text: &str) -> Option<Vec<(String, String)>> {
    let mut fields = Vec::new();
    while !text.is_empty() {
        if text.len() < 4 {
            return None;
        }
        let tag = &text[..2];
        let len: usize = text[2..4].parse().ok()?;
        let value = text.get(4..4 + len)?;
        fields.push((tag.to_string(), value.to_string()));
        text = &text[4 + len..];
    }
    Some(fields)
}

fn field<'a>(fields: &'a [(String, String)], tag: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(t, _)| t == tag)
        .map(|(_, v)| v.as_str())
}

fn demo() -> PaymentRequest {
    PaymentRequest::new("970422", "0354424361")
}

#[test]
fn test_minimal_payload() {
    assert_eq!(encode_payload(&demo()).unwrap(), MINIMAL);
}

#[test]
fn test_bill_payloads() {
    let evn = demo()
        .with_amount("50000")
        .with_purpose("Thanh toan dien EVN");
    assert_eq!(encode_payload(&evn).unwrap(), EVN_BILL);

    let water = PaymentRequest::new("970436", "1234567890")
        .with_amount("100000")
        .with_purpose("Thanh toan nuoc NUOC");
    assert_eq!(encode_payload(&water).unwrap(), WATER_BILL);
}

#[test]
fn test_amount_field() {
    let payload = encode_payload(&demo().with_amount("50000")).unwrap();
    assert!(payload.contains("540550000"));

    for absent in ["", "0", "000", "  "] {
        let payload = encode_payload(&demo().with_amount(absent)).unwrap();
        assert_eq!(payload, MINIMAL, "amount {absent:?} should be omitted");
    }

    let padded = encode_payload(&demo().with_amount("0050000")).unwrap();
    assert!(padded.contains("540550000"));
}

#[test]
fn test_trailing_crc_matches_prefix() {
    for payload in [MINIMAL, EVN_BILL, WATER_BILL] {
        let (body, crc) = payload.split_at(payload.len() - 4);
        assert!(body.ends_with("6304"));
        assert_eq!(Crc16::hex(body), crc);
        assert!(verify_frame(payload));
    }
}

#[test]
fn test_tampered_payload_fails_verification() {
    let tampered = EVN_BILL.replace("50000", "90000");
    assert!(!verify_frame(&tampered));
}

#[test]
fn test_static_initiation() {
    let payload =
        encode_payload(&demo().with_initiation(InitiationMethod::Static)).unwrap();
    assert!(payload.starts_with("000201010211"));
    assert!(verify_frame(&payload));
}

#[test]
fn test_errors_are_all_or_nothing() {
    let err = encode_payload(&demo().with_purpose("x".repeat(100))).unwrap_err();
    assert_eq!(
        err,
        EncodingError::ValueTooLong {
            tag: "08".to_string(),
            len: 100
        }
    );

    let err = encode_payload(&demo().with_purpose("Tiền điện")).unwrap_err();
    assert!(matches!(err, EncodingError::NonAsciiValue { .. }));
}

#[test]
fn test_nested_templates() {
    let fields = split_tlv(EVN_BILL).unwrap();
    let tags: Vec<&str> = fields.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(tags, ["00", "01", "38", "53", "54", "58", "62", "63"]);

    let account = split_tlv(field(&fields, "38").unwrap()).unwrap();
    assert_eq!(field(&account, "00"), Some("A000000727"));
    let beneficiary = split_tlv(field(&account, "01").unwrap()).unwrap();
    assert_eq!(field(&beneficiary, "00"), Some("970422"));
    assert_eq!(field(&beneficiary, "01"), Some("0354424361"));

    let additional = split_tlv(field(&fields, "62").unwrap()).unwrap();
    assert_eq!(field(&additional, "08"), Some("Thanh toan dien EVN"));
}

fn tlv(tag: &str, value: &str) -> String {
    format!("{tag}{:02}{value}", value.len())
}

/// Fields a request must produce, in order, without the trailing CRC
fn expected_fields(
    bank: &str,
    account: &str,
    amount: Option<&str>,
    purpose: Option<&str>,
) -> Vec<(String, String)> {
    let beneficiary = tlv("00", bank) + &tlv("01", account);
    let account_tpl = tlv("00", "A000000727") + &tlv("01", &beneficiary);

    let mut fields = vec![
        (PAYLOAD_FORMAT.to_string(), "01".to_string()),
        (INITIATION_METHOD.to_string(), "12".to_string()),
        (ACCOUNT_TEMPLATE.to_string(), account_tpl),
        (CURRENCY.to_string(), "704".to_string()),
    ];
    let digits = amount.map(|a| a.trim_start_matches('0')).unwrap_or("");
    if !digits.is_empty() {
        fields.push((AMOUNT.to_string(), digits.to_string()));
    }
    fields.push((COUNTRY.to_string(), "VN".to_string()));
    if let Some(purpose) = purpose.filter(|p| !p.is_empty()) {
        fields.push((ADDITIONAL_DATA.to_string(), tlv(PURPOSE, purpose)));
    }
    fields
}

proptest! {
    #[test]
    fn prop_payload_splits_back_into_ordered_fields(
        bank in "[0-9]{6}",
        account in "[0-9]{6,19}",
        amount in proptest::option::of("[0-9]{0,12}"),
        purpose in proptest::option::of("[A-Za-z0-9 ]{0,60}"),
    ) {
        let mut request = PaymentRequest::new(bank.clone(), account.clone());
        request.amount = amount.clone();
        request.purpose = purpose.clone();
        let payload = encode_payload(&request).unwrap();
        prop_assert!(verify_frame(&payload));

        let mut fields = split_tlv(&payload).unwrap();
        let (crc_tag, crc_value) = fields.pop().unwrap();
        prop_assert_eq!(crc_tag.as_str(), CRC);
        prop_assert_eq!(crc_value.len(), 4);
        prop_assert_eq!(
            fields,
            expected_fields(&bank, &account, amount.as_deref(), purpose.as_deref())
        );
    }

    #[test]
    fn prop_verify_rejects_single_digit_change(pos in 0usize..60, digit in 0u8..10) {
        let body_len = MINIMAL.len() - 4;
        let pos = pos % body_len;
        let mut bytes = MINIMAL.as_bytes().to_vec();
        let replacement = b'0' + digit;
        prop_assume!(bytes[pos] != replacement);
        bytes[pos] = replacement;
        let changed = String::from_utf8(bytes).unwrap();
        prop_assert!(!verify_frame(&changed));
    }
}
