use crate::encoder::tags::CRC_PLACEHOLDER;

const POLY: u16 = 0x1021;
const INIT: u16 = 0xFFFF;

/// CRC-16/CCITT-FALSE as required by the payload standard
///
/// Seed 0xFFFF, polynomial 0x1021, MSB first, no reflection, no final XOR.
/// Each character contributes its code point masked to 8 bits, so the result
/// is only meaningful for ASCII text; the encoder never feeds it anything else.
pub struct Crc16;

impl Crc16 {
    /// Checksum of `text`
    pub fn checksum(text: &str) -> u16 {
        text.chars()
            .map(|c| (c as u32 & 0xFF) as u8)
            .fold(INIT, Self::update)
    }

    /// Checksum rendered as four uppercase hex digits
    pub fn hex(text: &str) -> String {
        format!("{:04X}", Self::checksum(text))
    }

    fn update(crc: u16, byte: u8) -> u16 {
        let mut crc = crc ^ ((byte as u16) << 8);
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLY
            } else {
                crc << 1
            };
        }
        crc
    }
}

/// Append the checksum to a frame that already ends with the `6304` placeholder
pub(crate) fn seal(mut frame: String) -> String {
    debug_assert!(frame.ends_with(CRC_PLACEHOLDER));
    let crc = Crc16::hex(&frame);
    frame.push_str(&crc);
    frame
}

/// Check the trailing CRC of a complete payload
///
/// True when the text ends in `6304` plus four hex digits (either case) that
/// match the checksum of everything up to and including `6304`.
pub fn verify_frame(text: &str) -> bool {
    if !text.is_ascii() || text.len() < CRC_PLACEHOLDER.len() + 4 {
        return false;
    }
    let (body, crc) = text.split_at(text.len() - 4);
    if !body.ends_with(CRC_PLACEHOLDER) {
        return false;
    }
    match u16::from_str_radix(crc, 16) {
        Ok(expected) if crc.bytes().all(|b| b.is_ascii_hexdigit()) => {
            Crc16::checksum(body) == expected
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vector() {
        assert_eq!(Crc16::checksum("123456789"), 0x29B1);
        assert_eq!(Crc16::hex("123456789"), "29B1");
    }

    #[test]
    fn test_empty_input_is_seed() {
        assert_eq!(Crc16::hex(""), "FFFF");
    }

    #[test]
    fn test_zero_padded_uppercase() {
        let hex = Crc16::hex("000201010212");
        assert_eq!(hex.len(), 4);
        assert!(hex.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
    }

    #[test]
    fn test_deterministic() {
        let frame = "00020101021238420010A000000727";
        assert_eq!(Crc16::checksum(frame), Crc16::checksum(frame));
    }

    #[test]
    fn test_high_code_points_masked() {
        // U+0141 masks to 0x41 ('A')
        assert_eq!(Crc16::checksum("\u{0141}"), Crc16::checksum("A"));
    }

    #[test]
    fn test_seal_and_verify() {
        let sealed = seal("0002010102125802VN6304".to_string());
        assert!(sealed.starts_with("0002010102125802VN6304"));
        assert_eq!(sealed.len(), 26);
        assert!(verify_frame(&sealed));

        let (body, crc) = sealed.split_at(sealed.len() - 4);
        assert!(verify_frame(&format!("{}{}", body, crc.to_ascii_lowercase())));
    }

    #[test]
    fn test_verify_rejects_tampering() {
        let sealed = seal("0002010102125802VN6304".to_string());
        let tampered = sealed.replacen("VN", "VX", 1);
        assert!(!verify_frame(&tampered));
        assert!(!verify_frame("000201"));
        assert!(!verify_frame("00020163051234"));
        assert!(!verify_frame("0002016304+FFF"));
    }
}
