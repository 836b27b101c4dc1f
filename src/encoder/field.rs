use std::fmt::Write;

use crate::error::EncodingError;
use crate::models::Field;

/// Field encoder: `tag + two-digit length + value`
///
/// Fails with [`EncodingError`] when the tag is not two ASCII digits or the
/// value cannot be represented (longer than 99 characters, or non-ASCII).
pub fn encode_field(tag: &str, value: &str) -> Result<String, EncodingError> {
    Ok(Field::new(tag, value)?.to_string())
}

/// Append an encoded field to `out`, leaving `out` untouched on error
pub(crate) fn push_field(out: &mut String, tag: &str, value: &str) -> Result<(), EncodingError> {
    let field = Field::new(tag, value)?;
    out.reserve(field.encoded_len());
    // Writing into a String cannot fail
    let _ = write!(out, "{field}");
    Ok(())
}
