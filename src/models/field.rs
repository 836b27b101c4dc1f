use std::fmt;

use crate::error::EncodingError;

/// Largest value length a two-digit length prefix can carry
pub const MAX_VALUE_LEN: usize = 99;

/// A single tag-length-value unit
///
/// The length is not stored: it is always the character count of `value`,
/// rendered as two zero-padded digits when the field is written out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    tag: String,
    value: String,
}

impl Field {
    /// Validate and create a field
    ///
    /// Fails when the tag is not two ASCII digits, when the value holds
    /// non-ASCII characters, or when it is longer than [`MAX_VALUE_LEN`].
    pub fn new(tag: &str, value: impl Into<String>) -> Result<Self, EncodingError> {
        if tag.len() != 2 || !tag.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EncodingError::InvalidTag(tag.to_string()));
        }

        let value = value.into();
        if !value.is_ascii() {
            return Err(EncodingError::NonAsciiValue {
                tag: tag.to_string(),
            });
        }
        // ASCII only from here on, so bytes == characters
        if value.len() > MAX_VALUE_LEN {
            return Err(EncodingError::ValueTooLong {
                tag: tag.to_string(),
                len: value.len(),
            });
        }

        Ok(Self {
            tag: tag.to_string(),
            value,
        })
    }

    /// Two-digit tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Raw value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Character count of the value
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// True when the value is empty
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of characters the encoded field occupies
    pub fn encoded_len(&self) -> usize {
        4 + self.value.len()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}{}", self.tag, self.value.len(), self.value)
    }
}
