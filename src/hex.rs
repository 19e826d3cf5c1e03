//! Decoding the payload of a hex literal.

use {
    ::hex::FromHexError,
    std::string::FromUtf8Error,
    thiserror::Error,
};

/// Why a literal's digits couldn't be turned into text.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The digits can't be paired up into whole bytes.
    #[error("odd number of hex digits ({0})")]
    OddLength(usize),
    /// A character outside of `0-9a-fA-F` was found.
    #[error("invalid hex digit {c:?} at index {index}")]
    InvalidDigit {
        /// The offending character.
        c: char,
        /// Its index in the digit sequence.
        index: usize,
    },
    /// The decoded bytes aren't UTF-8.
    #[error("payload is not valid UTF-8")]
    Utf8(#[source] FromUtf8Error),
}

/// Decodes a run of hex digits into bytes.
///
/// # Errors
///
/// If `digits` has an odd length or contains anything other than hex digits.
pub fn decode_hex(digits: impl AsRef<str>) -> Result<Vec<u8>, DecodeError> {
    let digits = digits.as_ref();
    ::hex::decode(digits).map_err(|err| match err {
        FromHexError::OddLength => DecodeError::OddLength(digits.len()),
        // Only returned when decoding into a fixed-size buffer.
        FromHexError::InvalidStringLength => DecodeError::OddLength(digits.len()),
        FromHexError::InvalidHexCharacter { c, index } => DecodeError::InvalidDigit { c, index },
    })
}

/// Decodes a run of hex digits into bytes, and those bytes into text.
///
/// # Errors
///
/// If the digits aren't valid hex (see [`decode_hex`]) or the resulting bytes
/// aren't valid UTF-8.
pub fn decode_literal(digits: impl AsRef<str>) -> Result<String, DecodeError> {
    let bytes = decode_hex(digits)?;
    String::from_utf8(bytes).map_err(DecodeError::Utf8)
}
