//! Replacing `X'...'` hex literals with the quoted text they encode.
//!
//! ```
//! assert_eq!(
//!     debin::rewrite("INSERT INTO t VALUES(X'68656c6c6f');").unwrap(),
//!     "INSERT INTO t VALUES('hello');",
//! );
//! ```

use {
    crate::{
        hex::{decode_literal, DecodeError},
        literal::literals,
    },
    std::str::Utf8Error,
    thiserror::Error,
    tracing::{debug, trace},
};

/// A rewrite failure. Nothing is recovered: any one bad literal fails the
/// whole input.
#[derive(Debug, Error)]
pub enum Error {
    /// A literal had an odd number of hex digits.
    #[error("malformed hex literal at byte {offset}: X'{digits}' has an odd number of digits")]
    MalformedHexLiteral {
        /// Byte offset of the literal's `X` in the input.
        offset: usize,
        /// The literal's digits.
        digits: String,
    },
    /// A literal contained something other than a hex digit.
    #[error("malformed hex literal at byte {offset}: {c:?} is not a hex digit")]
    InvalidHexDigit {
        /// Byte offset of the literal's `X` in the input.
        offset: usize,
        /// The offending character.
        c: char,
    },
    /// Some text wasn't valid UTF-8.
    #[error(transparent)]
    TextDecodeError(#[from] TextDecodeError),
}

/// Which text failed to decode as UTF-8.
#[derive(Debug, Error)]
pub enum TextDecodeError {
    /// The raw input.
    #[error("input is not valid UTF-8")]
    Input {
        /// Underlying decode error.
        #[source]
        source: Utf8Error,
    },
    /// The payload of the literal at `offset`.
    #[error("hex literal at byte {offset} does not decode to valid UTF-8")]
    Literal {
        /// Byte offset of the literal's `X` in the input.
        offset: usize,
        /// Underlying decode error.
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Replaces every `X'<hex>'` literal in `input` with `'<text>'`, where
/// `<text>` is the UTF-8 text the hex encodes. Everything else is copied
/// through untouched.
///
/// Only lowercase digits and an uppercase `X` are recognized. The decoded
/// text is not escaped, so a payload containing `'` produces a string that
/// ends early.
///
/// # Errors
///
/// [`Error::MalformedHexLiteral`] for an odd number of digits,
/// [`Error::InvalidHexDigit`] if a digit doesn't decode, and
/// [`Error::TextDecodeError`] if a payload isn't UTF-8.
pub fn rewrite(input: &str) -> Result<String, Error> {
    let mut output = String::with_capacity(input.len());
    let mut copied = 0;
    let mut count = 0_usize;

    for literal in literals(input) {
        let text = decode_literal(literal.digits).map_err(|err| match err {
            DecodeError::OddLength(_) => Error::MalformedHexLiteral {
                offset: literal.start,
                digits: literal.digits.to_string(),
            },
            DecodeError::InvalidDigit { c, .. } => Error::InvalidHexDigit {
                offset: literal.start,
                c,
            },
            DecodeError::Utf8(source) => TextDecodeError::Literal {
                offset: literal.start,
                source,
            }
            .into(),
        })?;

        trace!("Replacing X'{}' at byte {} with {:?}", literal.digits, literal.start, text);

        output.push_str(&input[copied..literal.start]);
        output.push('\'');
        output.push_str(&text);
        output.push('\'');
        copied = literal.end;
        count += 1;
    }

    output.push_str(&input[copied..]);

    debug!("Rewrote {} hex literal(s) in {} bytes of input.", count, input.len());

    Ok(output)
}

/// Like [`rewrite`], but starting from raw bytes, which must be UTF-8.
///
/// # Errors
///
/// [`TextDecodeError::Input`] if `input` isn't UTF-8, otherwise as
/// [`rewrite`].
pub fn rewrite_bytes(input: &[u8]) -> Result<String, Error> {
    let input = std::str::from_utf8(input).map_err(|source| TextDecodeError::Input { source })?;
    rewrite(input)
}
