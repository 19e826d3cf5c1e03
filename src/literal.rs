//! Locating `X'...'` hex literals in text.

use {
    lazy_static::lazy_static,
    regex::{CaptureMatches, Regex},
};

/// One `X'...'` literal found in some input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'input> {
    /// Byte offset of the leading `X`.
    pub start: usize,
    /// Byte offset just past the closing `'`.
    pub end: usize,
    /// The lowercase hex digits between the quotes, possibly empty.
    pub digits: &'input str,
}

lazy_static! {
    static ref LITERAL: Regex = Regex::new(r"X'([0-9a-f]*)'").unwrap();
}

/// Iterates over the non-overlapping hex literals in `input`, left to right.
#[must_use]
pub fn literals(input: &str) -> Literals<'_> {
    Literals {
        captures: LITERAL.captures_iter(input),
    }
}

/// Iterator returned by [`literals`].
#[derive(Debug)]
pub struct Literals<'input> {
    captures: CaptureMatches<'static, 'input>,
}

impl<'input> Iterator for Literals<'input> {
    type Item = Literal<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        let captures = self.captures.next()?;
        let (whole, digits) = (captures.get(0)?, captures.get(1)?);
        Some(Literal {
            start: whole.start(),
            end: whole.end(),
            digits: digits.as_str(),
        })
    }
}
