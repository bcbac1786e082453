use std::borrow::Cow;
use thiserror::Error;

/// The markup could not be tokenized without errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (line {line})")]
pub struct ParseError {
    message: Cow<'static, str>,
    line: u64,
}

impl ParseError {
    #[inline]
    pub(crate) fn new(message: Cow<'static, str>, line: u64) -> Self {
        ParseError { message, line }
    }

    /// Tokenizer diagnostic describing the first problem in the document.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 1-based line number the diagnostic was reported on.
    #[inline]
    pub fn line(&self) -> u64 {
        self.line
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// The input is not a valid byte sequence in the given encoding.
    #[error("The input is malformed in the `{0}` encoding.")]
    MalformedInput(&'static str),
    /// The encoding is not an ASCII-compatible encoding.
    #[error("Expected ASCII-compatible encoding.")]
    NonAsciiCompatibleEncoding,
}

/// A fatal error of a fill operation.
///
/// Unknown fields are never an error: filling a field that doesn't appear in
/// the document leaves the document as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FillError {
    #[error("Failed to parse HTML: {0}")]
    ParseError(#[from] ParseError),
    #[error(transparent)]
    EncodingError(#[from] EncodingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = FillError::from(ParseError::new("Duplicate attribute".into(), 3));

        assert_eq!(
            err.to_string(),
            "Failed to parse HTML: Duplicate attribute (line 3)"
        );

        let err = FillError::from(EncodingError::MalformedInput("Shift_JIS"));

        assert_eq!(
            err.to_string(),
            "The input is malformed in the `Shift_JIS` encoding."
        );
    }
}
