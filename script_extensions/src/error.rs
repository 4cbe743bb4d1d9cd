// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::MAX_CODE_POINT;

/// Error produced while loading a `Script_Extensions` table.
///
/// Carries a non-exhaustive [`ErrorKind`] and, for errors found while parsing text, the 1-based
/// line number of the offending line. Loading never yields a partial table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    line: Option<usize>,
}

impl Error {
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        Self { kind, line: None }
    }

    pub(crate) const fn at_line(self, line: usize) -> Self {
        Self {
            kind: self.kind,
            line: Some(line),
        }
    }

    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The 1-based line of the source text the error was found on.
    ///
    /// This is `None` for errors raised by a [`TableBuilder`](crate::TableBuilder) directly.
    pub fn line(&self) -> Option<usize> {
        self.line
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.kind),
            None => fmt::Display::fmt(&self.kind, f),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A line did not have the expected number of tab-separated fields.
    MalformedLine,
    /// A code point field was not a hexadecimal number.
    InvalidCodePoint,
    /// A code point was above `U+10FFFF`.
    CodePointOutOfRange,
    /// A range ended before it started.
    InvalidRange,
    /// A range did not start after the end of the previous range.
    Unordered,
    /// A range had no scripts.
    MissingScripts,
    /// A script name was empty or contained characters other than ASCII alphanumerics and `_`.
    InvalidScriptName,
    /// A script name was listed twice for the same range.
    DuplicateScript,
    /// A table used more distinct script names than can be indexed.
    TooManyScripts,
    /// A metadata line appeared after the first data line.
    MisplacedMetadata,
    /// A metadata key was given more than once.
    DuplicateMetadata,
    /// A metadata key was not recognized.
    UnknownMetadata,
    /// A metadata value was empty, ended in a space, or contained a tab or line break.
    InvalidMetadata,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MalformedLine => "malformed line",
            Self::InvalidCodePoint => "code point is not a hexadecimal number",
            Self::CodePointOutOfRange => "code point is above U+10FFFF",
            Self::InvalidRange => "range end is before range start",
            Self::Unordered => "range overlaps or precedes the previous range",
            Self::MissingScripts => "range has no scripts",
            Self::InvalidScriptName => "invalid script name",
            Self::DuplicateScript => "script listed twice for the same range",
            Self::TooManyScripts => "too many distinct script names",
            Self::MisplacedMetadata => "metadata after the first data line",
            Self::DuplicateMetadata => "duplicate metadata key",
            Self::UnknownMetadata => "unknown metadata key",
            Self::InvalidMetadata => "metadata value cannot be written on one line",
        })
    }
}

/// Error returned when a query is given a value outside the Unicode code point space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DomainError {
    code_point: u32,
}

impl DomainError {
    pub(crate) const fn new(code_point: u32) -> Self {
        Self { code_point }
    }

    /// The rejected value.
    pub fn code_point(&self) -> u32 {
        self.code_point
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#X} is outside the code point range 0..={MAX_CODE_POINT:#X}",
            self.code_point
        )
    }
}

impl core::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::{DomainError, Error, ErrorKind};

    #[test]
    fn display_includes_line() {
        let err = Error::new(ErrorKind::Unordered).at_line(12);
        assert_eq!(
            err.to_string(),
            "line 12: range overlaps or precedes the previous range"
        );
        assert_eq!(err.line(), Some(12));
        assert_eq!(err.kind(), ErrorKind::Unordered);
    }

    #[test]
    fn display_without_line() {
        let err = Error::from(ErrorKind::MissingScripts);
        assert_eq!(err.to_string(), "range has no scripts");
        assert_eq!(err.line(), None);
    }

    #[test]
    fn domain_error_display() {
        assert_eq!(
            DomainError::new(0x110000).to_string(),
            "0x110000 is outside the code point range 0..=0x10FFFF"
        );
    }
}
