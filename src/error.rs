//! Input-contract violations raised by the reversal checker.
//!
//! The `Display` text of every variant is part of the public contract: test
//! suites compare it character-for-character, so diagnostic fields carried by
//! a variant are never rendered into the message.

use core::fmt;

use thiserror::Error;

/// Smallest accepted declared element count.
pub const MIN_ELEMENTS: i64 = 2;
/// Largest accepted declared element count.
pub const MAX_ELEMENTS: i64 = 100;

/// The kind of contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckErrorKind {
    /// Declared count outside `[2, 100]`.
    InvalidCount,
    /// No element sequence supplied.
    NullInput,
    /// Sequence length differs from the declared count.
    LengthMismatch,
    /// An element is not a natural number.
    NegativeElement,
}

impl CheckErrorKind {
    /// Returns a stable snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidCount => "invalid_count",
            Self::NullInput => "null_input",
            Self::LengthMismatch => "length_mismatch",
            Self::NegativeElement => "negative_element",
        }
    }
}

impl fmt::Display for CheckErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A violated input contract.
///
/// ```
/// use reversal_check::{CheckError, CheckErrorKind};
///
/// let err = CheckError::NegativeElement { index: 2, value: -3 };
/// assert_eq!(err.kind(), CheckErrorKind::NegativeElement);
/// assert_eq!(
///     err.to_string(),
///     "The element on position 2 is not a natural number."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum CheckError {
    /// Declared count outside `[MIN_ELEMENTS, MAX_ELEMENTS]`.
    #[error("The number of elements is outside the interval [2, 100].")]
    InvalidCount {
        /// The rejected declared count.
        declared: i64,
    },
    /// The element sequence was absent.
    #[error("Input array is null.")]
    NullInput,
    /// The element sequence length differs from the declared count.
    #[error("Input array length is different than the N given.")]
    LengthMismatch {
        /// Declared count.
        declared: i64,
        /// Actual sequence length.
        actual: usize,
    },
    /// The first element (in index order) below zero.
    #[error("The element on position {index} is not a natural number.")]
    NegativeElement {
        /// Zero-based index of the first offending element.
        index: usize,
        /// The offending value.
        value: i64,
    },
}

impl CheckError {
    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> CheckErrorKind {
        match self {
            Self::InvalidCount { .. } => CheckErrorKind::InvalidCount,
            Self::NullInput => CheckErrorKind::NullInput,
            Self::LengthMismatch { .. } => CheckErrorKind::LengthMismatch,
            Self::NegativeElement { .. } => CheckErrorKind::NegativeElement,
        }
    }
}

/// Result type for checker evaluations.
pub type CheckResult<T> = Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_contract_messages() {
        let cases = [
            (
                CheckError::InvalidCount { declared: 0 },
                "The number of elements is outside the interval [2, 100].",
            ),
            (CheckError::NullInput, "Input array is null."),
            (
                CheckError::LengthMismatch {
                    declared: 3,
                    actual: 6,
                },
                "Input array length is different than the N given.",
            ),
            (
                CheckError::NegativeElement {
                    index: 17,
                    value: -1,
                },
                "The element on position 17 is not a natural number.",
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn diagnostic_fields_do_not_leak_into_message() {
        let a = CheckError::InvalidCount { declared: 0 };
        let b = CheckError::InvalidCount { declared: 150 };
        assert_ne!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(CheckErrorKind::InvalidCount.as_str(), "invalid_count");
        assert_eq!(CheckErrorKind::NullInput.to_string(), "null_input");
        assert_eq!(
            CheckError::LengthMismatch {
                declared: 4,
                actual: 3
            }
            .kind(),
            CheckErrorKind::LengthMismatch
        );
    }

    #[test]
    fn error_is_std_error_without_source() {
        let err = CheckError::NullInput;
        let e: &dyn std::error::Error = &err;
        assert!(e.source().is_none());
    }
}
