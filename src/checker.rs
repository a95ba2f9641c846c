//! The reversal checker: contract validation followed by the mirror scan.
//!
//! Validation runs in a fixed order and stops at the first violation:
//!
//! 1. declared count within `[2, 100]`
//! 2. element list present
//! 3. element list length equals the declared count
//! 4. every element is a natural number (first offender reported)
//!
//! Only then is the last element mirrored and looked up among the elements
//! that precede it.
//!
//! The decision points a mutant may alter are collected in [`CheckRules`].
//! Validation order and failure messages belong to the checker itself.

use crate::error::{CheckError, CheckResult, MAX_ELEMENTS, MIN_ELEMENTS};
use crate::mirror::reverse_digits;
use crate::problem::Problem;

/// Decision points of the reversal predicate.
///
/// Every method has a default that implements the reference behavior, so an
/// alternative implementation overrides only the point it changes.
pub trait CheckRules {
    /// Mirrors the last element. `None` means no element can match.
    fn mirror(&self, value: i64) -> Option<i64> {
        reverse_digits(value)
    }

    /// Returns true when `value` satisfies the natural-number constraint.
    fn is_natural(&self, value: i64) -> bool {
        value >= 0
    }

    /// Number of leading elements scanned for the mirror, given the list length.
    fn scan_len(&self, len: usize) -> usize {
        len.saturating_sub(1)
    }
}

/// The reference rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reference;

impl CheckRules for Reference {}

impl<R: CheckRules + ?Sized> CheckRules for &R {
    fn mirror(&self, value: i64) -> Option<i64> {
        (**self).mirror(value)
    }

    fn is_natural(&self, value: i64) -> bool {
        (**self).is_natural(value)
    }

    fn scan_len(&self, len: usize) -> usize {
        (**self).scan_len(len)
    }
}

/// Evaluates problem instances under a set of [`CheckRules`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReversalChecker<R = Reference> {
    rules: R,
}

impl ReversalChecker<Reference> {
    /// Creates a checker with the reference rules.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Reference }
    }
}

impl<R: CheckRules> ReversalChecker<R> {
    /// Creates a checker over arbitrary rules.
    #[must_use]
    pub const fn with_rules(rules: R) -> Self {
        Self { rules }
    }

    /// Returns the rules in use.
    #[must_use]
    pub const fn rules(&self) -> &R {
        &self.rules
    }

    /// Evaluates a problem instance.
    pub fn check(&self, problem: &Problem) -> CheckResult<bool> {
        self.evaluate(
            problem.declared_count(),
            problem.elements(),
            problem.description(),
        )
    }

    /// Validates the input contract, then reports whether the mirror of the
    /// last element occurs among the elements before it.
    ///
    /// `description` is used only for diagnostics.
    pub fn evaluate(
        &self,
        declared_count: i64,
        elements: Option<&[i64]>,
        description: &str,
    ) -> CheckResult<bool> {
        let outcome = self.evaluate_inner(declared_count, elements);

        #[cfg(feature = "tracing-integration")]
        match &outcome {
            Ok(found) => tracing::trace!(description, declared_count, found, "evaluated"),
            Err(err) => tracing::trace!(
                description,
                declared_count,
                kind = err.kind().as_str(),
                "rejected: {err}"
            ),
        }
        #[cfg(not(feature = "tracing-integration"))]
        let _ = description;

        outcome
    }

    fn evaluate_inner(&self, declared_count: i64, elements: Option<&[i64]>) -> CheckResult<bool> {
        if !(MIN_ELEMENTS..=MAX_ELEMENTS).contains(&declared_count) {
            return Err(CheckError::InvalidCount {
                declared: declared_count,
            });
        }

        let elements = elements.ok_or(CheckError::NullInput)?;

        if usize::try_from(declared_count).ok() != Some(elements.len()) {
            return Err(CheckError::LengthMismatch {
                declared: declared_count,
                actual: elements.len(),
            });
        }

        if let Some((index, &value)) = elements
            .iter()
            .enumerate()
            .find(|&(_, &value)| !self.rules.is_natural(value))
        {
            return Err(CheckError::NegativeElement { index, value });
        }

        // The count check guarantees at least two elements here.
        let last = elements[elements.len() - 1];
        let Some(mirror) = self.rules.mirror(last) else {
            return Ok(false);
        };
        Ok(elements
            .iter()
            .take(self.rules.scan_len(elements.len()))
            .any(|&value| value == mirror))
    }
}

/// Evaluates with the reference rules.
///
/// ```
/// use reversal_check::{evaluate, CheckError};
///
/// assert_eq!(evaluate(4, Some(&[3, 5, 12, 89]), "no match"), Ok(false));
/// assert_eq!(
///     evaluate(10, None, "absent"),
///     Err(CheckError::NullInput)
/// );
/// ```
pub fn evaluate(
    declared_count: i64,
    elements: Option<&[i64]>,
    description: &str,
) -> CheckResult<bool> {
    ReversalChecker::new().evaluate(declared_count, elements, description)
}
